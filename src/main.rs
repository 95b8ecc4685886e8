// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use solaredge_urls::{AppError, CliConfig, CommandLineInput, CompiledRequest, MonitoringHttpClient};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout stays clean for the URL.
fn setup_logging(verbose: bool) -> Result<(), AppError> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("solaredge_urls.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| AppError::Logging(e.to_string()))?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Compiles the requested operation and prints it, or its response body.
fn execute(config: &CliConfig) -> Result<(), AppError> {
    let endpoint = config.operation.endpoint();
    let request = endpoint.compile(&config.api_key)?;

    if config.fetch {
        let client = MonitoringHttpClient::new()?;
        let response = client.get_text(&request)?;
        log::info!("Fetched /{} ({})", request.path(), response.status);
        println!("{}", response.data);
        return Ok(());
    }

    print_request(&request, config.json)
}

fn print_request(request: &CompiledRequest, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(request)?);
    } else {
        println!("{}", request);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = CliConfig::resolve(cli)?;

    execute(&config)?;

    Ok(())
}
