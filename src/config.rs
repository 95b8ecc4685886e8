// src/config.rs
use crate::constants::{API_KEY_ENV_VAR, DATE_FORMAT, DATE_TIME_FORMAT};
use crate::error::AppError;
use crate::operation::Operation;
use crate::query::Authentication;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Monitoring API key (defaults to the SOLAREDGE_API_KEY environment variable)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print the compiled request as JSON instead of the bare URL
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Perform the GET and print the response body
    #[arg(long, global = true, default_value_t = false)]
    pub fetch: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

/// Resolved configuration, ready to compile and optionally send one request.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_key: String,
    pub verbose: bool,
    pub json: bool,
    pub fetch: bool,
    pub operation: Operation,
}

impl CliConfig {
    /// Resolves the configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Same as `resolve` with the environment value passed in. The flag wins.
    pub fn resolve_with(cli: CommandLineInput, env_key: Option<String>) -> Result<Self, AppError> {
        let api_key = cli
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or(env_key)
            .unwrap_or_default();

        let needs_key = cli.operation.endpoint().authentication() == Authentication::ApiKey;
        if needs_key && api_key.trim().is_empty() {
            return Err(AppError::MissingConfiguration(format!(
                "no API key: pass --api-key or set {}",
                API_KEY_ENV_VAR
            )));
        }

        Ok(CliConfig {
            api_key,
            verbose: cli.verbose,
            json: cli.json,
            fetch: cli.fetch,
            operation: cli.operation,
        })
    }
}

/// Parses `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD` as midnight.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, AppError> {
    let trimmed = input.trim();

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT) {
        return Ok(timestamp);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(AppError::InvalidTimestamp {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::try_parse_from(args).unwrap()
    }

    #[test]
    fn timestamps_accept_date_and_date_time() {
        let midnight = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(midnight.to_string(), "2024-03-01 00:00:00");

        let exact = parse_timestamp(" 2024-03-01 13:45:00 ").unwrap();
        assert_eq!(exact.to_string(), "2024-03-01 13:45:00");

        assert!(matches!(
            parse_timestamp("03/01/2024"),
            Err(AppError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn flag_wins_over_environment() {
        let cli = parse(&["solaredge-urls", "--api-key", "FLAG", "site-details", "--site-id", "1"]);
        let config = CliConfig::resolve_with(cli, Some("ENV".to_string())).unwrap();
        assert_eq!(config.api_key, "FLAG");
    }

    #[test]
    fn environment_fills_in_missing_flag() {
        let cli = parse(&["solaredge-urls", "inventory", "--site-id", "1"]);
        let config = CliConfig::resolve_with(cli, Some("ENV".to_string())).unwrap();
        assert_eq!(config.api_key, "ENV");
    }

    #[test]
    fn authenticated_operation_without_key_is_rejected() {
        let cli = parse(&["solaredge-urls", "inventory", "--site-id", "1"]);
        assert!(matches!(
            CliConfig::resolve_with(cli, None),
            Err(AppError::MissingConfiguration(_))
        ));
    }

    #[test]
    fn version_operations_need_no_key() {
        let cli = parse(&["solaredge-urls", "current-version"]);
        let config = CliConfig::resolve_with(cli, None).unwrap();
        assert!(config.api_key.is_empty());
    }
}
