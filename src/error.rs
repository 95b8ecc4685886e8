// src/error.rs
//! Error types with structured error handling.
//!
//! Two layers:
//! - [`RequestError`] is the vocabulary of the URL builders. A builder either
//!   returns a complete URL or exactly one of these.
//! - [`AppError`] covers everything around the builders: configuration,
//!   the optional HTTP helper, output.
//!
//! Unrecognized optional enum values never become errors; they are dropped
//! by the normalizer.

use crate::query::range::SpanCeiling;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Failure kinds a builder can report, without their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingCredential,
    InvalidArgument,
    MissingArgument,
    InvalidRange,
    RangeTooLarge,
}

/// Why a request URL could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("An API key is required for this operation")]
    MissingCredential,

    #[error("Invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("End {end} is before start {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Requested range exceeds the {ceiling} limit of this endpoint")]
    RangeTooLarge { ceiling: SpanCeiling },
}

impl RequestError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// The fieldless kind of this error, convenient for matching in callers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::MissingArgument(_) => ErrorKind::MissingArgument,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::RangeTooLarge { .. } => ErrorKind::RangeTooLarge,
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid timestamp '{input}': expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { input: String },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Monitoring API answered {status} for {path}")]
    VendorStatus {
        status: reqwest::StatusCode,
        path: String,
        body: String,
    },

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
