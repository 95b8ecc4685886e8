// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Reading these constants should tell you how the monitoring API is
//! addressed and which limits the builders enforce before the vendor does.

// ---------------------------------------------------------------------------
// Monitoring API addressing
// ---------------------------------------------------------------------------

/// Scheme and host of the SolarEdge monitoring API.
pub const MONITORING_API_BASE: &str = "https://monitoringapi.solaredge.com/";

/// Query key carrying the credential on authenticated operations.
pub const API_KEY_PARAM: &str = "api_key";

/// Environment variable the CLI reads the credential from.
pub const API_KEY_ENV_VAR: &str = "SOLAREDGE_API_KEY";

// ---------------------------------------------------------------------------
// Listing boundaries
// ---------------------------------------------------------------------------

/// Largest page the list endpoints accept. Larger sizes are not sent.
pub const LIST_MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Timestamp wire formats
// ---------------------------------------------------------------------------

/// `startDate`/`endDate` on the day-granularity energy endpoints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `startTime`/`endTime` and the sensor endpoints.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Request timeout for the HTTP helper, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
