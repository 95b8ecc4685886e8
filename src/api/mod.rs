// src/api/mod.rs
//! Monitoring API transport, the one place that performs network I/O.
//!
//! Nothing in the builders depends on this module; callers that bring their
//! own HTTP client can ignore it.

pub mod client;

pub use client::{ApiResponse, MonitoringHttpClient};
