// src/lib.rs
//! solaredge-urls library: validated request URLs for the SolarEdge monitoring API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `RequestError`, `ErrorKind`, `AppError`
//! - **Configuration**: `CommandLineInput`, `CliConfig`
//! - **Endpoints**: one parameter record per operation, all implementing `Endpoint`
//! - **Query compiler**: `Vocabulary`, `DateRange`, `TimeUnit`, `CompiledRequest`
//! - **Transport**: `MonitoringHttpClient` for callers without their own HTTP client
//!
//! ```
//! use solaredge_urls::{Endpoint, SiteListParams};
//!
//! let params = SiteListParams {
//!     size: Some(50),
//!     sort_property: Some("Name".to_string()),
//!     status: vec!["active".to_string(), "bogus".to_string(), "active".to_string()],
//!     ..Default::default()
//! };
//! let url = params.url("KEY").unwrap();
//! assert_eq!(
//!     url,
//!     "https://monitoringapi.solaredge.com/sites/list?size=50&sortProperty=Name&status=Active&api_key=KEY"
//! );
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod operation;
pub mod query;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, ErrorKind, RequestError};

// --- Configuration ---
pub use crate::config::{parse_timestamp, CliConfig, CommandLineInput};
pub use crate::operation::Operation;

// --- Domain Types ---
pub use crate::types::ApiKey;

// --- Query Compiler ---
pub use crate::query::{
    Authentication, CompiledRequest, DateRange, QueryParams, RequestPlan, SpanCeiling, TimeUnit,
    Vocabulary,
};

// --- Endpoints ---
pub use crate::endpoints::accounts::AccountListParams;
pub use crate::endpoints::equipment::{
    ChangeLogParams, ComponentsListParams, InventoryParams, InverterDataParams,
};
pub use crate::endpoints::meters::MetersDataParams;
pub use crate::endpoints::sensors::{SensorDataParams, SensorsListParams};
pub use crate::endpoints::site::{
    DataPeriodBulkParams, DataPeriodParams, EnergyDetailsParams, EnergyTimePeriodBulkParams,
    EnergyTimePeriodParams, EnvBenefitsParams, InstallerImageParams, PowerDetailsParams,
    PowerFlowParams, SiteDetailsParams, SiteEnergyBulkParams, SiteEnergyParams, SiteImageParams,
    SiteListParams, SiteOverviewBulkParams, SiteOverviewParams, SitePowerBulkParams,
    SitePowerParams, StorageDataParams,
};
pub use crate::endpoints::versions::{CurrentVersion, SupportedVersions};
pub use crate::endpoints::Endpoint;

// --- Transport ---
pub use crate::api::{ApiResponse, MonitoringHttpClient};
