// src/endpoints/mod.rs
//! One parameter record per monitoring API operation.
//!
//! Every builder runs the same steps: required identifiers, then the date
//! range, then optional filters, then assembly with the credential. None of
//! them touch the network.

use crate::constants::LIST_MAX_PAGE_SIZE;
use crate::error::RequestError;
use crate::query::{Authentication, CompiledRequest, QueryParams, RequestPlan};

/// Declares a record whose only input is one site id, addressed as
/// `<prefix>/{siteId}/<resource>`.
macro_rules! site_resource_endpoint {
    ($(#[$meta:meta])* $name:ident => $prefix:literal / $resource:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name {
            pub site_id: i64,
        }

        impl $name {
            pub fn new(site_id: i64) -> Self {
                Self { site_id }
            }
        }

        impl $crate::endpoints::Endpoint for $name {
            fn plan(&self) -> Result<$crate::query::RequestPlan, $crate::error::RequestError> {
                let site_id = $crate::query::require_site_id(self.site_id)?;
                Ok($crate::query::RequestPlan::at([
                    $prefix.to_string(),
                    site_id.to_string(),
                    $resource.to_string(),
                ]))
            }
        }
    };
}

/// Bulk counterpart of `site_resource_endpoint!`: `<prefix>/{id,id,...}/<resource>`.
macro_rules! bulk_resource_endpoint {
    ($(#[$meta:meta])* $name:ident => $prefix:literal / $resource:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub site_ids: Vec<i64>,
        }

        impl $name {
            pub fn new(site_ids: impl Into<Vec<i64>>) -> Self {
                Self {
                    site_ids: site_ids.into(),
                }
            }
        }

        impl $crate::endpoints::Endpoint for $name {
            fn plan(&self) -> Result<$crate::query::RequestPlan, $crate::error::RequestError> {
                let site_ids = $crate::query::sanitize_site_ids(&self.site_ids)?;
                Ok($crate::query::RequestPlan::at([
                    $prefix.to_string(),
                    site_ids,
                    $resource.to_string(),
                ]))
            }
        }
    };
}

pub mod accounts;
pub mod equipment;
pub mod meters;
pub mod sensors;
pub mod site;
pub mod versions;

/// A monitoring API operation that can be compiled into a request URL.
pub trait Endpoint {
    /// Whether the operation carries `api_key`.
    fn authentication(&self) -> Authentication {
        Authentication::ApiKey
    }

    /// Validates the parameters and lays out path and query.
    fn plan(&self) -> Result<RequestPlan, RequestError>;

    fn compile(&self, api_key: &str) -> Result<CompiledRequest, RequestError> {
        let plan = self.plan()?;
        CompiledRequest::assemble(plan, self.authentication(), api_key)
    }

    /// The request URL as a string.
    fn url(&self, api_key: &str) -> Result<String, RequestError> {
        Ok(self.compile(api_key)?.to_string())
    }
}

/// Paging and search shared by the site and account listings.
///
/// Sizes outside `0..=100` and negative offsets are left for the vendor
/// default rather than rejected.
pub(crate) fn listing_query(
    size: Option<i64>,
    start_index: Option<i64>,
    search_text: Option<&str>,
) -> QueryParams {
    let mut query = QueryParams::new();

    match size {
        Some(size) if (0..=LIST_MAX_PAGE_SIZE).contains(&size) => {
            query.insert("size", size.to_string());
        }
        Some(size) => log::debug!("Dropping out-of-range page size {}", size),
        None => {}
    }

    match start_index {
        Some(start) if start >= 0 => {
            query.insert("startIndex", start.to_string());
        }
        Some(start) => log::debug!("Dropping negative startIndex {}", start),
        None => {}
    }

    query.insert_text("searchText", search_text);
    query
}
