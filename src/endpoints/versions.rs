// src/endpoints/versions.rs
//! API Versions. The only operations that take no API key.

use super::Endpoint;
use crate::error::RequestError;
use crate::query::{Authentication, RequestPlan};

/// `version/current`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentVersion;

impl Endpoint for CurrentVersion {
    fn authentication(&self) -> Authentication {
        Authentication::Public
    }

    fn plan(&self) -> Result<RequestPlan, RequestError> {
        Ok(RequestPlan::at(["version", "current"]))
    }
}

/// `version/supported`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupportedVersions;

impl Endpoint for SupportedVersions {
    fn authentication(&self) -> Authentication {
        Authentication::Public
    }

    fn plan(&self) -> Result<RequestPlan, RequestError> {
        Ok(RequestPlan::at(["version", "supported"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_ignore_the_key() {
        assert_eq!(
            CurrentVersion.url("").unwrap(),
            "https://monitoringapi.solaredge.com/version/current"
        );
        assert_eq!(
            SupportedVersions.url("SOMEKEY").unwrap(),
            "https://monitoringapi.solaredge.com/version/supported"
        );
    }
}
