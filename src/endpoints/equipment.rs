// src/endpoints/equipment.rs
//! Site Equipment API.

use super::Endpoint;
use crate::error::RequestError;
use crate::query::range::TIME_RANGE;
use crate::query::{require_serial_number, require_site_id, DateRange, QueryParams, RequestPlan, SpanCeiling};
use chrono::NaiveDateTime;

site_resource_endpoint!(
    /// `equipment/{siteId}/list`: inverters and SMIs with model and serial.
    ComponentsListParams => "equipment" / "list"
);

site_resource_endpoint!(
    /// `site/{siteId}/inventory`: meters, sensors, gateways, batteries and inverters.
    InventoryParams => "site" / "inventory"
);

/// `equipment/{siteId}/{serialNumber}/data`: inverter telemetry, at most a week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InverterDataParams {
    pub site_id: i64,
    pub serial_number: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl Endpoint for InverterDataParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let serial = require_serial_number(&self.serial_number)?;
        let range = DateRange::validate(self.start_time, self.end_time, TIME_RANGE, SpanCeiling::Week)?;

        let mut query = QueryParams::new();
        query.insert_range(&range);

        Ok(RequestPlan::at(["equipment".to_string(), site_id.to_string(), serial.to_string(), "data".to_string()])
            .with_query(query))
    }
}

/// `equipment/{siteId}/{serialNumber}/changeLog`: replacements of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLogParams {
    pub site_id: i64,
    pub serial_number: String,
}

impl Endpoint for ChangeLogParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let serial = require_serial_number(&self.serial_number)?;
        Ok(RequestPlan::at(["equipment".to_string(), site_id.to_string(), serial.to_string(), "changeLog".to_string()]))
    }
}
