// src/endpoints/sensors.rs
//! Sensors API.

use super::Endpoint;
use crate::error::RequestError;
use crate::query::range::SENSOR_RANGE;
use crate::query::{require_site_id, DateRange, QueryParams, RequestPlan, SpanCeiling};
use chrono::NaiveDateTime;

site_resource_endpoint!(
    /// `equipment/{siteId}/sensors`: sensors grouped by the gateway they report through.
    SensorsListParams => "equipment" / "sensors"
);

/// `site/{siteId}/sensors`: readings of every sensor, at most a week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorDataParams {
    pub site_id: i64,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl Endpoint for SensorDataParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let range = DateRange::validate(self.start_date, self.end_date, SENSOR_RANGE, SpanCeiling::Week)?;

        let mut query = QueryParams::new();
        query.insert_range(&range);

        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "sensors".to_string()]).with_query(query))
    }
}
