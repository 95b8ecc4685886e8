// src/endpoints/meters.rs
//! Meters API.

use super::Endpoint;
use crate::error::RequestError;
use crate::query::range::TIME_RANGE;
use crate::query::vocabulary::{METERS_DATA_METERS, TIME_UNIT};
use crate::query::{require_site_id, DateRange, QueryParams, RequestPlan, SpanCeiling, TimeUnit};
use chrono::NaiveDateTime;

/// `site/{siteId}/meters`: lifetime readings per meter and the device it hangs off.
///
/// The vendor enforces its own span limits here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetersDataParams {
    pub site_id: i64,
    pub time_unit: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Production, Consumption, FeedIn or Purchased.
    pub meters: Vec<String>,
}

impl Endpoint for MetersDataParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let range = DateRange::validate(self.start_time, self.end_time, TIME_RANGE, SpanCeiling::Unbounded)?;
        let unit = TimeUnit::resolve(self.time_unit.as_deref());

        let mut query = QueryParams::new();
        query
            .insert(TIME_UNIT.key(), unit.as_str())
            .insert_terms(&METERS_DATA_METERS, &self.meters)
            .insert_range(&range);

        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "meters".to_string()]).with_query(query))
    }
}
