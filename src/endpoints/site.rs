// src/endpoints/site.rs
//! Site Data API: listings, telemetry and site media.

use super::{listing_query, Endpoint};
use crate::error::RequestError;
use crate::query::range::{DATE_RANGE, TIME_RANGE};
use crate::query::vocabulary::{METERS, SITE_SORT_PROPERTY, SITE_STATUS, SORT_ORDER, SYSTEM_UNITS, TIME_UNIT};
use crate::query::{
    dedup_serials, require_site_id, sanitize_site_ids, DateRange, QueryParams, RequestPlan,
    SpanCeiling, TimeUnit,
};
use chrono::NaiveDateTime;

/// `sites/list`: the sites visible to the API key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteListParams {
    /// Page size, 0..=100. Other values fall back to the vendor default of 100.
    pub size: Option<i64>,
    pub start_index: Option<i64>,
    pub search_text: Option<String>,
    pub sort_property: Option<String>,
    pub sort_order: Option<String>,
    /// Any of active, pending, disabled, all. Unknown entries are dropped.
    pub status: Vec<String>,
}

impl Endpoint for SiteListParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let mut query = listing_query(self.size, self.start_index, self.search_text.as_deref());
        query
            .insert_term(&SITE_SORT_PROPERTY, self.sort_property.as_deref())
            .insert_term(&SORT_ORDER, self.sort_order.as_deref())
            .insert_terms(&SITE_STATUS, &self.status);

        Ok(RequestPlan::at(["sites", "list"]).with_query(query))
    }
}

site_resource_endpoint!(
    /// `site/{siteId}/details`
    SiteDetailsParams => "site" / "details"
);

site_resource_endpoint!(
    /// `site/{siteId}/dataPeriod`: first and last day with production data.
    DataPeriodParams => "site" / "dataPeriod"
);

bulk_resource_endpoint!(
    DataPeriodBulkParams => "sites" / "dataPeriod"
);

site_resource_endpoint!(
    /// `site/{siteId}/overview`: lifetime, yearly, monthly and daily totals.
    SiteOverviewParams => "site" / "overview"
);

bulk_resource_endpoint!(
    SiteOverviewBulkParams => "sites" / "overview"
);

site_resource_endpoint!(
    /// `site/{siteId}/currentPowerFlow`
    PowerFlowParams => "site" / "currentPowerFlow"
);

/// Energy query shared by the single and bulk builders.
///
/// The resolved time unit picks the ceiling: a month for hour and finer,
/// a year for days, none for week and coarser.
fn energy_query(
    start_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
    time_unit: Option<&str>,
) -> Result<QueryParams, RequestError> {
    let range = DateRange::validate(start_date, end_date, DATE_RANGE, SpanCeiling::Unbounded)?;
    let unit = TimeUnit::resolve(time_unit);
    range.ensure_within(unit.span_ceiling())?;

    let mut query = QueryParams::new();
    query.insert(TIME_UNIT.key(), unit.as_str()).insert_range(&range);
    Ok(query)
}

/// `site/{siteId}/energy`: energy per time unit, day precision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnergyParams {
    pub site_id: i64,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    /// Defaults to DAY when absent or unrecognized.
    pub time_unit: Option<String>,
}

impl Endpoint for SiteEnergyParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let query = energy_query(self.start_date, self.end_date, self.time_unit.as_deref())?;
        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "energy".to_string()]).with_query(query))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnergyBulkParams {
    pub site_ids: Vec<i64>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub time_unit: Option<String>,
}

impl Endpoint for SiteEnergyBulkParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_ids = sanitize_site_ids(&self.site_ids)?;
        let query = energy_query(self.start_date, self.end_date, self.time_unit.as_deref())?;
        Ok(RequestPlan::at(["site".to_string(), site_ids, "energy".to_string()]).with_query(query))
    }
}

fn time_frame_query(
    start_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
) -> Result<QueryParams, RequestError> {
    let range = DateRange::validate(start_date, end_date, DATE_RANGE, SpanCeiling::Year)?;
    let mut query = QueryParams::new();
    query.insert_range(&range);
    Ok(query)
}

/// `site/{siteId}/timeFrameEnergy`: total energy between two dates, at most a year apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnergyTimePeriodParams {
    pub site_id: i64,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl Endpoint for EnergyTimePeriodParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let query = time_frame_query(self.start_date, self.end_date)?;
        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "timeFrameEnergy".to_string()])
            .with_query(query))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnergyTimePeriodBulkParams {
    pub site_ids: Vec<i64>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl Endpoint for EnergyTimePeriodBulkParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_ids = sanitize_site_ids(&self.site_ids)?;
        let query = time_frame_query(self.start_date, self.end_date)?;
        Ok(RequestPlan::at(["site".to_string(), site_ids, "timeFrameEnergy".to_string()]).with_query(query))
    }
}

fn power_query(
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
) -> Result<QueryParams, RequestError> {
    let range = DateRange::validate(start_time, end_time, TIME_RANGE, SpanCeiling::Month)?;
    let mut query = QueryParams::new();
    query.insert_range(&range);
    Ok(query)
}

/// `site/{siteId}/power`: 15-minute power readings, at most a month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePowerParams {
    pub site_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl Endpoint for SitePowerParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let query = power_query(self.start_time, self.end_time)?;
        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "power".to_string()]).with_query(query))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePowerBulkParams {
    pub site_ids: Vec<i64>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl Endpoint for SitePowerBulkParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_ids = sanitize_site_ids(&self.site_ids)?;
        let query = power_query(self.start_time, self.end_time)?;
        Ok(RequestPlan::at(["site".to_string(), site_ids, "power".to_string()]).with_query(query))
    }
}

/// `site/{siteId}/powerDetails`: power per meter. No meters means all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerDetailsParams {
    pub site_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub meters: Vec<String>,
}

impl Endpoint for PowerDetailsParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let range = DateRange::validate(self.start_time, self.end_time, TIME_RANGE, SpanCeiling::Month)?;

        let mut query = QueryParams::new();
        query.insert_terms(&METERS, &self.meters).insert_range(&range);

        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "powerDetails".to_string()])
            .with_query(query))
    }
}

/// `site/{siteId}/energyDetails`: energy per meter, at most a month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnergyDetailsParams {
    pub site_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub time_unit: Option<String>,
    pub meters: Vec<String>,
}

impl Endpoint for EnergyDetailsParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let range = DateRange::validate(self.start_time, self.end_time, TIME_RANGE, SpanCeiling::Month)?;
        let unit = TimeUnit::resolve(self.time_unit.as_deref());
        range.ensure_within(unit.span_ceiling())?;

        let mut query = QueryParams::new();
        query
            .insert(TIME_UNIT.key(), unit.as_str())
            .insert_terms(&METERS, &self.meters)
            .insert_range(&range);

        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "energyDetails".to_string()])
            .with_query(query))
    }
}

/// `site/{siteId}/storageData`: battery state, at most a week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageDataParams {
    pub site_id: i64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Battery serial numbers; empty means every battery on the site.
    pub serials: Vec<String>,
}

impl Endpoint for StorageDataParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let range = DateRange::validate(self.start_time, self.end_time, TIME_RANGE, SpanCeiling::Week)?;

        let mut query = QueryParams::new();
        if let Some(serials) = dedup_serials(&self.serials) {
            query.insert("serials", serials);
        }
        query.insert_range(&range);

        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "storageData".to_string()])
            .with_query(query))
    }
}

/// Appends the optional download file name as a last path segment.
fn with_file_name(plan: RequestPlan, name: Option<&str>) -> RequestPlan {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => plan.push_segment(name),
        None => plan,
    }
}

fn positive_dimension(field: &'static str, value: i64) -> Result<String, RequestError> {
    if value <= 0 {
        return Err(RequestError::invalid(
            field,
            format!("{} is not a positive number of pixels", value),
        ));
    }
    Ok(value.to_string())
}

/// `site/{siteId}/siteImage[/{name}]`: the image uploaded for the site.
///
/// Setting either dimension rescales the original keeping its ratio, and
/// makes the vendor ignore `hash`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteImageParams {
    pub site_id: i64,
    pub name: Option<String>,
    pub max_width: Option<i64>,
    pub max_height: Option<i64>,
    /// Answered with 304 by the vendor when the stored image has this hash.
    pub hash: Option<i64>,
}

impl Endpoint for SiteImageParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;

        let mut query = QueryParams::new();
        if let Some(height) = self.max_height {
            query.insert("maxHeight", positive_dimension("maxHeight", height)?);
        }
        if let Some(width) = self.max_width {
            query.insert("maxWidth", positive_dimension("maxWidth", width)?);
        }
        if let Some(hash) = self.hash {
            query.insert("hash", hash.to_string());
        }

        let plan = RequestPlan::at(["site".to_string(), site_id.to_string(), "siteImage".to_string()]);
        Ok(with_file_name(plan, self.name.as_deref()).with_query(query))
    }
}

/// `site/{siteId}/installerImage[/{name}]`: the installer's logo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerImageParams {
    pub site_id: i64,
    pub name: Option<String>,
}

impl Endpoint for InstallerImageParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;
        let plan = RequestPlan::at(["site".to_string(), site_id.to_string(), "installerImage".to_string()]);
        Ok(with_file_name(plan, self.name.as_deref()))
    }
}

/// `site/{siteId}/envBenefits`: CO2 savings and the like.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvBenefitsParams {
    pub site_id: i64,
    /// Metrics or Imperial; absent means the account owner's setting.
    pub system_units: Option<String>,
}

impl Endpoint for EnvBenefitsParams {
    fn plan(&self) -> Result<RequestPlan, RequestError> {
        let site_id = require_site_id(self.site_id)?;

        let mut query = QueryParams::new();
        query.insert_term(&SYSTEM_UNITS, self.system_units.as_deref());

        Ok(RequestPlan::at(["site".to_string(), site_id.to_string(), "envBenefits".to_string()])
            .with_query(query))
    }
}
