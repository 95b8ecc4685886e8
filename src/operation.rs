// src/operation.rs
//! Command-line vocabulary: one subcommand per monitoring API operation.

use crate::config::parse_timestamp;
use crate::endpoints::accounts::AccountListParams;
use crate::endpoints::equipment::{ChangeLogParams, ComponentsListParams, InventoryParams, InverterDataParams};
use crate::endpoints::meters::MetersDataParams;
use crate::endpoints::sensors::{SensorDataParams, SensorsListParams};
use crate::endpoints::site::*;
use crate::endpoints::versions;
use crate::endpoints::Endpoint;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};

#[derive(Args, Debug, Clone)]
pub struct SiteArg {
    /// Site identifier
    #[arg(long, allow_negative_numbers = true)]
    pub site_id: i64,
}

#[derive(Args, Debug, Clone)]
pub struct BulkArg {
    /// Comma-separated site identifiers
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub site_ids: Vec<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Range start, YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS"
    #[arg(long, value_parser = parse_timestamp)]
    pub start: Option<NaiveDateTime>,

    /// Range end, YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS"
    #[arg(long, value_parser = parse_timestamp)]
    pub end: Option<NaiveDateTime>,
}

#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Page size, 0-100
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub start_index: Option<i64>,

    #[arg(long)]
    pub search_text: Option<String>,

    #[arg(long)]
    pub sort_property: Option<String>,

    /// ASC or DESC
    #[arg(long)]
    pub sort_order: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Operation {
    /// sites/list
    SiteList {
        #[command(flatten)]
        listing: ListingArgs,
        /// Comma-separated: active, pending, disabled, all
        #[arg(long, value_delimiter = ',')]
        status: Vec<String>,
    },
    /// site/{id}/details
    SiteDetails(SiteArg),
    /// site/{id}/dataPeriod
    DataPeriod(SiteArg),
    /// sites/{ids}/dataPeriod
    DataPeriodBulk(BulkArg),
    /// site/{id}/energy
    Energy {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        time_unit: Option<String>,
    },
    /// site/{ids}/energy
    EnergyBulk {
        #[command(flatten)]
        sites: BulkArg,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        time_unit: Option<String>,
    },
    /// site/{id}/timeFrameEnergy
    TimeFrameEnergy {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// site/{ids}/timeFrameEnergy
    TimeFrameEnergyBulk {
        #[command(flatten)]
        sites: BulkArg,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// site/{id}/power
    Power {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// site/{ids}/power
    PowerBulk {
        #[command(flatten)]
        sites: BulkArg,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// site/{id}/overview
    Overview(SiteArg),
    /// sites/{ids}/overview
    OverviewBulk(BulkArg),
    /// site/{id}/powerDetails
    PowerDetails {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, value_delimiter = ',')]
        meters: Vec<String>,
    },
    /// site/{id}/energyDetails
    EnergyDetails {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        time_unit: Option<String>,
        #[arg(long, value_delimiter = ',')]
        meters: Vec<String>,
    },
    /// site/{id}/currentPowerFlow
    PowerFlow(SiteArg),
    /// site/{id}/storageData
    StorageData {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, value_delimiter = ',')]
        serials: Vec<String>,
    },
    /// site/{id}/siteImage[/{name}]
    SiteImage {
        #[command(flatten)]
        site: SiteArg,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        max_width: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max_height: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        hash: Option<i64>,
    },
    /// site/{id}/installerImage[/{name}]
    InstallerImage {
        #[command(flatten)]
        site: SiteArg,
        #[arg(long)]
        name: Option<String>,
    },
    /// site/{id}/envBenefits
    EnvBenefits {
        #[command(flatten)]
        site: SiteArg,
        /// Metrics or Imperial
        #[arg(long)]
        system_units: Option<String>,
    },
    /// equipment/{id}/list
    Components(SiteArg),
    /// site/{id}/inventory
    Inventory(SiteArg),
    /// equipment/{id}/{serial}/data
    InverterData {
        #[command(flatten)]
        site: SiteArg,
        #[arg(long)]
        serial_number: String,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// equipment/{id}/{serial}/changeLog
    ChangeLog {
        #[command(flatten)]
        site: SiteArg,
        #[arg(long)]
        serial_number: String,
    },
    /// accounts/list
    AccountList {
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// site/{id}/meters
    Meters {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        time_unit: Option<String>,
        #[arg(long, value_delimiter = ',')]
        meters: Vec<String>,
    },
    /// equipment/{id}/sensors
    Sensors(SiteArg),
    /// site/{id}/sensors
    SensorData {
        #[command(flatten)]
        site: SiteArg,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// version/current
    CurrentVersion,
    /// version/supported
    SupportedVersions,
}

impl Operation {
    /// The parameter record this subcommand stands for.
    pub fn endpoint(&self) -> Box<dyn Endpoint> {
        match self.clone() {
            Self::SiteList { listing, status } => Box::new(SiteListParams {
                size: listing.size,
                start_index: listing.start_index,
                search_text: listing.search_text,
                sort_property: listing.sort_property,
                sort_order: listing.sort_order,
                status,
            }),
            Self::SiteDetails(site) => Box::new(SiteDetailsParams::new(site.site_id)),
            Self::DataPeriod(site) => Box::new(DataPeriodParams::new(site.site_id)),
            Self::DataPeriodBulk(sites) => Box::new(DataPeriodBulkParams::new(sites.site_ids)),
            Self::Energy {
                site,
                range,
                time_unit,
            } => Box::new(SiteEnergyParams {
                site_id: site.site_id,
                start_date: range.start,
                end_date: range.end,
                time_unit,
            }),
            Self::EnergyBulk {
                sites,
                range,
                time_unit,
            } => Box::new(SiteEnergyBulkParams {
                site_ids: sites.site_ids,
                start_date: range.start,
                end_date: range.end,
                time_unit,
            }),
            Self::TimeFrameEnergy { site, range } => Box::new(EnergyTimePeriodParams {
                site_id: site.site_id,
                start_date: range.start,
                end_date: range.end,
            }),
            Self::TimeFrameEnergyBulk { sites, range } => Box::new(EnergyTimePeriodBulkParams {
                site_ids: sites.site_ids,
                start_date: range.start,
                end_date: range.end,
            }),
            Self::Power { site, range } => Box::new(SitePowerParams {
                site_id: site.site_id,
                start_time: range.start,
                end_time: range.end,
            }),
            Self::PowerBulk { sites, range } => Box::new(SitePowerBulkParams {
                site_ids: sites.site_ids,
                start_time: range.start,
                end_time: range.end,
            }),
            Self::Overview(site) => Box::new(SiteOverviewParams::new(site.site_id)),
            Self::OverviewBulk(sites) => Box::new(SiteOverviewBulkParams::new(sites.site_ids)),
            Self::PowerDetails {
                site,
                range,
                meters,
            } => Box::new(PowerDetailsParams {
                site_id: site.site_id,
                start_time: range.start,
                end_time: range.end,
                meters,
            }),
            Self::EnergyDetails {
                site,
                range,
                time_unit,
                meters,
            } => Box::new(EnergyDetailsParams {
                site_id: site.site_id,
                start_time: range.start,
                end_time: range.end,
                time_unit,
                meters,
            }),
            Self::PowerFlow(site) => Box::new(PowerFlowParams::new(site.site_id)),
            Self::StorageData {
                site,
                range,
                serials,
            } => Box::new(StorageDataParams {
                site_id: site.site_id,
                start_time: range.start,
                end_time: range.end,
                serials,
            }),
            Self::SiteImage {
                site,
                name,
                max_width,
                max_height,
                hash,
            } => Box::new(SiteImageParams {
                site_id: site.site_id,
                name,
                max_width,
                max_height,
                hash,
            }),
            Self::InstallerImage { site, name } => Box::new(InstallerImageParams {
                site_id: site.site_id,
                name,
            }),
            Self::EnvBenefits { site, system_units } => Box::new(EnvBenefitsParams {
                site_id: site.site_id,
                system_units,
            }),
            Self::Components(site) => Box::new(ComponentsListParams::new(site.site_id)),
            Self::Inventory(site) => Box::new(InventoryParams::new(site.site_id)),
            Self::InverterData {
                site,
                serial_number,
                range,
            } => Box::new(InverterDataParams {
                site_id: site.site_id,
                serial_number,
                start_time: range.start,
                end_time: range.end,
            }),
            Self::ChangeLog {
                site,
                serial_number,
            } => Box::new(ChangeLogParams {
                site_id: site.site_id,
                serial_number,
            }),
            Self::AccountList { listing } => Box::new(AccountListParams {
                size: listing.size,
                start_index: listing.start_index,
                search_text: listing.search_text,
                sort_property: listing.sort_property,
                sort_order: listing.sort_order,
            }),
            Self::Meters {
                site,
                range,
                time_unit,
                meters,
            } => Box::new(MetersDataParams {
                site_id: site.site_id,
                time_unit,
                start_time: range.start,
                end_time: range.end,
                meters,
            }),
            Self::Sensors(site) => Box::new(SensorsListParams::new(site.site_id)),
            Self::SensorData { site, range } => Box::new(SensorDataParams {
                site_id: site.site_id,
                start_date: range.start,
                end_date: range.end,
            }),
            Self::CurrentVersion => Box::new(versions::CurrentVersion),
            Self::SupportedVersions => Box::new(versions::SupportedVersions),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CommandLineInput;
    use clap::Parser;

    fn url_for(args: &[&str]) -> String {
        let cli = CommandLineInput::try_parse_from(args).unwrap();
        cli.operation.endpoint().url("KEY").unwrap()
    }

    #[test]
    fn bulk_ids_accept_negative_values() {
        let url = url_for(&["solaredge-urls", "overview-bulk", "--site-ids=-5,10,10,20"]);
        assert_eq!(
            url,
            "https://monitoringapi.solaredge.com/sites/10,20/overview?api_key=KEY"
        );
    }

    #[test]
    fn energy_subcommand_parses_dates() {
        let url = url_for(&[
            "solaredge-urls",
            "energy",
            "--site-id",
            "3",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
            "--time-unit",
            "month",
        ]);
        assert_eq!(
            url,
            "https://monitoringapi.solaredge.com/site/3/energy?timeUnit=MONTH&startDate=2024-01-01&endDate=2024-01-31&api_key=KEY"
        );
    }

    #[test]
    fn site_list_status_is_comma_separated() {
        let url = url_for(&["solaredge-urls", "site-list", "--status", "pending,ACTIVE"]);
        assert_eq!(
            url,
            "https://monitoringapi.solaredge.com/sites/list?status=Active%2CPending&api_key=KEY"
        );
    }
}
