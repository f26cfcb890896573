use poem_openapi::Object;

use crate::types::dto::maintenance::MaintenanceResponse;
use crate::types::dto::software::SoftwareResponse;
use crate::types::internal::inventory::{Distribution, InventoryStats};

/// One bucket of a grouped count
#[derive(Object, Debug)]
pub struct DistributionEntry {
    pub label: String,
    pub count: i64,
}

impl From<Distribution> for DistributionEntry {
    fn from(d: Distribution) -> Self {
        Self {
            label: d.label,
            count: d.count,
        }
    }
}

/// Dashboard statistics
#[derive(Object, Debug)]
pub struct StatsResponse {
    pub total_workplaces: u64,
    pub total_software: u64,
    pub total_maintenance: u64,
    /// Workplaces per organizational unit, blank units excluded
    pub units: Vec<DistributionEntry>,
    /// Software records per name, blank names excluded
    pub software_names: Vec<DistributionEntry>,
}

impl From<InventoryStats> for StatsResponse {
    fn from(s: InventoryStats) -> Self {
        Self {
            total_workplaces: s.total_workplaces,
            total_software: s.total_software,
            total_maintenance: s.total_maintenance,
            units: s.units.into_iter().map(DistributionEntry::from).collect(),
            software_names: s.software_names.into_iter().map(DistributionEntry::from).collect(),
        }
    }
}

/// All software and maintenance records, newest first
#[derive(Object, Debug)]
pub struct DetailsResponse {
    pub software: Vec<SoftwareResponse>,
    pub maintenance: Vec<MaintenanceResponse>,
}
