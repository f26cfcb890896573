use chrono::NaiveDate;

/// Editable workplace fields
///
/// The inventory number is absent on purpose: it is generated on insert and
/// never changed by an update.
#[derive(Debug, Clone, Default)]
pub struct WorkplaceFields {
    pub ip_address: String,
    pub mac_address: String,
    pub access_level: String,
    pub unit: String,
    pub person: String,
    pub contacts: String,
    pub notes: String,
    pub location: Option<String>,
}

/// Software record fields, shared by insert and update
#[derive(Debug, Clone)]
pub struct SoftwareFields {
    pub inventory_number: String,
    pub date: NaiveDate,
    pub software_name: String,
    pub version: String,
    pub license_key: String,
    pub comments: String,
}

/// Maintenance record fields, shared by insert and update
#[derive(Debug, Clone)]
pub struct MaintenanceFields {
    pub inventory_number: String,
    pub date: NaiveDate,
    pub maintenance_type: String,
    pub performed: String,
    pub performed_by: String,
    pub comments: String,
}

/// One bucket of a grouped count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub label: String,
    pub count: i64,
}

/// Aggregate figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStats {
    pub total_workplaces: u64,
    pub total_software: u64,
    pub total_maintenance: u64,
    pub units: Vec<Distribution>,
    pub software_names: Vec<Distribution>,
}
