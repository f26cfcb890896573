use poem_openapi::Object;

use crate::types::db::workplace;
use crate::types::dto::maintenance::MaintenanceResponse;
use crate::types::dto::software::SoftwareResponse;
use crate::types::internal::inventory::WorkplaceFields;

/// Editable workplace fields, used for create and update
#[derive(Object, Debug, Default)]
pub struct WorkplaceRequest {
    #[oai(default)]
    pub ip_address: String,
    #[oai(default)]
    pub mac_address: String,
    #[oai(default)]
    pub access_level: String,
    /// Organizational unit, grouped on in the dashboard statistics
    #[oai(default)]
    pub unit: String,
    /// Person the workplace is assigned to
    #[oai(default)]
    pub person: String,
    #[oai(default)]
    pub contacts: String,
    #[oai(default)]
    pub notes: String,
    pub location: Option<String>,
}

impl From<WorkplaceRequest> for WorkplaceFields {
    fn from(r: WorkplaceRequest) -> Self {
        Self {
            ip_address: r.ip_address,
            mac_address: r.mac_address,
            access_level: r.access_level,
            unit: r.unit,
            person: r.person,
            contacts: r.contacts,
            notes: r.notes,
            location: r.location,
        }
    }
}

#[derive(Object, Debug)]
pub struct WorkplaceResponse {
    pub id: i32,
    /// Generated on creation, never changes
    pub inventory_number: String,
    pub ip_address: String,
    pub mac_address: String,
    pub access_level: String,
    pub unit: String,
    pub person: String,
    pub contacts: String,
    pub notes: String,
    pub location: Option<String>,
}

impl From<workplace::Model> for WorkplaceResponse {
    fn from(m: workplace::Model) -> Self {
        Self {
            id: m.id,
            inventory_number: m.inventory_number,
            ip_address: m.ip_address,
            mac_address: m.mac_address,
            access_level: m.access_level,
            unit: m.unit,
            person: m.person,
            contacts: m.contacts,
            notes: m.notes,
            location: m.location,
        }
    }
}

/// Free-text search over inventory number, IP, MAC and person
#[derive(Object, Debug)]
pub struct SearchRequest {
    pub term: String,
}

/// A workplace with every software and maintenance record filed under its inventory number
#[derive(Object, Debug)]
pub struct WorkplaceHistoryResponse {
    pub workplace: WorkplaceResponse,
    pub software: Vec<SoftwareResponse>,
    pub maintenance: Vec<MaintenanceResponse>,
}
