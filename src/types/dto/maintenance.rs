use chrono::NaiveDate;
use poem_openapi::Object;

use crate::types::db::maintenance;
use crate::types::internal::inventory::MaintenanceFields;

#[derive(Object, Debug)]
pub struct MaintenanceRequest {
    pub inventory_number: String,
    /// Date the work was done, `YYYY-MM-DD`
    pub date: NaiveDate,
    #[oai(default)]
    pub maintenance_type: String,
    /// Description of the work performed
    #[oai(default)]
    pub performed: String,
    #[oai(default)]
    pub performed_by: String,
    #[oai(default)]
    pub comments: String,
}

impl From<MaintenanceRequest> for MaintenanceFields {
    fn from(r: MaintenanceRequest) -> Self {
        Self {
            inventory_number: r.inventory_number,
            date: r.date,
            maintenance_type: r.maintenance_type,
            performed: r.performed,
            performed_by: r.performed_by,
            comments: r.comments,
        }
    }
}

#[derive(Object, Debug)]
pub struct MaintenanceResponse {
    pub id: i32,
    pub inventory_number: String,
    pub date: NaiveDate,
    pub maintenance_type: String,
    pub performed: String,
    pub performed_by: String,
    pub comments: String,
}

impl From<maintenance::Model> for MaintenanceResponse {
    fn from(m: maintenance::Model) -> Self {
        Self {
            id: m.id,
            inventory_number: m.inventory_number,
            date: m.date,
            maintenance_type: m.maintenance_type,
            performed: m.performed,
            performed_by: m.performed_by,
            comments: m.comments,
        }
    }
}
