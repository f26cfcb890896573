use chrono::NaiveDate;
use poem_openapi::Object;

use crate::types::db::software;
use crate::types::internal::inventory::SoftwareFields;

#[derive(Object, Debug)]
pub struct SoftwareRequest {
    /// Inventory number of the workplace the software is installed on
    pub inventory_number: String,
    /// Install date, `YYYY-MM-DD`
    pub date: NaiveDate,
    pub software_name: String,
    #[oai(default)]
    pub version: String,
    #[oai(default)]
    pub license_key: String,
    #[oai(default)]
    pub comments: String,
}

impl From<SoftwareRequest> for SoftwareFields {
    fn from(r: SoftwareRequest) -> Self {
        Self {
            inventory_number: r.inventory_number,
            date: r.date,
            software_name: r.software_name,
            version: r.version,
            license_key: r.license_key,
            comments: r.comments,
        }
    }
}

#[derive(Object, Debug)]
pub struct SoftwareResponse {
    pub id: i32,
    pub inventory_number: String,
    pub date: NaiveDate,
    pub software_name: String,
    pub version: String,
    pub license_key: String,
    pub comments: String,
}

impl From<software::Model> for SoftwareResponse {
    fn from(m: software::Model) -> Self {
        Self {
            id: m.id,
            inventory_number: m.inventory_number,
            date: m.date,
            software_name: m.software_name,
            version: m.version,
            license_key: m.license_key,
            comments: m.comments,
        }
    }
}
