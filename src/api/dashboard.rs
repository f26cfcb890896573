use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::api::ApiTags;
use crate::app_data::AppData;
use crate::errors::InventoryApiError;
use crate::stores::{MaintenanceStore, SoftwareStore, StatsStore};
use crate::types::dto::dashboard::{DetailsResponse, StatsResponse};
use crate::types::internal::query::{MaintenanceFilter, SoftwareFilter};

/// Read-only overview endpoints
pub struct DashboardApi {
    stats_store: Arc<StatsStore>,
    software_store: Arc<SoftwareStore>,
    maintenance_store: Arc<MaintenanceStore>,
}

impl DashboardApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            stats_store: Arc::clone(&app_data.stats_store),
            software_store: Arc::clone(&app_data.software_store),
            maintenance_store: Arc::clone(&app_data.maintenance_store),
        }
    }
}

#[OpenApi(tag = "ApiTags::Dashboard")]
impl DashboardApi {
    /// Totals and distributions by unit and by software name
    #[oai(path = "/stats", method = "get")]
    async fn stats(&self) -> Result<Json<StatsResponse>, InventoryApiError> {
        Ok(Json(self.stats_store.stats().await?.into()))
    }

    /// Every software and maintenance record, newest first
    #[oai(path = "/details", method = "get")]
    async fn details(&self) -> Result<Json<DetailsResponse>, InventoryApiError> {
        let software = self.software_store.list(&SoftwareFilter::default()).await?;
        let maintenance = self.maintenance_store.list(&MaintenanceFilter::default()).await?;

        Ok(Json(DetailsResponse {
            software: software.into_iter().map(Into::into).collect(),
            maintenance: maintenance.into_iter().map(Into::into).collect(),
        }))
    }
}
