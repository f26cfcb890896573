use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, payload::Json};

use crate::api::ApiTags;
use crate::errors::InventoryApiError;
use crate::stores::MaintenanceStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::maintenance::{MaintenanceRequest, MaintenanceResponse};
use crate::types::internal::query::{MaintenanceFilter, SortOrder};

pub struct MaintenanceApi {
    maintenance_store: Arc<MaintenanceStore>,
}

impl MaintenanceApi {
    pub fn new(maintenance_store: Arc<MaintenanceStore>) -> Self {
        Self { maintenance_store }
    }
}

#[OpenApi(tag = "ApiTags::Maintenance")]
impl MaintenanceApi {
    /// List maintenance records, optionally filtered by inventory number substring
    #[oai(path = "/maintenance", method = "get")]
    async fn list(
        &self,
        inventory: Query<Option<String>>,
        sort: Query<Option<SortOrder>>,
    ) -> Result<Json<Vec<MaintenanceResponse>>, InventoryApiError> {
        let filter = MaintenanceFilter {
            inventory: inventory.0,
            sort: sort.0.unwrap_or_default(),
        };
        let records = self.maintenance_store.list(&filter).await?;
        Ok(Json(records.into_iter().map(MaintenanceResponse::from).collect()))
    }

    #[oai(path = "/maintenance", method = "post")]
    async fn create(&self, body: Json<MaintenanceRequest>) -> Result<Json<MaintenanceResponse>, InventoryApiError> {
        let created = self.maintenance_store.add(body.0.into()).await?;
        Ok(Json(created.into()))
    }

    #[oai(path = "/maintenance/:id", method = "get")]
    async fn get(&self, id: Path<i32>) -> Result<Json<MaintenanceResponse>, InventoryApiError> {
        self.maintenance_store
            .get(id.0)
            .await?
            .map(|m| Json(m.into()))
            .ok_or_else(|| InventoryApiError::not_found("Maintenance", id.0))
    }

    #[oai(path = "/maintenance/:id", method = "put")]
    async fn update(
        &self,
        id: Path<i32>,
        body: Json<MaintenanceRequest>,
    ) -> Result<Json<MaintenanceResponse>, InventoryApiError> {
        let updated = self.maintenance_store.update(id.0, body.0.into()).await?;
        Ok(Json(updated.into()))
    }

    #[oai(path = "/maintenance/:id", method = "delete")]
    async fn delete(&self, id: Path<i32>) -> Result<Json<DeleteResponse>, InventoryApiError> {
        let deleted = self.maintenance_store.delete(id.0).await?;
        Ok(Json(DeleteResponse { deleted }))
    }
}
