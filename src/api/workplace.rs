use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::{OpenApi, payload::Json};

use crate::api::ApiTags;
use crate::errors::InventoryApiError;
use crate::stores::WorkplaceStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::workplace::{
    SearchRequest, WorkplaceHistoryResponse, WorkplaceRequest, WorkplaceResponse,
};

/// Workplace CRUD and search endpoints
pub struct WorkplaceApi {
    workplace_store: Arc<WorkplaceStore>,
}

impl WorkplaceApi {
    pub fn new(workplace_store: Arc<WorkplaceStore>) -> Self {
        Self { workplace_store }
    }
}

#[OpenApi(tag = "ApiTags::Workplaces")]
impl WorkplaceApi {
    /// List all workplaces
    #[oai(path = "/workplaces", method = "get")]
    async fn list(&self) -> Result<Json<Vec<WorkplaceResponse>>, InventoryApiError> {
        let workplaces = self.workplace_store.list().await?;
        Ok(Json(workplaces.into_iter().map(WorkplaceResponse::from).collect()))
    }

    /// Create a workplace
    ///
    /// A fresh inventory number is generated for every new workplace.
    #[oai(path = "/workplaces", method = "post")]
    async fn create(&self, body: Json<WorkplaceRequest>) -> Result<Json<WorkplaceResponse>, InventoryApiError> {
        let created = self.workplace_store.add(body.0.into()).await?;
        Ok(Json(created.into()))
    }

    /// Search workplaces by inventory number, IP, MAC or person
    #[oai(path = "/workplaces/search", method = "post")]
    async fn search(&self, body: Json<SearchRequest>) -> Result<Json<Vec<WorkplaceResponse>>, InventoryApiError> {
        let workplaces = self.workplace_store.search(&body.term).await?;
        Ok(Json(workplaces.into_iter().map(WorkplaceResponse::from).collect()))
    }

    /// All known inventory numbers
    #[oai(path = "/workplaces/inventory-numbers", method = "get")]
    async fn inventory_numbers(&self) -> Result<Json<Vec<String>>, InventoryApiError> {
        Ok(Json(self.workplace_store.inventory_numbers().await?))
    }

    #[oai(path = "/workplaces/:id", method = "get")]
    async fn get(&self, id: Path<i32>) -> Result<Json<WorkplaceResponse>, InventoryApiError> {
        self.workplace_store
            .get(id.0)
            .await?
            .map(|w| Json(w.into()))
            .ok_or_else(|| InventoryApiError::not_found("Workplace", id.0))
    }

    /// Replace every editable field; the inventory number is kept
    #[oai(path = "/workplaces/:id", method = "put")]
    async fn update(
        &self,
        id: Path<i32>,
        body: Json<WorkplaceRequest>,
    ) -> Result<Json<WorkplaceResponse>, InventoryApiError> {
        let updated = self.workplace_store.update(id.0, body.0.into()).await?;
        Ok(Json(updated.into()))
    }

    /// Delete a workplace
    ///
    /// Software and maintenance records filed under its inventory number are kept.
    #[oai(path = "/workplaces/:id", method = "delete")]
    async fn delete(&self, id: Path<i32>) -> Result<Json<DeleteResponse>, InventoryApiError> {
        let deleted = self.workplace_store.delete(id.0).await?;
        Ok(Json(DeleteResponse { deleted }))
    }

    /// A workplace with its software and maintenance history
    #[oai(path = "/workplaces/:id/history", method = "get")]
    async fn history(&self, id: Path<i32>) -> Result<Json<WorkplaceHistoryResponse>, InventoryApiError> {
        let history = self
            .workplace_store
            .history(id.0)
            .await?
            .ok_or_else(|| InventoryApiError::not_found("Workplace", id.0))?;

        Ok(Json(WorkplaceHistoryResponse {
            workplace: history.workplace.into(),
            software: history.software.into_iter().map(Into::into).collect(),
            maintenance: history.maintenance.into_iter().map(Into::into).collect(),
        }))
    }
}
