use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, payload::Json};

use crate::api::ApiTags;
use crate::errors::InventoryApiError;
use crate::stores::SoftwareStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::software::{SoftwareRequest, SoftwareResponse};
use crate::types::internal::query::{SoftwareFilter, SortOrder};

pub struct SoftwareApi {
    software_store: Arc<SoftwareStore>,
}

impl SoftwareApi {
    pub fn new(software_store: Arc<SoftwareStore>) -> Self {
        Self { software_store }
    }
}

#[OpenApi(tag = "ApiTags::Software")]
impl SoftwareApi {
    /// List software, optionally filtered by inventory number and name substrings
    #[oai(path = "/software", method = "get")]
    async fn list(
        &self,
        inventory: Query<Option<String>>,
        name: Query<Option<String>>,
        sort: Query<Option<SortOrder>>,
    ) -> Result<Json<Vec<SoftwareResponse>>, InventoryApiError> {
        let filter = SoftwareFilter {
            inventory: inventory.0,
            name: name.0,
            sort: sort.0.unwrap_or_default(),
        };
        let records = self.software_store.list(&filter).await?;
        Ok(Json(records.into_iter().map(SoftwareResponse::from).collect()))
    }

    #[oai(path = "/software", method = "post")]
    async fn create(&self, body: Json<SoftwareRequest>) -> Result<Json<SoftwareResponse>, InventoryApiError> {
        let created = self.software_store.add(body.0.into()).await?;
        Ok(Json(created.into()))
    }

    #[oai(path = "/software/:id", method = "get")]
    async fn get(&self, id: Path<i32>) -> Result<Json<SoftwareResponse>, InventoryApiError> {
        self.software_store
            .get(id.0)
            .await?
            .map(|s| Json(s.into()))
            .ok_or_else(|| InventoryApiError::not_found("Software", id.0))
    }

    #[oai(path = "/software/:id", method = "put")]
    async fn update(
        &self,
        id: Path<i32>,
        body: Json<SoftwareRequest>,
    ) -> Result<Json<SoftwareResponse>, InventoryApiError> {
        let updated = self.software_store.update(id.0, body.0.into()).await?;
        Ok(Json(updated.into()))
    }

    #[oai(path = "/software/:id", method = "delete")]
    async fn delete(&self, id: Path<i32>) -> Result<Json<DeleteResponse>, InventoryApiError> {
        let deleted = self.software_store.delete(id.0).await?;
        Ok(Json(DeleteResponse { deleted }))
    }
}
