use std::sync::Arc;

use poem_openapi::param::Path;
use poem_openapi::{OpenApi, payload::Json};

use crate::api::ApiTags;
use crate::api::auth::BearerAuth;
use crate::errors::AdminError;
use crate::services::{AdminService, TokenService};
use crate::types::dto::admin::{CreateUserRequest, UserResponse};
use crate::types::dto::common::DeleteResponse;
use crate::types::internal::auth::Claims;

/// Account moderation endpoints, restricted to active admin accounts
pub struct AdminApi {
    admin_service: Arc<AdminService>,
    token_service: Arc<TokenService>,
}

impl AdminApi {
    pub fn new(admin_service: Arc<AdminService>, token_service: Arc<TokenService>) -> Self {
        Self {
            admin_service,
            token_service,
        }
    }

    fn claims(&self, auth: &BearerAuth) -> Result<Claims, AdminError> {
        Ok(self.token_service.validate_jwt(&auth.0.token)?)
    }
}

#[OpenApi(prefix_path = "/admin", tag = "ApiTags::Admin")]
impl AdminApi {
    /// List all user accounts
    #[oai(path = "/users", method = "get")]
    async fn list_users(&self, auth: BearerAuth) -> Result<Json<Vec<UserResponse>>, AdminError> {
        let claims = self.claims(&auth)?;
        let users = self.admin_service.list_users(&claims).await?;
        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    /// Create a user account
    #[oai(path = "/users", method = "post")]
    async fn create_user(
        &self,
        auth: BearerAuth,
        body: Json<CreateUserRequest>,
    ) -> Result<Json<UserResponse>, AdminError> {
        let claims = self.claims(&auth)?;
        let created = self.admin_service.create_user(&claims, body.0.into()).await?;
        Ok(Json(created.into()))
    }

    /// Toggle a user between active and blocked
    #[oai(path = "/users/:id/status", method = "post")]
    async fn toggle_status(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<UserResponse>, AdminError> {
        let claims = self.claims(&auth)?;
        let updated = self.admin_service.toggle_status(&claims, id.0).await?;
        Ok(Json(updated.into()))
    }

    #[oai(path = "/users/:id", method = "delete")]
    async fn delete_user(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<DeleteResponse>, AdminError> {
        let claims = self.claims(&auth)?;
        let deleted = self.admin_service.delete_user(&claims, id.0).await?;
        Ok(Json(DeleteResponse { deleted }))
    }
}
