use std::sync::Arc;

use poem_openapi::{OpenApi, SecurityScheme, auth::Bearer, payload::Json};

use crate::api::ApiTags;
use crate::errors::AuthError;
use crate::services::AuthService;
use crate::types::dto::auth::{LoginRequest, LoginResponse};

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// Authentication API endpoints
pub struct AuthApi {
    auth_service: Arc<AuthService>,
}

impl AuthApi {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

#[OpenApi(prefix_path = "/auth", tag = "ApiTags::Authentication")]
impl AuthApi {
    /// Login with username, password and role
    ///
    /// Each wrong password consumes one of the account's attempts; the
    /// account is blocked when none are left.
    #[oai(path = "/login", method = "post")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let session = self
            .auth_service
            .login(&body.username, &body.password, body.role)
            .await?;

        Ok(Json(LoginResponse {
            access_token: session.access_token,
            token_type: "Bearer".to_string(),
            expires_in: session.expires_in,
            user: session.user.into(),
        }))
    }
}
