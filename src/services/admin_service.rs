use std::sync::Arc;

use crate::app_data::AppData;
use crate::audit::AuditLogger;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::stores::UserStore;
use crate::types::db::user;
use crate::types::internal::auth::{AccountStatus, Claims, UserRole};
use crate::types::internal::users::NewUser;

/// Admin service for account moderation
///
/// Every operation starts by re-reading the caller's account, so a token
/// issued before a demotion, block or deletion stops working immediately.
/// Every mutation is appended to the audit log with the caller as actor.
pub struct AdminService {
    user_store: Arc<UserStore>,
    audit_logger: Arc<AuditLogger>,
}

impl AdminService {
    /// Create AdminService from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: Arc::clone(&app_data.user_store),
            audit_logger: Arc::clone(&app_data.audit_logger),
        }
    }

    /// Resolve the caller and require an active admin account
    ///
    /// # Returns
    /// * `Ok(Model)` - The caller's current account row
    /// * `Err(InternalError)` - InvalidToken if the account no longer exists,
    ///   AdminRequired or AccountBlocked otherwise
    pub async fn authorize(&self, claims: &Claims) -> Result<user::Model, InternalError> {
        let id = claims
            .user_id()
            .ok_or_else(|| CredentialError::InvalidToken(format!("malformed subject '{}'", claims.sub)))?;

        let caller = self
            .user_store
            .get(id)
            .await?
            .ok_or_else(|| CredentialError::InvalidToken(format!("account {} no longer exists", id)))?;

        if caller.role != UserRole::Admin {
            tracing::warn!("User {} attempted an admin operation", caller.username);
            return Err(CredentialError::AdminRequired.into());
        }
        if caller.status == AccountStatus::Blocked {
            return Err(CredentialError::AccountBlocked(caller.username).into());
        }

        Ok(caller)
    }

    pub async fn list_users(&self, claims: &Claims) -> Result<Vec<user::Model>, InternalError> {
        self.authorize(claims).await?;
        self.user_store.list().await
    }

    /// Create an account; the password is hashed before it is stored
    pub async fn create_user(&self, claims: &Claims, new_user: NewUser) -> Result<user::Model, InternalError> {
        let caller = self.authorize(claims).await?;

        let created = self.user_store.create(new_user).await?;

        tracing::info!("Admin {} created user {}", caller.username, created.username);
        self.audit_logger
            .log_user_created(&caller.username, &created.username, created.role)
            .await;

        Ok(created)
    }

    /// Flip a user between active and blocked
    ///
    /// Unblocking restores the full attempt budget. Admins cannot toggle
    /// their own account.
    pub async fn toggle_status(&self, claims: &Claims, user_id: i32) -> Result<user::Model, InternalError> {
        let caller = self.authorize(claims).await?;
        if caller.id == user_id {
            return Err(CredentialError::SelfModification.into());
        }

        let target = self.user_store.require(user_id).await?;
        let updated = self.user_store.set_status(user_id, target.status.toggled()).await?;

        tracing::info!(
            "Admin {} set status of {} to {}",
            caller.username,
            updated.username,
            updated.status
        );
        self.audit_logger
            .log_user_status_changed(&caller.username, &updated.username, updated.status)
            .await;

        Ok(updated)
    }

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - The user existed and was removed
    /// * `Ok(false)` - No user with this id; nothing is logged
    pub async fn delete_user(&self, claims: &Claims, user_id: i32) -> Result<bool, InternalError> {
        let caller = self.authorize(claims).await?;
        if caller.id == user_id {
            return Err(CredentialError::SelfModification.into());
        }

        let Some(target) = self.user_store.get(user_id).await? else {
            return Ok(false);
        };

        let deleted = self.user_store.delete(user_id).await?;
        if deleted {
            tracing::info!("Admin {} deleted user {}", caller.username, target.username);
            self.audit_logger
                .log_user_deleted(&caller.username, &target.username, target.id)
                .await;
        }

        Ok(deleted)
    }
}
