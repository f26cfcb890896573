use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::errors::internal::{CredentialError, InventoryError};
use crate::services::crypto;
use crate::types::db::user;
use crate::types::internal::auth::{AccountStatus, MAX_LOGIN_ATTEMPTS};
use crate::types::internal::users::NewUser;

/// UserStore manages accounts and their lockout counters
pub struct UserStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl UserStore {
    /// Create a new UserStore
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `password_pepper` - Secret mixed into every password hash (from SecretManager)
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self { db, password_pepper }
    }

    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))
    }

    pub async fn get(&self, id: i32) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_user", e))
    }

    /// Like `get`, but a missing row is a `UserIdNotFound` error
    pub async fn require(&self, id: i32) -> Result<user::Model, InternalError> {
        self.get(id)
            .await?
            .ok_or_else(|| CredentialError::UserIdNotFound(id).into())
    }

    pub async fn list(&self) -> Result<Vec<user::Model>, InternalError> {
        user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    /// Create an active account with a full set of login attempts
    ///
    /// # Returns
    /// * `Ok(Model)` - The inserted user
    /// * `Err(InternalError)` - Validation for a blank username or password,
    ///   DuplicateUsername if the name is taken, or a database/crypto error
    pub async fn create(&self, new_user: NewUser) -> Result<user::Model, InternalError> {
        let username = new_user.username.trim().to_string();
        if username.is_empty() {
            return Err(InventoryError::validation("username", "must not be empty").into());
        }
        if new_user.password.is_empty() {
            return Err(InventoryError::validation("password", "must not be empty").into());
        }

        if self.find_by_username(&username).await?.is_some() {
            return Err(CredentialError::DuplicateUsername(username).into());
        }

        let password_hash = crypto::hash_password(&self.password_pepper, &new_user.password)?;
        let now = Utc::now().timestamp();

        let model = user::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            username: Set(username.clone()),
            password_hash: Set(password_hash),
            full_name: Set(new_user.full_name),
            rank: Set(new_user.rank),
            unit: Set(new_user.unit),
            notes: Set(new_user.notes),
            role: Set(new_user.role),
            status: Set(AccountStatus::Active),
            attempts_left: Set(MAX_LOGIN_ATTEMPTS),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            if InternalError::is_unique_violation(&e) {
                CredentialError::DuplicateUsername(username.clone()).into()
            } else {
                InternalError::database("create_user", e)
            }
        })?;

        tracing::debug!("Created user {} ({}) with role {}", model.id, model.username, model.role);

        Ok(model)
    }

    /// Consume one login attempt, blocking the account when none are left
    ///
    /// Both statements are single UPDATEs, so two concurrent failures can
    /// never push the counter below zero.
    pub async fn record_failed_attempt(&self, id: i32) -> Result<user::Model, InternalError> {
        let now = Utc::now().timestamp();

        user::Entity::update_many()
            .col_expr(
                user::Column::AttemptsLeft,
                Expr::col(user::Column::AttemptsLeft).sub(1),
            )
            .col_expr(user::Column::UpdatedAt, Expr::value(now))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::AttemptsLeft.gt(0))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("decrement_attempts", e))?;

        user::Entity::update_many()
            .col_expr(user::Column::Status, Expr::value(AccountStatus::Blocked.as_str()))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::AttemptsLeft.lte(0))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("block_user", e))?;

        self.require(id).await
    }

    /// Restore the full attempt budget after a successful login
    pub async fn reset_attempts(&self, id: i32) -> Result<(), InternalError> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::AttemptsLeft, Expr::value(MAX_LOGIN_ATTEMPTS))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now().timestamp()))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("reset_attempts", e))?;

        if result.rows_affected == 0 {
            return Err(CredentialError::UserIdNotFound(id).into());
        }
        Ok(())
    }

    /// Set the account status
    ///
    /// Activating an account also restores its attempt budget.
    pub async fn set_status(&self, id: i32, status: AccountStatus) -> Result<user::Model, InternalError> {
        let mut update = user::Entity::update_many()
            .col_expr(user::Column::Status, Expr::value(status.as_str()))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now().timestamp()))
            .filter(user::Column::Id.eq(id));

        if status == AccountStatus::Active {
            update = update.col_expr(user::Column::AttemptsLeft, Expr::value(MAX_LOGIN_ATTEMPTS));
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("set_user_status", e))?;

        if result.rows_affected == 0 {
            return Err(CredentialError::UserIdNotFound(id).into());
        }

        self.require(id).await
    }

    /// Delete a user; `false` when the id did not exist
    pub async fn delete(&self, id: i32) -> Result<bool, InternalError> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_user", e))?;
        Ok(result.rows_affected > 0)
    }
}
