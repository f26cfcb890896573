use std::sync::Arc;

use crate::app_data::AppData;
use crate::audit::AuditLogger;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::services::{TokenService, crypto};
use crate::stores::UserStore;
use crate::types::db::user;
use crate::types::internal::auth::{AccountStatus, UserRole};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub access_token: String,
    pub expires_in: i64,
    pub user: user::Model,
}

/// Authentication service implementing the login/lockout state machine
///
/// An active account tolerates `MAX_LOGIN_ATTEMPTS` wrong passwords in a
/// row; the failure that brings the counter to zero also blocks the
/// account. A blocked account is rejected before its password is checked.
/// A successful login restores the full counter.
pub struct AuthService {
    user_store: Arc<UserStore>,
    token_service: Arc<TokenService>,
    audit_logger: Arc<AuditLogger>,
}

impl AuthService {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: Arc::clone(&app_data.user_store),
            token_service: Arc::clone(&app_data.token_service),
            audit_logger: Arc::clone(&app_data.audit_logger),
        }
    }

    /// Perform a login with the requested role
    ///
    /// The username is trimmed the same way `UserStore::create` trims it.
    /// Checks run in this order and stop at the first failure:
    /// unknown username, role mismatch, blocked account, wrong password.
    /// Only the last one consumes an attempt.
    ///
    /// # Returns
    /// * `Ok(LoginSession)` - Token plus the account as stored after the reset
    /// * `Err(InternalError)` - A `CredentialError` describing the failed check
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<LoginSession, InternalError> {
        let username = username.trim();
        let Some(account) = self.user_store.find_by_username(username).await? else {
            self.audit_logger.log_login_failure(username, "unknown username").await;
            return Err(CredentialError::UserNotFound(username.to_string()).into());
        };

        if account.role != role {
            self.audit_logger
                .log_login_failure(username, &format!("requested role {} but account is {}", role, account.role))
                .await;
            return Err(CredentialError::RoleMismatch(username.to_string()).into());
        }

        if account.status == AccountStatus::Blocked {
            self.audit_logger.log_login_failure(username, "account is blocked").await;
            return Err(CredentialError::AccountBlocked(username.to_string()).into());
        }

        let password_matches =
            crypto::verify_password(self.user_store.password_pepper(), password, &account.password_hash)?;

        if !password_matches {
            let updated = self.user_store.record_failed_attempt(account.id).await?;
            tracing::info!(
                "Failed login for {}, {} attempts left",
                username,
                updated.attempts_left
            );
            self.audit_logger
                .log_login_failure(username, &format!("wrong password, {} attempts left", updated.attempts_left))
                .await;
            if updated.status == AccountStatus::Blocked {
                tracing::warn!("Account {} blocked after failed login attempts", username);
                self.audit_logger.log_account_blocked(username).await;
            }
            return Err(CredentialError::InvalidCredentials {
                attempts_left: updated.attempts_left,
            }
            .into());
        }

        self.user_store.reset_attempts(account.id).await?;
        let account = self.user_store.require(account.id).await?;

        let access_token = self.token_service.generate_jwt(&account)?;
        self.audit_logger.log_login_success(username, account.role).await;
        tracing::info!("User {} logged in as {}", username, account.role);

        Ok(LoginSession {
            access_token,
            expires_in: self.token_service.expires_in(),
            user: account,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{new_user, setup_test_app_data};
    use crate::types::internal::auth::MAX_LOGIN_ATTEMPTS;

    async fn service_with_user(role: UserRole) -> (AuthService, Arc<AppData>, tempfile::TempDir, i32) {
        let (app_data, dir) = setup_test_app_data().await;
        let user = app_data
            .user_store
            .create(new_user("sidorov", "correct-horse", role))
            .await
            .expect("create failed");
        (AuthService::new(Arc::clone(&app_data)), app_data, dir, user.id)
    }

    #[tokio::test]
    async fn test_successful_login_returns_valid_token() {
        let (service, app_data, _dir, id) = service_with_user(UserRole::User).await;

        let session = service.login("sidorov", "correct-horse", UserRole::User).await.expect("login failed");

        let claims = app_data.token_service.validate_jwt(&session.access_token).expect("token invalid");
        assert_eq!(claims.user_id(), Some(id));
        assert_eq!(claims.role, UserRole::User);
        assert_eq!(session.user.attempts_left, MAX_LOGIN_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let (service, _app_data, _dir, _) = service_with_user(UserRole::User).await;

        let result = service.login("nobody", "x", UserRole::User).await;

        assert!(matches!(result, Err(InternalError::Credential(CredentialError::UserNotFound(_)))));
    }

    #[tokio::test]
    async fn test_role_mismatch_does_not_consume_attempts() {
        let (service, app_data, _dir, id) = service_with_user(UserRole::User).await;

        let result = service.login("sidorov", "wrong", UserRole::Admin).await;

        assert!(matches!(result, Err(InternalError::Credential(CredentialError::RoleMismatch(_)))));
        let stored = app_data.user_store.require(id).await.expect("lookup failed");
        assert_eq!(stored.attempts_left, MAX_LOGIN_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_wrong_password_reports_remaining_attempts() {
        let (service, _app_data, _dir, _) = service_with_user(UserRole::User).await;

        let result = service.login("sidorov", "wrong", UserRole::User).await;

        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::InvalidCredentials { attempts_left: 2 }))
        ));
    }

    #[tokio::test]
    async fn test_last_attempt_blocks_and_correct_password_is_then_refused() {
        let (service, app_data, _dir, id) = service_with_user(UserRole::User).await;
        for _ in 0..2 {
            let _ = service.login("sidorov", "wrong", UserRole::User).await;
        }
        assert_eq!(app_data.user_store.require(id).await.expect("lookup").attempts_left, 1);

        let result = service.login("sidorov", "wrong", UserRole::User).await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::InvalidCredentials { attempts_left: 0 }))
        ));
        let stored = app_data.user_store.require(id).await.expect("lookup");
        assert_eq!(stored.status, AccountStatus::Blocked);

        let result = service.login("sidorov", "correct-horse", UserRole::User).await;
        assert!(matches!(result, Err(InternalError::Credential(CredentialError::AccountBlocked(_)))));
    }

    #[tokio::test]
    async fn test_success_resets_attempts() {
        let (service, app_data, _dir, id) = service_with_user(UserRole::User).await;
        let _ = service.login("sidorov", "wrong", UserRole::User).await;
        let _ = service.login("sidorov", "wrong", UserRole::User).await;

        service.login("sidorov", "correct-horse", UserRole::User).await.expect("login failed");

        let stored = app_data.user_store.require(id).await.expect("lookup");
        assert_eq!(stored.attempts_left, MAX_LOGIN_ATTEMPTS);
        assert_eq!(stored.status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn test_login_events_reach_audit_log() {
        let (service, app_data, _dir, _) = service_with_user(UserRole::User).await;
        for _ in 0..3 {
            let _ = service.login("sidorov", "wrong", UserRole::User).await;
        }

        let contents = std::fs::read_to_string(app_data.audit_logger.path()).expect("read log");
        assert_eq!(contents.matches("login_failure actor=sidorov").count(), 3);
        assert!(contents.contains("account_blocked actor=sidorov"));
    }

    #[tokio::test]
    async fn test_username_with_surrounding_whitespace_logs_in() {
        let (service, _app_data, _dir, id) = service_with_user(UserRole::User).await;

        let session = service
            .login("  sidorov ", "correct-horse", UserRole::User)
            .await
            .expect("login failed");

        assert_eq!(session.user.id, id);
    }

    #[tokio::test]
    async fn test_newline_in_username_cannot_forge_audit_lines() {
        let (service, app_data, _dir, _) = service_with_user(UserRole::User).await;

        let result = service
            .login(
                "x\n[2025-01-01T00:00:00Z] user_deleted actor=root deleted user 'alice' (id 7)",
                "pw",
                UserRole::User,
            )
            .await;

        assert!(matches!(result, Err(InternalError::Credential(CredentialError::UserNotFound(_)))));
        let contents = std::fs::read_to_string(app_data.audit_logger.path()).expect("read log");
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with('['));
        assert!(!contents.lines().any(|l| l.starts_with("[2025-01-01T00:00:00Z]")));
        assert!(contents.contains("login_failure actor=\"x\\n[2025-01-01T00:00:00Z]"));
    }
}
