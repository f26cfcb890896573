// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use crate::app_data::AppData;
use crate::config::{SecretManager, Settings};
use crate::types::db::user;
use crate::types::internal::auth::{Claims, UserRole};
use crate::types::internal::users::NewUser;

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";
pub const TEST_PEPPER: &str = "test-pepper-for-unit-tests";

/// In-memory SQLite database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Full AppData on an in-memory database, auditing into a temp directory
///
/// Keep the returned TempDir alive for as long as the audit log is needed.
pub async fn setup_test_app_data() -> (Arc<AppData>, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = Settings {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        audit_log_file: dir.path().join("admin_actions.log"),
        jwt_expiration_minutes: 60,
    };
    let secrets = SecretManager::from_values(TEST_JWT_SECRET.to_string(), TEST_PEPPER.to_string())
        .expect("Test secrets must be valid");

    let app_data = AppData::new(setup_test_db().await, &settings, &secrets);
    (Arc::new(app_data), dir)
}

pub fn new_user(username: &str, password: &str, role: UserRole) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: password.to_string(),
        full_name: format!("{} test", username),
        rank: String::new(),
        unit: "IT".to_string(),
        notes: String::new(),
        role,
    }
}

/// Claims as the token service would issue them for this account
pub fn claims_for(account: &user::Model) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: account.id.to_string(),
        username: account.username.clone(),
        role: account.role,
        exp: now + 3600,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    }
}
