#![allow(dead_code)]

// Common test utilities for integration tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::Route;
use poem::test::{TestClient, TestResponse};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{Value, json};
use workplace_inventory::app_data::AppData;
use workplace_inventory::config::{SecretManager, Settings};
use workplace_inventory::types::internal::auth::UserRole;
use workplace_inventory::types::internal::users::NewUser;

pub const JWT_SECRET: &str = "integration-secret-key-minimum-32-chars";
pub const PEPPER: &str = "integration-pepper-value";

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// A running application against an in-memory database
///
/// The audit log lives in a temp directory that is removed on drop.
pub struct TestApp {
    pub app_data: Arc<AppData>,
    pub client: TestClient<Route>,
    pub audit_dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let audit_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = Settings {
            database_url: "sqlite::memory:".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            audit_log_file: audit_dir.path().join("admin_actions.log"),
            jwt_expiration_minutes: 60,
        };
        let secrets = SecretManager::from_values(JWT_SECRET.to_string(), PEPPER.to_string())
            .expect("Test secrets must be valid");

        let app_data = Arc::new(AppData::new(setup_test_db().await, &settings, &secrets));
        let routes = workplace_inventory::api::build_routes(Arc::clone(&app_data), "http://localhost:3000/api");

        Self {
            app_data,
            client: TestClient::new(routes),
            audit_dir,
        }
    }

    pub async fn create_user(&self, username: &str, password: &str, role: UserRole) -> i32 {
        self.app_data
            .user_store
            .create(NewUser {
                username: username.to_string(),
                password: password.to_string(),
                full_name: String::new(),
                rank: String::new(),
                unit: String::new(),
                notes: String::new(),
                role,
            })
            .await
            .expect("Failed to create user")
            .id
    }

    pub async fn login(&self, username: &str, password: &str, role: &str) -> TestResponse {
        self.client
            .post("/api/auth/login")
            .body_json(&json!({ "username": username, "password": password, "role": role }))
            .send()
            .await
    }

    /// Log in and return the access token, panicking on failure
    pub async fn token(&self, username: &str, password: &str, role: &str) -> String {
        let resp = self.login(username, password, role).await;
        resp.assert_status_is_ok();
        body(resp).await["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    pub fn audit_log(&self) -> String {
        std::fs::read_to_string(self.app_data.audit_logger.path()).unwrap_or_default()
    }
}

pub async fn body(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body is not JSON")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
