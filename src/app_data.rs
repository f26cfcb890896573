use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::audit::AuditLogger;
use crate::config::{SecretManager, Settings, database};
use crate::errors::InternalError;
use crate::services::TokenService;
use crate::stores::{MaintenanceStore, SoftwareStore, StatsStore, UserStore, WorkplaceStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once at startup and shared as `Arc<AppData>`.
/// Services and API handlers pick out the pieces they need.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings, secrets)
///   ↓ connects, migrates, creates once
///   ├─ db (DatabaseConnection)
///   ├─ workplace_store / software_store / maintenance_store / stats_store
///   ├─ user_store (holds the pepper)
///   ├─ token_service (holds the JWT secret)
///   └─ audit_logger (append-only file)
///   ↓ wrapped in Arc<AppData>
///   ├─ AuthService::new(app_data)
///   └─ AdminService::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub workplace_store: Arc<WorkplaceStore>,
    pub software_store: Arc<SoftwareStore>,
    pub maintenance_store: Arc<MaintenanceStore>,
    pub stats_store: Arc<StatsStore>,
    pub user_store: Arc<UserStore>,
    pub token_service: Arc<TokenService>,
    pub audit_logger: Arc<AuditLogger>,
}

impl AppData {
    /// Connect to the database, run migrations and build all stores
    pub async fn init(settings: &Settings, secrets: &SecretManager) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let db = database::init_database(settings).await?;
        let app_data = Self::new(db, settings, secrets);

        tracing::info!("AppData initialization complete");
        Ok(app_data)
    }

    /// Build all stores on an existing, already migrated connection
    pub fn new(db: DatabaseConnection, settings: &Settings, secrets: &SecretManager) -> Self {
        Self {
            workplace_store: Arc::new(WorkplaceStore::new(db.clone())),
            software_store: Arc::new(SoftwareStore::new(db.clone())),
            maintenance_store: Arc::new(MaintenanceStore::new(db.clone())),
            stats_store: Arc::new(StatsStore::new(db.clone())),
            user_store: Arc::new(UserStore::new(db.clone(), secrets.pepper().to_string())),
            token_service: Arc::new(TokenService::new(
                secrets.jwt_secret().to_string(),
                settings.jwt_expiration_minutes,
            )),
            audit_logger: Arc::new(AuditLogger::new(settings.audit_log_file.clone())),
            db,
        }
    }
}
