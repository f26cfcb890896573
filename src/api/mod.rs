// API layer - HTTP endpoints
pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod maintenance;
pub mod software;
pub mod workplace;

use std::sync::Arc;

use poem::Route;
use poem_openapi::{OpenApiService, Tags};

pub use admin::AdminApi;
pub use auth::{AuthApi, BearerAuth};
pub use dashboard::DashboardApi;
pub use health::HealthApi;
pub use maintenance::MaintenanceApi;
pub use software::SoftwareApi;
pub use workplace::WorkplaceApi;

use crate::app_data::AppData;
use crate::services::{AdminService, AuthService};

/// API tags grouping endpoints in the Swagger UI
#[derive(Tags)]
pub enum ApiTags {
    /// Health check endpoints
    Health,
    /// Workplace inventory
    Workplaces,
    /// Installed software records
    Software,
    /// Maintenance history records
    Maintenance,
    /// Statistics and overviews
    Dashboard,
    /// Login
    Authentication,
    /// User account moderation
    Admin,
}

/// Every API handler, in the order they appear in the Swagger UI
pub type Apis = (
    HealthApi,
    WorkplaceApi,
    SoftwareApi,
    MaintenanceApi,
    DashboardApi,
    AuthApi,
    AdminApi,
);

pub fn build_apis(app_data: Arc<AppData>) -> Apis {
    let auth_service = Arc::new(AuthService::new(Arc::clone(&app_data)));
    let admin_service = Arc::new(AdminService::new(Arc::clone(&app_data)));

    (
        HealthApi,
        WorkplaceApi::new(Arc::clone(&app_data.workplace_store)),
        SoftwareApi::new(Arc::clone(&app_data.software_store)),
        MaintenanceApi::new(Arc::clone(&app_data.maintenance_store)),
        DashboardApi::new(&app_data),
        AuthApi::new(auth_service),
        AdminApi::new(admin_service, Arc::clone(&app_data.token_service)),
    )
}

/// Full route tree: the JSON API under `/api`, Swagger UI under `/swagger`
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let api_service = OpenApiService::new(
        build_apis(app_data),
        "Workplace Inventory API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();

    Route::new().nest("/api", api_service).nest("/swagger", ui)
}
