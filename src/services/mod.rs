// Services layer - Business logic and orchestration
pub mod admin_service;
pub mod auth_service;
pub mod crypto;
pub mod token_service;

pub use admin_service::AdminService;
pub use auth_service::{AuthService, LoginSession};
pub use token_service::TokenService;
