// Database entities - SeaORM models
pub mod maintenance;
pub mod software;
pub mod user;
pub mod workplace;
