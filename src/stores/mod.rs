// Stores layer - Data access and repository pattern
pub mod maintenance_store;
pub mod software_store;
pub mod stats_store;
pub mod user_store;
pub mod workplace_store;

pub use maintenance_store::MaintenanceStore;
pub use software_store::SoftwareStore;
pub use stats_store::StatsStore;
pub use user_store::UserStore;
pub use workplace_store::{WorkplaceHistory, WorkplaceStore};
