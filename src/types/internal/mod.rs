// Internal types - not exposed through the API
pub mod audit;
pub mod auth;
pub mod inventory;
pub mod query;
pub mod users;
