use sea_orm::entity::prelude::*;

use crate::types::internal::auth::{AccountStatus, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub rank: String,
    pub unit: String,
    pub notes: String,

    pub role: UserRole,
    pub status: AccountStatus,

    // Failed logins remaining before the account is blocked
    pub attempts_left: i32,

    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
