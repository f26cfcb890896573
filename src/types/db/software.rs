use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "software")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inventory_number: String,
    /// Install date
    pub date: Date,
    pub software_name: String,
    pub version: String,
    pub license_key: String,
    pub comments: String,
}

/// Links a software record to its workplace through the inventory number.
///
/// The schema carries no foreign key for this relation, so it is only used
/// for lookups and never enforced on insert or delete.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workplace::Entity",
        from = "Column::InventoryNumber",
        to = "super::workplace::Column::InventoryNumber"
    )]
    Workplace,
}

impl Related<super::workplace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workplace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
