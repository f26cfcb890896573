use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub inventory_number: String,
    pub date: Date,
    pub maintenance_type: String,
    /// Description of the work performed
    pub performed: String,
    pub performed_by: String,
    pub comments: String,
}

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
