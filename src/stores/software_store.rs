use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::errors::internal::InventoryError;
use crate::types::db::software;
use crate::types::internal::inventory::SoftwareFields;
use crate::types::internal::query::{SoftwareFilter, non_blank};

/// Repository for the `software` table
pub struct SoftwareStore {
    db: DatabaseConnection,
}

impl SoftwareStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List software records matching the filter, ordered by install date
    ///
    /// Rows sharing a date are ordered by id so results are stable.
    pub async fn list(&self, filter: &SoftwareFilter) -> Result<Vec<software::Model>, InternalError> {
        let mut query = software::Entity::find();

        if let Some(inventory) = non_blank(filter.inventory.as_deref()) {
            query = query.filter(software::Column::InventoryNumber.contains(inventory));
        }
        if let Some(name) = non_blank(filter.name.as_deref()) {
            query = query.filter(software::Column::SoftwareName.contains(name));
        }

        let order = filter.sort.as_sea_order();

        query
            .order_by(software::Column::Date, order.clone())
            .order_by(software::Column::Id, order)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_software", e))
    }

    pub async fn get(&self, id: i32) -> Result<Option<software::Model>, InternalError> {
        software::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_software", e))
    }

    /// Add a software record
    ///
    /// The inventory number is stored as given; it is not checked against
    /// the workplaces table.
    pub async fn add(&self, fields: SoftwareFields) -> Result<software::Model, InternalError> {
        validate(&fields)?;

        let model = software::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            inventory_number: Set(fields.inventory_number),
            date: Set(fields.date),
            software_name: Set(fields.software_name),
            version: Set(fields.version),
            license_key: Set(fields.license_key),
            comments: Set(fields.comments),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("add_software", e))?;

        tracing::debug!("Added software {} for {}", model.id, model.inventory_number);

        Ok(model)
    }

    pub async fn update(&self, id: i32, fields: SoftwareFields) -> Result<software::Model, InternalError> {
        validate(&fields)?;

        let changes = software::ActiveModel {
            inventory_number: Set(fields.inventory_number),
            date: Set(fields.date),
            software_name: Set(fields.software_name),
            version: Set(fields.version),
            license_key: Set(fields.license_key),
            comments: Set(fields.comments),
            ..Default::default()
        };

        let result = software::Entity::update_many()
            .set(changes)
            .filter(software::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_software", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Software", id).into());
        }

        self.get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found("Software", id).into())
    }

    /// Delete a software record; `Ok(false)` when the id does not exist
    pub async fn delete(&self, id: i32) -> Result<bool, InternalError> {
        let result = software::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_software", e))?;

        Ok(result.rows_affected > 0)
    }
}

fn validate(fields: &SoftwareFields) -> Result<(), InternalError> {
    if fields.inventory_number.trim().is_empty() {
        return Err(InventoryError::validation("inventory_number", "must not be empty").into());
    }
    if fields.software_name.trim().is_empty() {
        return Err(InventoryError::validation("software_name", "must not be empty").into());
    }
    Ok(())
}
