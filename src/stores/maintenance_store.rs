use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::errors::internal::InventoryError;
use crate::types::db::maintenance;
use crate::types::internal::inventory::MaintenanceFields;
use crate::types::internal::query::{MaintenanceFilter, non_blank};

/// Repository for the `maintenance` table
pub struct MaintenanceStore {
    db: DatabaseConnection,
}

impl MaintenanceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List maintenance records, optionally narrowed by an inventory-number
    /// substring, ordered by date
    pub async fn list(&self, filter: &MaintenanceFilter) -> Result<Vec<maintenance::Model>, InternalError> {
        let mut query = maintenance::Entity::find();

        if let Some(inventory) = non_blank(filter.inventory.as_deref()) {
            query = query.filter(maintenance::Column::InventoryNumber.contains(inventory));
        }

        let order = filter.sort.as_sea_order();

        query
            .order_by(maintenance::Column::Date, order.clone())
            .order_by(maintenance::Column::Id, order)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_maintenance", e))
    }

    pub async fn get(&self, id: i32) -> Result<Option<maintenance::Model>, InternalError> {
        maintenance::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_maintenance", e))
    }

    pub async fn add(&self, fields: MaintenanceFields) -> Result<maintenance::Model, InternalError> {
        validate(&fields)?;

        let model = maintenance::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            inventory_number: Set(fields.inventory_number),
            date: Set(fields.date),
            maintenance_type: Set(fields.maintenance_type),
            performed: Set(fields.performed),
            performed_by: Set(fields.performed_by),
            comments: Set(fields.comments),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("add_maintenance", e))?;

        tracing::debug!("Added maintenance {} for {}", model.id, model.inventory_number);

        Ok(model)
    }

    pub async fn update(&self, id: i32, fields: MaintenanceFields) -> Result<maintenance::Model, InternalError> {
        validate(&fields)?;

        let changes = maintenance::ActiveModel {
            inventory_number: Set(fields.inventory_number),
            date: Set(fields.date),
            maintenance_type: Set(fields.maintenance_type),
            performed: Set(fields.performed),
            performed_by: Set(fields.performed_by),
            comments: Set(fields.comments),
            ..Default::default()
        };

        let result = maintenance::Entity::update_many()
            .set(changes)
            .filter(maintenance::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_maintenance", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Maintenance", id).into());
        }

        self.get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found("Maintenance", id).into())
    }

    /// Delete a maintenance record; `Ok(false)` when the id does not exist
    pub async fn delete(&self, id: i32) -> Result<bool, InternalError> {
        let result = maintenance::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_maintenance", e))?;

        Ok(result.rows_affected > 0)
    }
}

fn validate(fields: &MaintenanceFields) -> Result<(), InternalError> {
    if fields.inventory_number.trim().is_empty() {
        return Err(InventoryError::validation("inventory_number", "must not be empty").into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_db;
    use crate::types::internal::query::SortOrder;
    use chrono::NaiveDate;
    use sea_orm::PaginatorTrait;

    fn record(inventory: &str, date: (i32, u32, u32)) -> MaintenanceFields {
        MaintenanceFields {
            inventory_number: inventory.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
            maintenance_type: "cleaning".to_string(),
            performed: "Dust removal, thermal paste".to_string(),
            performed_by: "Technician".to_string(),
            comments: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_inventory_and_orders_by_date() {
        let db = setup_test_db().await;
        let store = MaintenanceStore::new(db);
        store.add(record("INV-1", (2024, 2, 1))).await.expect("add failed");
        store.add(record("INV-2", (2024, 1, 1))).await.expect("add failed");
        store.add(record("INV-1", (2023, 6, 15))).await.expect("add failed");

        let asc = store
            .list(&MaintenanceFilter { inventory: Some("INV-1".to_string()), sort: SortOrder::Asc })
            .await
            .expect("list failed");
        let desc = store.list(&MaintenanceFilter::default()).await.expect("list failed");

        assert_eq!(asc.len(), 2);
        assert_eq!(asc[0].date.to_string(), "2023-06-15");
        assert_eq!(asc[1].date.to_string(), "2024-02-01");
        assert_eq!(desc.len(), 3);
        assert_eq!(desc[0].date.to_string(), "2024-02-01");
        assert_eq!(desc[2].date.to_string(), "2023-06-15");
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_rows() {
        let db = setup_test_db().await;
        let store = MaintenanceStore::new(db.clone());
        store.add(record("INV-1", (2024, 2, 1))).await.expect("add failed");

        assert!(!store.delete(404).await.expect("delete should not fail"));
        assert_eq!(maintenance::Entity::find().count(&db).await.expect("count failed"), 1);
    }

    #[tokio::test]
    async fn test_update_changes_fields() {
        let db = setup_test_db().await;
        let store = MaintenanceStore::new(db);
        let added = store.add(record("INV-1", (2024, 2, 1))).await.expect("add failed");

        let mut changed = record("INV-1", (2024, 2, 2));
        changed.maintenance_type = "repair".to_string();
        let updated = store.update(added.id, changed).await.expect("update failed");

        assert_eq!(updated.maintenance_type, "repair");
        assert_eq!(updated.date.to_string(), "2024-02-02");
    }
}
