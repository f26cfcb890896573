use sea_orm::sea_query::Condition;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::InventoryError;
use crate::types::db::{maintenance, software, workplace};
use crate::types::internal::inventory::WorkplaceFields;

/// A workplace together with the software and maintenance records that
/// reference its inventory number
#[derive(Debug, Clone)]
pub struct WorkplaceHistory {
    pub workplace: workplace::Model,
    pub software: Vec<software::Model>,
    pub maintenance: Vec<maintenance::Model>,
}

/// Repository for the `workplaces` table
pub struct WorkplaceStore {
    db: DatabaseConnection,
}

impl WorkplaceStore {
    /// Create a new WorkplaceStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all workplaces in insertion order
    pub async fn list(&self) -> Result<Vec<workplace::Model>, InternalError> {
        workplace::Entity::find()
            .order_by_asc(workplace::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_workplaces", e))
    }

    /// Get a workplace by row id, `None` when it does not exist
    pub async fn get(&self, id: i32) -> Result<Option<workplace::Model>, InternalError> {
        workplace::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_workplace", e))
    }

    /// All inventory numbers, for pickers on the software and maintenance forms
    pub async fn inventory_numbers(&self) -> Result<Vec<String>, InternalError> {
        workplace::Entity::find()
            .select_only()
            .column(workplace::Column::InventoryNumber)
            .order_by_asc(workplace::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_inventory_numbers", e))
    }

    /// Add a workplace under a freshly generated inventory number
    ///
    /// # Returns
    /// * `Ok(Model)` - The inserted row, including its id and inventory number
    /// * `Err(InternalError)` - DuplicateInventoryNumber on collision, or a database error
    pub async fn add(&self, fields: WorkplaceFields) -> Result<workplace::Model, InternalError> {
        let inventory_number = Uuid::new_v4().to_string();
        self.add_with_inventory_number(inventory_number, fields).await
    }

    /// Add a workplace under a caller-chosen inventory number
    ///
    /// The number is checked for existence before the insert. The UNIQUE
    /// constraint on the column still catches a concurrent insert that slips
    /// between the check and the write, and both paths report
    /// `DuplicateInventoryNumber`.
    pub async fn add_with_inventory_number(
        &self,
        inventory_number: String,
        fields: WorkplaceFields,
    ) -> Result<workplace::Model, InternalError> {
        if inventory_number.trim().is_empty() {
            return Err(InventoryError::validation("inventory_number", "must not be empty").into());
        }

        let existing = workplace::Entity::find()
            .filter(workplace::Column::InventoryNumber.eq(&inventory_number))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("check_inventory_number", e))?;

        if existing.is_some() {
            return Err(InventoryError::DuplicateInventoryNumber(inventory_number).into());
        }

        let new_workplace = workplace::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            inventory_number: Set(inventory_number.clone()),
            ip_address: Set(fields.ip_address),
            mac_address: Set(fields.mac_address),
            access_level: Set(fields.access_level),
            unit: Set(fields.unit),
            person: Set(fields.person),
            contacts: Set(fields.contacts),
            notes: Set(fields.notes),
            location: Set(fields.location),
        };

        let model = new_workplace.insert(&self.db).await.map_err(|e| {
            if InternalError::is_unique_violation(&e) {
                InventoryError::DuplicateInventoryNumber(inventory_number.clone()).into()
            } else {
                InternalError::database("add_workplace", e)
            }
        })?;

        tracing::debug!("Added workplace {} ({})", model.id, model.inventory_number);

        Ok(model)
    }

    /// Update every editable field of a workplace
    ///
    /// The inventory number is left untouched.
    ///
    /// # Returns
    /// * `Ok(Model)` - The row as stored after the update
    /// * `Err(InternalError)` - NotFound when no row has this id
    pub async fn update(&self, id: i32, fields: WorkplaceFields) -> Result<workplace::Model, InternalError> {
        let changes = workplace::ActiveModel {
            ip_address: Set(fields.ip_address),
            mac_address: Set(fields.mac_address),
            access_level: Set(fields.access_level),
            unit: Set(fields.unit),
            person: Set(fields.person),
            contacts: Set(fields.contacts),
            notes: Set(fields.notes),
            location: Set(fields.location),
            ..Default::default()
        };

        let result = workplace::Entity::update_many()
            .set(changes)
            .filter(workplace::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_workplace", e))?;

        if result.rows_affected == 0 {
            return Err(InventoryError::not_found("Workplace", id).into());
        }

        self.get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found("Workplace", id).into())
    }

    /// Delete a workplace by row id
    ///
    /// Software and maintenance rows that reference the workplace are kept.
    ///
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No row had this id; nothing changed
    pub async fn delete(&self, id: i32) -> Result<bool, InternalError> {
        let result = workplace::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_workplace", e))?;

        tracing::debug!("Deleted workplace {}: {} rows", id, result.rows_affected);

        Ok(result.rows_affected > 0)
    }

    /// Substring search over inventory number, IP, MAC and person
    ///
    /// A row matches when any of the four columns contains the term.
    pub async fn search(&self, term: &str) -> Result<Vec<workplace::Model>, InternalError> {
        let term = term.trim();

        workplace::Entity::find()
            .filter(
                Condition::any()
                    .add(workplace::Column::InventoryNumber.contains(term))
                    .add(workplace::Column::IpAddress.contains(term))
                    .add(workplace::Column::MacAddress.contains(term))
                    .add(workplace::Column::Person.contains(term)),
            )
            .order_by_asc(workplace::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("search_workplaces", e))
    }

    /// Fetch a workplace and everything recorded against its inventory number
    pub async fn history(&self, id: i32) -> Result<Option<WorkplaceHistory>, InternalError> {
        let Some(workplace) = self.get(id).await? else {
            return Ok(None);
        };

        let software = workplace
            .find_related(software::Entity)
            .order_by_desc(software::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("workplace_software_history", e))?;

        let maintenance = workplace
            .find_related(maintenance::Entity)
            .order_by_desc(maintenance::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("workplace_maintenance_history", e))?;

        Ok(Some(WorkplaceHistory {
            workplace,
            software,
            maintenance,
        }))
    }
}

impl std::fmt::Debug for WorkplaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkplaceStore")
            .field("db", &"<connection>")
            .finish()
    }
}
