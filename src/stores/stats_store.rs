use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::errors::InternalError;
use crate::types::db::{maintenance, software, workplace};
use crate::types::internal::inventory::{Distribution, InventoryStats};

#[derive(Debug, FromQueryResult)]
struct GroupCount {
    label: String,
    count: i64,
}

impl From<GroupCount> for Distribution {
    fn from(g: GroupCount) -> Self {
        Self {
            label: g.label,
            count: g.count,
        }
    }
}

/// Read-only aggregate queries over the inventory tables
pub struct StatsStore {
    db: DatabaseConnection,
}

impl StatsStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dashboard statistics
    ///
    /// Totals per table, workplaces grouped by unit and software grouped by
    /// name. Rows with an empty grouping key are left out of the
    /// distributions; an empty table yields an empty distribution.
    pub async fn stats(&self) -> Result<InventoryStats, InternalError> {
        let total_workplaces = workplace::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_workplaces", e))?;

        let total_software = software::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_software", e))?;

        let total_maintenance = maintenance::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_maintenance", e))?;

        let units = workplace::Entity::find()
            .select_only()
            .column_as(workplace::Column::Unit, "label")
            .column_as(Expr::col(workplace::Column::Id).count(), "count")
            .filter(workplace::Column::Unit.ne(""))
            .group_by(workplace::Column::Unit)
            .order_by_asc(workplace::Column::Unit)
            .into_model::<GroupCount>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("unit_distribution", e))?;

        let software_names = software::Entity::find()
            .select_only()
            .column_as(software::Column::SoftwareName, "label")
            .column_as(Expr::col(software::Column::Id).count(), "count")
            .filter(software::Column::SoftwareName.ne(""))
            .group_by(software::Column::SoftwareName)
            .order_by_asc(software::Column::SoftwareName)
            .into_model::<GroupCount>()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("software_distribution", e))?;

        Ok(InventoryStats {
            total_workplaces,
            total_software,
            total_maintenance,
            units: units.into_iter().map(Distribution::from).collect(),
            software_names: software_names.into_iter().map(Distribution::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{SoftwareStore, WorkplaceStore};
    use crate::test::utils::setup_test_db;
    use crate::types::internal::inventory::{SoftwareFields, WorkplaceFields};
    use chrono::NaiveDate;

    fn in_unit(unit: &str) -> WorkplaceFields {
        WorkplaceFields {
            ip_address: "10.0.0.1".to_string(),
            mac_address: "AA:BB".to_string(),
            unit: unit.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_store_has_zero_totals_and_no_buckets() {
        let db = setup_test_db().await;

        let stats = StatsStore::new(db).stats().await.expect("stats failed");

        assert_eq!(stats.total_workplaces, 0);
        assert_eq!(stats.total_software, 0);
        assert_eq!(stats.total_maintenance, 0);
        assert!(stats.units.is_empty());
        assert!(stats.software_names.is_empty());
    }

    #[tokio::test]
    async fn test_unit_counts_sum_to_total() {
        let db = setup_test_db().await;
        let workplaces = WorkplaceStore::new(db.clone());
        for unit in ["A", "B", "A", "A", "B"] {
            workplaces.add(in_unit(unit)).await.expect("add failed");
        }

        let stats = StatsStore::new(db).stats().await.expect("stats failed");

        let sum: i64 = stats.units.iter().map(|d| d.count).sum();
        assert_eq!(stats.total_workplaces, 5);
        assert_eq!(sum, 5);
        assert_eq!(
            stats.units,
            vec![
                Distribution { label: "A".to_string(), count: 3 },
                Distribution { label: "B".to_string(), count: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn test_single_it_workplace_shows_in_distribution() {
        let db = setup_test_db().await;
        WorkplaceStore::new(db.clone()).add(in_unit("IT")).await.expect("add failed");

        let stats = StatsStore::new(db).stats().await.expect("stats failed");

        assert_eq!(stats.units, vec![Distribution { label: "IT".to_string(), count: 1 }]);
    }

    #[tokio::test]
    async fn test_software_grouped_by_name_and_blank_units_skipped() {
        let db = setup_test_db().await;
        WorkplaceStore::new(db.clone()).add(in_unit("")).await.expect("add failed");
        let software = SoftwareStore::new(db.clone());
        for name in ["Office", "Office", "Browser"] {
            software
                .add(SoftwareFields {
                    inventory_number: "INV-1".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
                    software_name: name.to_string(),
                    version: String::new(),
                    license_key: String::new(),
                    comments: String::new(),
                })
                .await
                .expect("add failed");
        }

        let stats = StatsStore::new(db).stats().await.expect("stats failed");

        assert_eq!(stats.total_workplaces, 1);
        assert!(stats.units.is_empty());
        assert_eq!(stats.total_software, 3);
        assert_eq!(
            stats.software_names,
            vec![
                Distribution { label: "Browser".to_string(), count: 1 },
                Distribution { label: "Office".to_string(), count: 2 },
            ]
        );
    }
}
