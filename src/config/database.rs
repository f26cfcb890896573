use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::Settings;
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Connect to the configured database
///
/// Does NOT run migrations - call [`migrate`] separately.
pub async fn connect(settings: &Settings) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(&settings.database_url)
        .await
        .map_err(|source| DatabaseError::Connect {
            url: settings.database_url.clone(),
            source,
        })?;

    tracing::debug!("Connected to database: {}", settings.database_url);

    Ok(db)
}

/// Run all pending migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Database migrations completed");

    Ok(())
}

/// Connect and bring the schema up to date
pub async fn init_database(settings: &Settings) -> Result<DatabaseConnection, InternalError> {
    let db = connect(settings).await?;
    migrate(&db).await?;
    Ok(db)
}
