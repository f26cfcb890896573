use crate::config::{Settings, database};
use crate::errors::InternalError;

/// Run database migrations without initializing the full AppData
pub async fn run_migrations(settings: &Settings) -> Result<(), InternalError> {
    tracing::info!("Running database migrations...");

    let db = database::connect(settings).await?;
    database::migrate(&db).await?;

    tracing::info!("All migrations completed successfully");
    println!("✅ Migrations applied to {}", settings.database_url);

    Ok(())
}
