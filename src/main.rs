use std::sync::Arc;

use clap::Parser;
use poem::{Server, listener::TcpListener};

use workplace_inventory::app_data::AppData;
use workplace_inventory::cli::{self, Cli, Commands};
use workplace_inventory::config::{
    ApplicationError, SecretManager, Settings, SystemEnvironment, init_logging,
};

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&SystemEnvironment)?;

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    tracing::debug!("Loaded {:?}", settings);

    match cli.command() {
        Commands::Migrate => {
            cli::migrate::run_migrations(&settings).await?;
        }
        Commands::CreateAdmin { username, full_name } => {
            let secrets = SecretManager::from_env()?;
            let app_data = AppData::init(&settings, &secrets).await?;
            cli::admin::create_admin(&app_data, &username, &full_name).await?;
        }
        Commands::Serve => serve(settings).await?,
    }

    Ok(())
}

async fn serve(settings: Settings) -> Result<(), ApplicationError> {
    let secrets = SecretManager::from_env()?;
    let app_data = Arc::new(AppData::init(&settings, &secrets).await?);

    let address = settings.server_address();
    let public_url = format!("http://localhost:{}", settings.server_port);
    let app = workplace_inventory::api::build_routes(app_data, &format!("{}/api", public_url));

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", public_url);
    tracing::info!("Audit log: {}", settings.audit_log_file.display());

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
