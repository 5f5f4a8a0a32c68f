use std::process::ExitCode;
use std::sync::Arc;

use backoffice_auth::app_state::AppState;
use backoffice_auth::services::{AuthService, SqlUserStore};
use backoffice_auth::utils::telemetry::init_tracing;
use backoffice_auth::utils::Config;
use backoffice_auth::{get_db_client, migrations, Application};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "auth service stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(Config::from_env()?);

    let db_client = get_db_client(config.database_url()).await?;
    migrations::up(&db_client).await?;

    let user_store = SqlUserStore::new(db_client);
    let app_state = AppState::new(Arc::new(RwLock::new(user_store)), config.clone());

    if let Some((username, password)) = config.bootstrap_admin() {
        AuthService::ensure_admin(&app_state, username, password).await?;
    }

    let app = Application::build(app_state, config.bind_address()).await?;
    app.run().await?;
    Ok(())
}
