use std::error::Error;

use tokio::net::TcpListener;
use tracing::{error, info};

use server::bootstrap::router::create_router;
use server::bootstrap::shutdown::wait_for_shutdown;
use server::bootstrap::state::AppState;
use server::config_loader;
use server::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;

    observability::tracing::setup_logging(&config)?;

    info!(
        environment = %config.environment.env,
        database = %config.db.redacted_url(),
        redis = %config.redis.redis_url,
        "Starting wallet service"
    );

    let state = AppState::new(config.clone()).await?;
    let app = create_router(state);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "Wallet service listening");

    observability::startup_info::print_api_info(&config);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .inspect_err(|e| error!(error = %e, "Wallet service stopped with an error"))?;

    info!("Wallet service stopped");
    Ok(())
}
