use std::env;
use std::sync::Arc;

use cloudshop::app;
use cloudshop::error::StartupError;
use cloudshop::models::{AppState, Config};
use cloudshop::utils::constant::LISTEN_ADDR;
use cloudshop::utils::telemetry::{LogFormat, init_tracing};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env_value(
        env::var("LOG_FORMAT").ok().as_deref(),
    ));

    let config = Config::from_env();
    let state = Arc::new(AppState::from_config(config));
    let app = app(state);

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    info!("Server starting at http://{}", LISTEN_ADDR);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
