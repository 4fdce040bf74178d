use tracing_subscriber::EnvFilter;

use aims_server::config::ServerConfig;
use aims_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        store = ?config.store,
        ml_base_url = %config.ml_base_url,
        "starting survey backend"
    );

    let state = AppState::from_config(&config).await;
    let app = aims_server::build_router(state);

    if config.on_lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
