use jobfit::{app, config::Config, telemetry::init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    let router = app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on http://{}", config.listen_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
