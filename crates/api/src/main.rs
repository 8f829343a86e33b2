use anyhow::Context;

use eventgate_api::config::ApiConfig;
use eventgate_observability::LogSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env();
    eventgate_observability::init_with(&LogSettings {
        format: config.log_format,
        ..LogSettings::default()
    });
    for fallback in config.fallbacks() {
        tracing::warn!("{fallback}");
    }

    let app = eventgate_api::app::build_app(&config).context("failed to build dashboard")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
