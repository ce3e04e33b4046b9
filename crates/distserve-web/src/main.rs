mod app;
mod config;
mod error;
mod middleware;
mod state;
mod static_files;

use anyhow::Context;
use distserve_core::StaticResolver;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "distserve_web=debug,distserve_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;

    // Fail at startup rather than on the first request if the bundle is unusable.
    let resolver = StaticResolver::new(&config.dist_dir).with_context(|| {
        format!(
            "cannot serve frontend bundle from {}",
            config.dist_dir.display()
        )
    })?;
    tracing::info!("Serving frontend bundle from {}", resolver.base_dir().display());

    let app = app::build_app(AppState::new(resolver, config.not_found_status));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("distserve-web listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
