//! # launchpadd: launcher portal daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing`
//! - Probe the gated target once and render the launcher page
//! - Build the axum router with the rendered page and the user table
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use launchpad_adapter_http_axum::router;
use launchpad_adapter_http_axum::state::AppState;
use launchpad_adapter_probe_reqwest::HttpProbe;
use launchpad_app::services::launcher_service::LauncherService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let registry = config.registry()?;
    let timeout = config.probe.timeout()?;
    let bind_addr = config.bind_addr();
    let Config {
        auth,
        probe,
        assets,
        theme,
        ..
    } = config;

    tracing::info!(
        targets = registry.len(),
        users = auth.users.len(),
        gated = registry.gated().map(|t| t.key.as_str()),
        "configuration loaded"
    );

    // Startup probe, awaited before the listener opens
    let http_probe = HttpProbe::new(&probe)?;
    let service = LauncherService::new(http_probe, registry, timeout);
    let page = service.build_page(theme).await;

    // HTTP
    let state = AppState::new(&page, auth.users, auth.realm)?;
    let app = router::build(state, &assets.dir);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        enabled = page.enabled_count(),
        cards = page.cards.len(),
        "launchpadd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("launchpadd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
