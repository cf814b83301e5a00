//! visits gateway binary.
//!
//! Startup order: identity, config, store ping (fatal on failure), bind,
//! serve until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use visits_core::error::{Result, VisitsError};
use visits_gateway::{app_state::AppState, config, identity, router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "fatal");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let pod = identity::resolve_identity();
    let cfg = config::load_from_env();

    tracing::info!(
        pod = %pod,
        redis_addr = %cfg.redis_addr,
        app_port = %cfg.app_port,
        "visits-gateway starting"
    );

    let state = AppState::connect(&cfg, pod).await.map_err(|e| match e {
        VisitsError::Timeout => VisitsError::Store("failed to ping redis: deadline exceeded".into()),
        VisitsError::Store(msg) => VisitsError::Store(format!("failed to ping redis: {msg}")),
        other => other,
    })?;

    let listen: SocketAddr = cfg
        .listen_addr()
        .parse()
        .map_err(|e| VisitsError::Config(format!("APP_PORT must form a valid listen address: {e}")))?;

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(listen).await?;

    tracing::info!(%listen, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
