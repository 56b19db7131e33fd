use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rulecheck_api::config::{LogFormat, ServerConfig};
use rulecheck_api::router::build_app_router;
use rulecheck_api::state::AppState;
use rulecheck_db::DbPool;
use rulecheck_events::{EventBus, PgRunLogSink, RunLogPersistence};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // --- Run history (optional) ---
    let pool = match &config.database_url {
        Some(url) => connect_run_log(url).await,
        None => {
            tracing::warn!("DATABASE_URL not set, rule run history will not be persisted");
            None
        }
    };

    // Spawn run log persistence (writes every run record to the database).
    let persistence_handle = pool.clone().map(|pool| {
        let sink = Arc::new(PgRunLogSink::new(pool));
        tokio::spawn(RunLogPersistence::run(sink, event_bus.subscribe()))
    });

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
        pool,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let ip: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Dropping the last bus handle closes the channel, which tells the
    // persistence task to finish.
    drop(event_bus);
    if let Some(handle) = persistence_handle {
        let drain = Duration::from_secs(config.shutdown_timeout_secs);
        match tokio::time::timeout(drain, handle).await {
            Ok(Ok(stored)) => tracing::info!(stored, "Run log persistence stopped"),
            Ok(Err(e)) => tracing::error!(error = %e, "Run log persistence task failed"),
            Err(_) => tracing::warn!("Run log persistence did not drain before timeout"),
        }
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "rulecheck_api=debug,rulecheck_events=info,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Connect to the run-history database and apply migrations.
///
/// Run history is best-effort: if the database cannot be reached the
/// server still starts, with history disabled.
async fn connect_run_log(database_url: &str) -> Option<DbPool> {
    let pool = match rulecheck_db::create_pool(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to run log database, history disabled");
            return None;
        }
    };
    tracing::info!("Database connection pool created");

    if let Err(e) = rulecheck_db::run_migrations(&pool).await {
        tracing::error!(error = %e, "Failed to run database migrations, history disabled");
        return None;
    }
    tracing::info!("Database migrations applied");

    Some(pool)
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
