#![forbid(unsafe_code)]

use std::env;

use payment_analyzer::api::{AppState, create_router};
use payment_analyzer::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("PAYMENT_ANALYZER_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_dir =
        env::var("PAYMENT_ANALYZER_CONFIG").unwrap_or_else(|_| "./config/default".to_string());
    let bind_addr = env::var("PAYMENT_ANALYZER_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let loader = ConfigLoader::load(&config_dir).map_err(|e| {
        error!(config_dir = %config_dir, error = %e, "failed to load configuration");
        e.to_string()
    })?;
    info!(
        config_dir = %config_dir,
        name = %loader.metadata().name,
        rule_sets = loader.rule_sets().len(),
        "configuration loaded"
    );

    let app = create_router(AppState::new(loader));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!(bind_addr = %bind_addr, "payment analyzer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
