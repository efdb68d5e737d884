//! Checkout Orders - HTTP entry point
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────────┐    ┌──────────┐
//! │ Checkout │───▶│  Router   │───▶│ OrderService │───▶│ Payment  │
//! │    UI    │    │(POST only)│    │ (cfg/parse)  │    │ Gateway  │
//! └──────────┘    └───────────┘    └──────────────┘    └──────────┘
//! ```
//!
//! Usage: `checkout_orders [--env dev|prod] [--port 8080]`

use std::sync::Arc;

use anyhow::{Context, bail};

use checkout_orders::config::{AppConfig, KEY_ID_ENV, KEY_SECRET_ENV};
use checkout_orders::gateway::{run_server, services::OrderService, state::AppState};
use checkout_orders::logging::init_logging;
use checkout_orders::payment::build_gateway;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env).context("Failed to load configuration")?;
    let _log_guard = init_logging(&app_config);

    tracing::info!("Starting checkout order service in {} mode", env);

    // Fail fast: never accept traffic without usable credentials
    let credentials = app_config.credentials();
    let missing = credentials.missing_fields();
    if !missing.is_empty() {
        tracing::error!(
            "Payment gateway credentials missing: {} (set {} / {})",
            missing.join(", "),
            KEY_ID_ENV,
            KEY_SECRET_ENV
        );
        bail!(
            "payment gateway credentials missing: {}",
            missing.join(", ")
        );
    }

    let gateway_config = &app_config.payment_gateway;
    let gateway = build_gateway(gateway_config).context("Failed to build payment gateway")?;
    tracing::info!(
        "Payment gateway: {} (key_id={})",
        gateway.name(),
        credentials.key_id()
    );

    let order_service = OrderService::new(gateway, credentials);
    let state = Arc::new(AppState::new(
        order_service,
        gateway_config.expose_gateway_errors,
    ));

    let port = get_port_override().unwrap_or(app_config.server.port);
    run_server(&app_config.server.host, port, state)
        .await
        .context("Server error")?;

    Ok(())
}
