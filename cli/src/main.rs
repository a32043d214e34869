//! CLI entrypoint for dual-ai
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP endpoint.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dual_ai_application::{BackgroundTasks, RunDualPromptUseCase};
use dual_ai_domain::ConfigIssue;
use dual_ai_infrastructure::{
    ConfigLoader, FileConfig, build_audit_log, build_client, build_providers,
};
use dual_ai_presentation::{AppState, Cli, build_router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let _log_guard = logging::init(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting dual-ai {}", env!("CARGO_PKG_VERSION"));

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    report_issues(&config.validate())?;

    // === Dependency Injection ===
    let env = |name: &str| std::env::var(name).ok();
    let client = build_client(Duration::from_secs(config.providers.connect_timeout_secs))
        .context("Failed to build HTTP client")?;

    let providers = build_providers(&config.providers, client.clone(), &env);
    let (audit_target, _) = config.audit.resolve_target_with(&env);
    let audit = build_audit_log(
        &audit_target,
        client,
        Duration::from_secs(config.audit.timeout_secs),
    );

    let tasks = BackgroundTasks::new();
    let use_case = RunDualPromptUseCase::new(providers, audit, tasks.clone())
        .with_provider_timeout(Duration::from_secs(config.providers.request_timeout_secs));

    if !use_case.is_configured() {
        warn!("Serving without complete provider credentials; prompt requests will answer 500");
    }

    let app = build_router(AppState::new(
        Arc::new(use_case),
        config.server.max_body_bytes,
    ));

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    info!(
        "Shutting down; waiting for {} audit write(s)",
        tasks.in_flight()
    );
    tasks
        .drain(Duration::from_secs(config.server.shutdown_grace_secs))
        .await;

    Ok(())
}

/// Log every configuration issue; abort if any is an error.
fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    let mut errors = 0;
    for issue in issues {
        if issue.is_error() {
            errors += 1;
            error!("Config: {}", issue.message);
        } else {
            warn!("Config: {}", issue.message);
        }
    }
    if errors > 0 {
        bail!("Invalid configuration ({} error(s))", errors);
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
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
                error!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received");
}
