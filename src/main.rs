use std::path::PathBuf;
use std::process::ExitCode;

use attendance_engine::api::{create_router, AppState};
use attendance_engine::config::{ConfigLoader, EngineConfig};
use attendance_engine::engine::AttendanceEngine;
use attendance_engine::notify::TimesheetNotifier;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Time & Attendance Engine HTTP server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => ConfigLoader::load(path).map(ConfigLoader::into_config),
        None => Ok(EngineConfig::default()),
    };
    let level = loaded
        .as_ref()
        .map(|config| tracing::Level::from(config.log.level))
        .unwrap_or(tracing::Level::INFO);

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_thread_names(true),
        )
        .with(filter)
        .init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server terminated");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: EngineConfig) -> std::io::Result<()> {
    let engine = AttendanceEngine::in_memory(&config);
    info!(
        members = config.directory.members.len(),
        weekly_threshold_hours = %config.overtime.weekly_threshold_hours,
        overtime_multiplier = %config.overtime.multiplier,
        "Engine ready"
    );

    tokio::spawn(log_timesheet_events(engine.notifier().clone()));

    let router = create_router(AppState::new(engine));
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Logs every timesheet transition; stands in for a delivery channel.
async fn log_timesheet_events(notifier: TimesheetNotifier) {
    let mut events = notifier.subscribe();
    loop {
        match events.recv().await {
            Ok(event) => info!(
                event = event.kind.as_str(),
                timesheet_id = %event.timesheet.id,
                employee_id = %event.timesheet.employee_id,
                status = %event.timesheet.status,
                "Timesheet event"
            ),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Timesheet event subscriber lagged")
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
