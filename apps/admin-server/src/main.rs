mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use http::{Method, header};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi as _;

use user_admin::api::rest::routes::{ApiDoc, register_routes};
use user_admin::config::UserAdminConfig;
use user_admin::domain::gate::{AccessGate, AllowedOrigins};
use user_admin::domain::service::UserAdminService;
use user_admin::infra::{InMemoryIdentityProvider, InMemoryProfileRepository};

use crate::config::AppConfig;

/// CrewDesk Server - user administration service
#[derive(Parser)]
#[command(name = "admin-server")]
#[command(about = "CrewDesk user administration server")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for the HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config: defaults -> YAML (if provided) -> env (ADMIN__*)
    // -> CLI overrides.
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.bind_addr.set_port(port);
    }

    init_logging(cli.verbose);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_json_pretty()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn check_config(config: &AppConfig) -> Result<()> {
    println!("Configuration is valid");
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!(
        region = %config.user_admin.identity_region,
        trusted_origins = config.user_admin.allowed_origins.len(),
        "CrewDesk admin server starting"
    );

    let router = build_router(&config.user_admin);

    let listener = TcpListener::bind(config.server.bind_addr).await?;
    tracing::info!(addr = %config.server.bind_addr, "HTTP listener bound");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

fn build_router(cfg: &UserAdminConfig) -> axum::Router {
    // Volatile development backing stores; a deployment substitutes real
    // identity-provider and document-store adapters behind the same
    // ports.
    tracing::warn!("using in-memory identity and profile stores; state is volatile");

    let identity = Arc::new(InMemoryIdentityProvider::new());
    let profiles = Arc::new(InMemoryProfileRepository::new());
    let gate = AccessGate::new(AllowedOrigins::new(&cfg.allowed_origins));
    let service = Arc::new(UserAdminService::new(gate, identity, profiles));

    let router = register_routes(axum::Router::new(), service).route(
        "/api-docs/openapi.json",
        axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
    );

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&cfg.allowed_origins))
}

/// Browser-facing CORS policy, restricted to the same trusted origins
/// the access gate honors.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("failed to install ctrl-c handler");
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
                tracing::error!(error = ?e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("ctrl-c received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
