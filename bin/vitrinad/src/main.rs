//! `vitrinad` — the content backend server binary.
//!
//! Usage:
//!   vitrinad -c <context-name-or-path> [--listen <addr>]
//!
//! The context name resolves to `/etc/vitrina/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use vitrina_core::Module;

use config::ServerConfig;

/// Vitrina content server.
#[derive(Parser, Debug)]
#[command(name = "vitrinad", about = "Vitrina content server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config", required = true)]
    config: String,

    /// Listen address (overrides default 0.0.0.0:8080).
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let config_path = ServerConfig::resolve_path(&cli.config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;
    server_config.validate()?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = vitrina_core::ServiceConfig {
        data_dir: Some(data_dir.clone()),
        listen: cli.listen.clone(),
        site_base_url: server_config.site.base_url.clone(),
        ..Default::default()
    };

    let sql: Arc<dyn vitrina_sql::SQLStore> = Arc::new(
        vitrina_sql::SqliteStore::open(&core_config.resolve_sqlite_path())
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // Initialize modules.
    let content_module = vitrina_content::ContentModule::new(
        Arc::clone(&sql),
        server_config.fallback_table(),
        core_config,
    )?;
    info!(
        fallback_literals = server_config.fallbacks.len(),
        "Content module initialized"
    );

    let module_routes = vec![(content_module.name(), content_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Vitrina server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
