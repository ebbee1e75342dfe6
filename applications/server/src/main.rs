/// Playlist Generator Server - playlist, category and recommendation API
use clap::{Parser, Subcommand};
use playgen_server::{build_router, config::ServerConfig, default_state};
use playgen_storage::PlaylistStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "playgen-server")]
#[command(about = "Playlist Generator HTTP API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "PLAYGEN_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    ShowConfig {
        /// Configuration file path
        #[arg(short, long, env = "PLAYGEN_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playgen_server=info,playgen_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ShowConfig { config } => {
            let config = ServerConfig::load_from(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting {}", config.api.project_name);
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("API prefix: {}", config.api.prefix);

    let store = Arc::new(PlaylistStore::seeded());
    tracing::info!("Playlist store seeded with sample data");

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    // Build router
    let app = build_router(default_state(store, config))?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
