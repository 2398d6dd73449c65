mod app;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Holonet - users, planets, characters and their favorites over HTTP
#[derive(Parser, Debug)]
#[command(name = "holonet")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Database schema maintenance
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Apply all pending migrations
    Upgrade,
    /// Revert migrations down to the given version (0 drops every table)
    Downgrade {
        #[arg(long)]
        to: u32,
    },
    /// Print the schema version recorded in the database
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holonet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if let Some(Command::Db(command)) = cli.command {
        return run_db_command(&config, command).await;
    }

    let state = AppState::new(&config).await?;

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "sqlite")]
async fn run_db_command(config: &Config, command: DbCommand) -> Result<()> {
    use crate::config::DatabaseLocation;
    use crate::storage::SqliteRepository;

    let DatabaseLocation::File(path) = &config.database else {
        anyhow::bail!("schema commands need a database file, not an in-memory database");
    };

    let repo = SqliteRepository::connect(path).await?;

    match command {
        DbCommand::Upgrade => {
            let version = repo.migrate().await?;
            tracing::info!(version, path = %path.display(), "Schema is up to date");
        }
        DbCommand::Downgrade { to } => {
            repo.revert_to(to).await?;
            tracing::info!(version = to, path = %path.display(), "Schema reverted");
        }
        DbCommand::Version => {
            println!("{}", repo.schema_version().await?);
        }
    }

    Ok(())
}

#[cfg(feature = "inmemory")]
async fn run_db_command(_config: &Config, command: DbCommand) -> Result<()> {
    anyhow::bail!("`db {command:?}` is only available with the sqlite storage backend")
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
