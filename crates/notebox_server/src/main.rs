//! Server binary entry point.
//!
//! # Responsibility
//! - Resolve configuration, initialize logging, open storage, and serve the
//!   HTTP router until the process exits.
//!
//! # Invariants
//! - Startup failures print to stderr and exit non-zero; nothing is served
//!   on a partially initialized stack.

use log::info;
use notebox_core::db::{open_db, DbError};
use notebox_core::{core_version, init_logging};
use notebox_server::{router, AppState, ConfigError, ServerConfig};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Debug)]
enum ServerError {
    Config(ConfigError),
    Logging(String),
    Db(DbError),
    Io(std::io::Error),
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Db(err) => write!(f, "database setup failed: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ServerError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for ServerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("notebox-server: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let log_dir = config
        .log_dir
        .to_str()
        .ok_or_else(|| ServerError::Logging("log directory is not valid UTF-8".to_string()))?;
    init_logging(&config.log_level, log_dir).map_err(ServerError::Logging)?;

    let conn = open_db(&config.db_path)?;
    let state = AppState::new(conn);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(
        "event=server_start module=http status=ok addr={addr} core_version={} db={}",
        core_version(),
        config.db_path.display()
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
