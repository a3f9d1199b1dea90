//! HTTP surface for notebox.
//! Maps six REST endpoints onto `notebox_core` note use-cases.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::{router, AppState};
