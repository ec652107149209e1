// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod views;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{normalize_collection, ApiClient};
pub use config::{load_config, resolve_base_url, save_config, Config};
pub use error::{OctofitError, OctofitResult};
pub use models::*;
pub use views::{Route, ViewKind, ViewState};
