pub mod base_url;
pub mod config;

pub use base_url::{base_url_for_context, codespace_name, first_codespace_name, resolve_base_url, resolve_base_url_with};
pub use config::{Config, config_path, load_config, load_config_from, save_config, save_config_to};
