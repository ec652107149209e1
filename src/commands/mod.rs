pub mod config;
pub mod home;
pub mod list;

pub use config::handle_config;
pub use home::{handle_home, handle_routes};
pub use list::{handle_list, handle_view};
