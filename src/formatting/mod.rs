pub mod home;
pub mod render;
pub mod theme;
pub mod utils;

pub use home::{render_home, render_routes};
pub use render::{render_cards, render_json, render_table, render_view};
pub use theme::{theme_color, ThemedColorize};
pub use utils::{display_width, pad_to_width, truncate};
