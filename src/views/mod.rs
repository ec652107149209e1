//! The generic data-list view: one lifecycle, five configurations.

pub mod lifecycle;
pub mod resource;
pub mod route;
pub mod state;
pub mod table;

pub use lifecycle::{load_collection, load_view, settle_collection};
pub use resource::{difficulty_tone, Resource};
pub use route::{Route, ViewKind, ViewSpec};
pub use state::ViewState;
pub use table::{Card, CellStyle, CellValue, Column, TableModel, TableRow, Tone};
