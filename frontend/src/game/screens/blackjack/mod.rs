pub mod screen;
pub mod table_rendering;
pub mod ui_components;

pub use screen::BlackjackTableScreen;
