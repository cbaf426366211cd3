pub mod tui;

pub use tui::with_spinner;
