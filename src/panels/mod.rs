pub mod editor_panel;
pub mod setup_panel;

pub use editor_panel::editor_panel;
pub use setup_panel::setup_panel;
