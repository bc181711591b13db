#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod dimensions;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod palette;
pub mod panels;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod util;

pub use app::MapApp;
pub use error::{ExportError, GridError, PlacementError};
pub use grid::{BorderSlot, CellState, GridElement, GridModel, MarkerKind, SlotState};
pub use session::{SelectionState, Session};
pub use snapshot::SnapshotExporter;
