//! The fixed color scheme shared by the live canvas and the exporter.

use egui::Color32;

use crate::grid::{CellState, SlotState};

pub const WINDOW_BACKGROUND: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
/// Margin around the bordered grid, and the fill of open cells.
pub const MARGIN: Color32 = Color32::WHITE;
pub const OPEN_FILL: Color32 = Color32::WHITE;
pub const BLOCKED_FILL: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
pub const OUTLINE: Color32 = Color32::BLACK;
pub const BORDER_FILL: Color32 = Color32::BLACK;
pub const PLAYER_FILL: Color32 = Color32::from_rgb(0x1e, 0x90, 0xff);
pub const DRONE_FILL: Color32 = Color32::from_rgb(0xff, 0x40, 0x40);
pub const STATUS_TEXT: Color32 = Color32::from_rgb(0x00, 0x00, 0xcd);

/// Legend shown under the canvas describing the five visual states.
pub const LEGEND: &str = "Black blocks - hard-coded boundaries.\n\
    Blue block - player entering location.\n\
    Red block - drone entering location (or drone base).\n\
    Grey blocks - walls or obstacles the drone cannot pass.\n\
    White blocks - pathways and open areas for both player and drone.";

pub fn cell_fill(state: CellState) -> Color32 {
    match state {
        CellState::Open => OPEN_FILL,
        CellState::Blocked => BLOCKED_FILL,
    }
}

pub fn slot_fill(state: SlotState) -> Color32 {
    match state {
        SlotState::Plain => BORDER_FILL,
        SlotState::PlayerMarker => PLAYER_FILL,
        SlotState::DroneMarker => DRONE_FILL,
    }
}

/// The same color as flat RGB bytes, for the raster exporter.
pub fn as_rgb(color: Color32) -> [u8; 3] {
    [color.r(), color.g(), color.b()]
}
