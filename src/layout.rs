//! Pixel geometry of the bordered grid.
//!
//! Every cell and border slot is a fixed-size square; the interior
//! origin sits one border cell plus the margin padding in from the
//! canvas corner. The same arithmetic drives the live canvas, the
//! pointer hit-testing, and the raster exporter, so all three agree
//! pixel for pixel.

use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Edge length of every square, in pixels.
pub const CELL_SIZE: i32 = 20;
/// Extra margin around the border ring, in pixels.
pub const PADDING: i32 = 10;
/// Border ring thickness, in cells.
pub const BORDER_THICKNESS_CELLS: i32 = 1;
/// Pixel offset of interior cell (0, 0) from the canvas corner.
pub const GRID_ORIGIN: i32 = PADDING + BORDER_THICKNESS_CELLS * CELL_SIZE;
/// Outline width of every square, in pixels.
pub const OUTLINE_WIDTH: i32 = 1;

/// Full canvas size for a bordered grid, in pixels.
pub fn canvas_size(cols: i32, rows: i32) -> (u32, u32) {
    let width = cols * CELL_SIZE + 2 * GRID_ORIGIN;
    let height = rows * CELL_SIZE + 2 * GRID_ORIGIN;
    (width as u32, height as u32)
}

/// Same as [`canvas_size`], as an egui vector.
pub fn canvas_size_vec(cols: i32, rows: i32) -> Vec2 {
    let (w, h) = canvas_size(cols, rows);
    vec2(w as f32, h as f32)
}

/// Pixel top-left corner of a cell or border slot. Border coordinates
/// (-1 and the extents) land inside the padding band as intended.
pub fn element_origin(col: i32, row: i32) -> (i32, i32) {
    (GRID_ORIGIN + col * CELL_SIZE, GRID_ORIGIN + row * CELL_SIZE)
}

/// Canvas-local rectangle of a cell or border slot.
pub fn element_rect(col: i32, row: i32) -> Rect {
    let (x, y) = element_origin(col, row);
    Rect::from_min_size(
        pos2(x as f32, y as f32),
        vec2(CELL_SIZE as f32, CELL_SIZE as f32),
    )
}

/// Grid coordinate under a canvas-local pixel position.
///
/// Floor division, so positions left/above the interior map onto the
/// negative border coordinates. The caller resolves the coordinate to
/// an element (or nothing) through the grid model.
pub fn grid_coord_at(pos: Pos2) -> (i32, i32) {
    let col = (pos.x.floor() as i32 - GRID_ORIGIN).div_euclid(CELL_SIZE);
    let row = (pos.y.floor() as i32 - GRID_ORIGIN).div_euclid(CELL_SIZE);
    (col, row)
}
