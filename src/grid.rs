//! The grid model: an interior matrix of editable cells surrounded by
//! a fixed border ring of marker slots.
//!
//! Interior cells hold terrain state (Open/Blocked) and nothing else;
//! border slots hold at most one of the two entry markers. The two
//! worlds never mix: cells cannot carry markers and slots cannot be
//! painted.

use crate::dimensions::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{GridError, PlacementError};
use crate::rules;

/// Terrain state of an interior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Open,
    Blocked,
}

/// What a border slot currently carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Plain,
    PlayerMarker,
    DroneMarker,
}

/// The two entry markers a map must carry before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Player,
    Drone,
}

impl MarkerKind {
    pub fn other(self) -> Self {
        match self {
            MarkerKind::Player => MarkerKind::Drone,
            MarkerKind::Drone => MarkerKind::Player,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Player => "player",
            MarkerKind::Drone => "drone",
        }
    }

    fn slot_state(self) -> SlotState {
        match self {
            MarkerKind::Player => SlotState::PlayerMarker,
            MarkerKind::Drone => SlotState::DroneMarker,
        }
    }
}

/// One square of the fixed perimeter ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSlot {
    pub col: i32,
    pub row: i32,
    pub state: SlotState,
}

/// A grid position resolved to the element living there.
///
/// Interaction code dispatches on this instead of inspecting tags on
/// drawn items: a pixel becomes a coordinate, a coordinate becomes a
/// `GridElement`, and the element says what clicks mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridElement {
    Cell { col: i32, row: i32 },
    BorderSlot { col: i32, row: i32 },
}

/// The rectangular map under edit.
///
/// Constructed once per session from validated dimensions; the extent
/// never changes afterwards. Markers are the only state that is ever
/// cleared or reassigned.
#[derive(Debug, Clone)]
pub struct GridModel {
    cols: i32,
    rows: i32,
    cells: Vec<CellState>,
    slots: Vec<BorderSlot>,
    player: Option<(i32, i32)>,
    drone: Option<(i32, i32)>,
}

impl GridModel {
    /// Build a grid with all cells Open and all border slots Plain.
    ///
    /// The ring is enumerated the way the map is drawn: top and bottom
    /// rows span the extended range `[-1, cols]` (corners included),
    /// the side columns span only the interior rows. That yields
    /// `2*(cols+2) + 2*rows` slots.
    pub fn new(cols: i32, rows: i32) -> Result<Self, GridError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&cols)
            || !(MIN_DIMENSION..=MAX_DIMENSION).contains(&rows)
        {
            return Err(GridError::InvalidDimension);
        }

        let cells = vec![CellState::Open; (cols * rows) as usize];

        let mut slots = Vec::with_capacity((2 * (cols + 2) + 2 * rows) as usize);
        for col in -1..=cols {
            slots.push(BorderSlot { col, row: -1, state: SlotState::Plain });
            slots.push(BorderSlot { col, row: rows, state: SlotState::Plain });
        }
        for row in 0..rows {
            slots.push(BorderSlot { col: -1, row, state: SlotState::Plain });
            slots.push(BorderSlot { col: cols, row, state: SlotState::Plain });
        }

        Ok(Self {
            cols,
            rows,
            cells,
            slots,
            player: None,
            drone: None,
        })
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    fn cell_index(&self, col: i32, row: i32) -> Option<usize> {
        if (0..self.cols).contains(&col) && (0..self.rows).contains(&row) {
            Some((row * self.cols + col) as usize)
        } else {
            None
        }
    }

    /// State of an interior cell, or None outside the interior.
    pub fn cell(&self, col: i32, row: i32) -> Option<CellState> {
        self.cell_index(col, row).map(|i| self.cells[i])
    }

    /// Repaint an interior cell. Out-of-range coordinates are an error
    /// the caller is free to ignore; nothing is mutated in that case.
    pub fn set_cell(&mut self, col: i32, row: i32, state: CellState) -> Result<(), GridError> {
        let index = self
            .cell_index(col, row)
            .ok_or(GridError::OutOfBounds { col, row })?;
        self.cells[index] = state;
        Ok(())
    }

    /// All border slots in ring-enumeration order.
    pub fn slots(&self) -> &[BorderSlot] {
        &self.slots
    }

    fn slot_index(&self, col: i32, row: i32) -> Option<usize> {
        self.slots.iter().position(|s| s.col == col && s.row == row)
    }

    /// Border slot at a position, if the position is on the ring.
    pub fn slot_at(&self, col: i32, row: i32) -> Option<&BorderSlot> {
        self.slot_index(col, row).map(|i| &self.slots[i])
    }

    /// Resolve a grid coordinate to the element living there.
    pub fn element_at(&self, col: i32, row: i32) -> Option<GridElement> {
        if self.cell_index(col, row).is_some() {
            Some(GridElement::Cell { col, row })
        } else if self.slot_at(col, row).is_some() {
            Some(GridElement::BorderSlot { col, row })
        } else {
            None
        }
    }

    /// Position of the given marker, if assigned.
    pub fn marker_slot(&self, kind: MarkerKind) -> Option<(i32, i32)> {
        match kind {
            MarkerKind::Player => self.player,
            MarkerKind::Drone => self.drone,
        }
    }

    /// True once both markers are placed (the export precondition).
    pub fn both_markers_assigned(&self) -> bool {
        self.player.is_some() && self.drone.is_some()
    }

    /// Place a marker on a border slot.
    ///
    /// Legality against the other marker is decided by [`rules`];
    /// on success the marker's previous slot (if any) reverts to Plain
    /// before the new slot is taken, so exactly one slot ever carries
    /// each marker.
    pub fn assign_marker(
        &mut self,
        col: i32,
        row: i32,
        kind: MarkerKind,
    ) -> Result<(), PlacementError> {
        let target = self
            .slot_index(col, row)
            .ok_or(PlacementError::NotABorderSlot { col, row })?;
        rules::can_assign((col, row), self.marker_slot(kind.other()))?;

        if let Some((prev_col, prev_row)) = self.marker_slot(kind) {
            if let Some(prev) = self.slot_index(prev_col, prev_row) {
                self.slots[prev].state = SlotState::Plain;
            }
        }
        self.slots[target].state = kind.slot_state();
        match kind {
            MarkerKind::Player => self.player = Some((col, row)),
            MarkerKind::Drone => self.drone = Some((col, row)),
        }
        Ok(())
    }

    /// Revert a marker's slot to Plain and unset it. No-op when the
    /// marker is unassigned.
    pub fn clear_marker(&mut self, kind: MarkerKind) {
        let Some((col, row)) = self.marker_slot(kind) else {
            return;
        };
        if let Some(index) = self.slot_index(col, row) {
            self.slots[index].state = SlotState::Plain;
        }
        match kind {
            MarkerKind::Player => self.player = None,
            MarkerKind::Drone => self.drone = None,
        }
    }
}
