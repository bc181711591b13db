//! The interaction controller: pointer events in, grid mutations out.
//!
//! All modal state lives in an explicit [`Session`] owned by the app;
//! the UI layer only reflects it (buttons enabled iff the session is
//! idle) and never participates in the logic.

use egui::PointerButton;

use crate::grid::{CellState, GridElement, GridModel, MarkerKind};

/// The editor's modal state.
///
/// `Idle` paints terrain; the two selecting states divert the next
/// border click into a marker placement. There is no terminal state;
/// the machine runs for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    SelectingPlayer,
    SelectingDrone,
}

impl SelectionState {
    pub fn is_idle(self) -> bool {
        matches!(self, SelectionState::Idle)
    }

    /// The marker being placed, when in a selecting state.
    pub fn selecting(self) -> Option<MarkerKind> {
        match self {
            SelectionState::Idle => None,
            SelectionState::SelectingPlayer => Some(MarkerKind::Player),
            SelectionState::SelectingDrone => Some(MarkerKind::Drone),
        }
    }

    fn for_kind(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Player => SelectionState::SelectingPlayer,
            MarkerKind::Drone => SelectionState::SelectingDrone,
        }
    }
}

/// Session state for one editing window: the selection state machine
/// plus the status line it reports through.
#[derive(Debug)]
pub struct Session {
    state: SelectionState,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Idle,
            status: "Use the buttons to place the player and drone markers.".to_owned(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Enter marker-selection mode for `kind`.
    ///
    /// Re-pressing the active kind's button is a no-op; pressing it
    /// while the other selection is active is rejected with a status
    /// message and no transition.
    pub fn start_selection(&mut self, kind: MarkerKind) {
        if self.state == SelectionState::for_kind(kind) {
            return;
        }
        if !self.state.is_idle() {
            self.set_status(format!(
                "Finish placing the {} marker before choosing the {} marker.",
                kind.other().label(),
                kind.label()
            ));
            return;
        }
        self.state = SelectionState::for_kind(kind);
        self.set_status(format!(
            "Select a border slot for the {} marker. Right-click the current {} marker to clear it.",
            kind.label(),
            kind.label()
        ));
    }

    /// Primary click (or initial press of a paint drag).
    pub fn primary_click(&mut self, grid: &mut GridModel, element: GridElement) {
        match (self.state.selecting(), element) {
            // paint only while idle; selecting swallows cell clicks
            (None, GridElement::Cell { col, row }) => {
                let _ = grid.set_cell(col, row, CellState::Blocked);
            }
            (None, GridElement::BorderSlot { .. }) => {}
            (Some(kind), GridElement::BorderSlot { col, row }) => {
                match grid.assign_marker(col, row, kind) {
                    Ok(()) => {
                        self.state = SelectionState::Idle;
                        self.set_status(format!(
                            "{} marker placed.",
                            capitalize(kind.label())
                        ));
                        log::info!("{} marker placed at ({col}, {row})", kind.label());
                    }
                    Err(reason) => {
                        // stay in selection mode, surface the reason
                        self.set_status(reason.to_string());
                        log::debug!(
                            "rejected {} marker at ({col}, {row}): {reason}",
                            kind.label()
                        );
                    }
                }
            }
            (Some(_), GridElement::Cell { .. }) => {}
        }
    }

    /// Secondary click: erase terrain while idle; clear or cancel the
    /// active selection on the border.
    pub fn secondary_click(&mut self, grid: &mut GridModel, element: GridElement) {
        match (self.state.selecting(), element) {
            (None, GridElement::Cell { col, row }) => {
                let _ = grid.set_cell(col, row, CellState::Open);
            }
            (None, GridElement::BorderSlot { .. }) => {}
            (Some(kind), GridElement::BorderSlot { col, row }) => {
                if grid.marker_slot(kind) == Some((col, row)) {
                    grid.clear_marker(kind);
                    self.state = SelectionState::Idle;
                    self.set_status(format!("{} marker cleared.", capitalize(kind.label())));
                } else if grid.marker_slot(kind).is_none() {
                    self.state = SelectionState::Idle;
                    self.set_status(format!(
                        "{} marker selection cancelled.",
                        capitalize(kind.label())
                    ));
                }
                // right-clicking some other slot while the marker is
                // placed elsewhere does nothing
            }
            (Some(_), GridElement::Cell { .. }) => {}
        }
    }

    /// Paint-while-held: each pointer move with a button down repaints
    /// the cell under the pointer. Suppressed outside Idle.
    pub fn pointer_drag(
        &mut self,
        grid: &mut GridModel,
        element: GridElement,
        button: PointerButton,
    ) {
        if !self.state.is_idle() {
            return;
        }
        if let GridElement::Cell { col, row } = element {
            let state = match button {
                PointerButton::Primary => CellState::Blocked,
                PointerButton::Secondary => CellState::Open,
                _ => return,
            };
            let _ = grid.set_cell(col, row, state);
        }
    }

    /// Export precondition: both markers must be placed.
    pub fn can_export(&self, grid: &GridModel) -> bool {
        grid.both_markers_assigned()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
