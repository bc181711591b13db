use crate::dimensions::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::grid::GridModel;
use crate::input::InputCollector;
use crate::layout;
use crate::panels;
use crate::session::Session;
use crate::snapshot::SnapshotExporter;

/// State of the startup dimension prompt.
pub struct SetupForm {
    pub cols_text: String,
    pub rows_text: String,
    pub error: Option<String>,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            cols_text: DEFAULT_COLS.to_string(),
            rows_text: DEFAULT_ROWS.to_string(),
            error: None,
        }
    }
}

/// Everything the editing window owns: the grid, the interaction
/// session, pointer collection, and the exporter.
pub struct Editor {
    pub grid: GridModel,
    pub session: Session,
    pub input: InputCollector,
    pub exporter: SnapshotExporter,
}

impl Editor {
    pub fn new(grid: GridModel) -> Self {
        Self {
            grid,
            session: Session::new(),
            input: InputCollector::new(),
            exporter: SnapshotExporter::default(),
        }
    }
}

/// The application starts as a modal dimension prompt and becomes the
/// editor once the user confirms. Cancelling the prompt closes the
/// window without ever building a grid.
pub enum AppPhase {
    Setup(SetupForm),
    Editing(Editor),
}

pub struct MapApp {
    pub(crate) phase: AppPhase,
}

impl MapApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            phase: AppPhase::Setup(SetupForm::default()),
        }
    }

    /// Swap the prompt for the editor and grow the window to fit the
    /// bordered grid plus the legend and controls below it.
    pub(crate) fn begin_editing(&mut self, grid: GridModel, ctx: &egui::Context) {
        let canvas = layout::canvas_size_vec(grid.cols(), grid.rows());
        let width = (canvas.x + 40.0).max(480.0);
        let height = canvas.y + 230.0;
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(width, height)));
        log::info!("grid created: {}x{}", grid.cols(), grid.rows());
        self.phase = AppPhase::Editing(Editor::new(grid));
    }
}

impl eframe::App for MapApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if matches!(self.phase, AppPhase::Setup(_)) {
            panels::setup_panel(self, ctx);
        } else {
            panels::editor_panel(self, ctx);
        }
    }
}
