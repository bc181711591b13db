use crate::app::{AppPhase, Editor, MapApp};
use crate::error::ExportError;
use crate::grid::MarkerKind;
use crate::input::CanvasEvent;
use crate::layout;
use crate::palette;

/// The editing window: the bordered grid canvas, the legend, the
/// Save / marker-selection controls, and the status line.
pub fn editor_panel(app: &mut MapApp, ctx: &egui::Context) {
    let AppPhase::Editing(editor) = &mut app.phase else {
        return;
    };

    let frame = egui::Frame::default()
        .fill(palette::WINDOW_BACKGROUND)
        .inner_margin(20.0);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let canvas_size = layout::canvas_size_vec(editor.grid.cols(), editor.grid.rows());
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // mutate first so this frame's paint already reflects the click
        editor.input.set_canvas_rect(canvas_rect);
        for event in editor.input.collect(ctx) {
            dispatch_event(editor, event);
        }

        painter.rect_filled(canvas_rect, 0.0, palette::MARGIN);
        let offset = canvas_rect.min.to_vec2();
        let outline = egui::Stroke::new(layout::OUTLINE_WIDTH as f32, palette::OUTLINE);

        for slot in editor.grid.slots() {
            let rect = layout::element_rect(slot.col, slot.row).translate(offset);
            painter.rect_filled(rect, 0.0, palette::slot_fill(slot.state));
            painter.rect_stroke(rect, 0.0, outline);
        }
        for row in 0..editor.grid.rows() {
            for col in 0..editor.grid.cols() {
                if let Some(state) = editor.grid.cell(col, row) {
                    let rect = layout::element_rect(col, row).translate(offset);
                    painter.rect_filled(rect, 0.0, palette::cell_fill(state));
                    painter.rect_stroke(rect, 0.0, outline);
                }
            }
        }

        ui.add_space(8.0);
        ui.label(palette::LEGEND);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                save_snapshot(editor);
            }
            // selection buttons are a pure view of the state machine
            let idle = editor.session.state().is_idle();
            if ui
                .add_enabled(idle, egui::Button::new("Select player marker"))
                .clicked()
            {
                editor.session.start_selection(MarkerKind::Player);
            }
            if ui
                .add_enabled(idle, egui::Button::new("Select drone marker"))
                .clicked()
            {
                editor.session.start_selection(MarkerKind::Drone);
            }
        });

        ui.add_space(4.0);
        ui.colored_label(palette::STATUS_TEXT, editor.session.status());
    });
}

/// Resolve the event position to a grid element and hand it to the
/// session. Clicks that land on nothing are dropped here.
fn dispatch_event(editor: &mut Editor, event: CanvasEvent) {
    let (col, row) = layout::grid_coord_at(event.pos());
    let Some(element) = editor.grid.element_at(col, row) else {
        return;
    };
    match event {
        CanvasEvent::PrimaryDown { .. } => editor.session.primary_click(&mut editor.grid, element),
        CanvasEvent::SecondaryDown { .. } => {
            editor.session.secondary_click(&mut editor.grid, element)
        }
        CanvasEvent::PointerDrag { button, .. } => {
            editor.session.pointer_drag(&mut editor.grid, element, button)
        }
    }
}

fn save_snapshot(editor: &mut Editor) {
    if !editor.session.can_export(&editor.grid) {
        editor
            .session
            .set_status(ExportError::MarkersMissing.to_string());
        return;
    }
    match editor.exporter.export(&editor.grid, None) {
        Ok(path) => {
            editor
                .session
                .set_status(format!("Snapshot saved to {}", path.display()));
        }
        Err(error) => {
            log::error!("snapshot export failed: {error}");
            editor.session.set_status(format!("Save failed: {error}"));
        }
    }
}
