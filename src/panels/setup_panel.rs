use crate::app::{AppPhase, MapApp};
use crate::dimensions;
use crate::grid::GridModel;

/// The startup prompt: two bounded-integer fields, confirm on button
/// press or Enter, cancel closes the window before any grid exists.
pub fn setup_panel(app: &mut MapApp, ctx: &egui::Context) {
    let mut confirmed = None;

    let AppPhase::Setup(form) = &mut app.phase else {
        return;
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Map Grid Setup");
        ui.add_space(8.0);

        egui::Grid::new("setup_fields")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Columns (1-50):");
                ui.text_edit_singleline(&mut form.cols_text);
                ui.end_row();

                ui.label("Rows (1-50):");
                ui.text_edit_singleline(&mut form.rows_text);
                ui.end_row();
            });

        ui.add_space(8.0);

        let mut confirm_pressed = false;
        ui.horizontal(|ui| {
            confirm_pressed = ui.button("Confirm").clicked();
            if ui.button("Cancel").clicked() {
                log::info!("setup cancelled");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
        confirm_pressed |= ui.input(|i| i.key_pressed(egui::Key::Enter));

        if confirm_pressed {
            form.error = None;
            match dimensions::validate_dimensions(&form.cols_text, &form.rows_text)
                .and_then(|(cols, rows)| GridModel::new(cols, rows))
            {
                Ok(grid) => confirmed = Some(grid),
                Err(_) => form.error = Some("Please re-enter a valid number.".to_owned()),
            }
        }

        if let Some(error) = &form.error {
            ui.add_space(4.0);
            ui.colored_label(egui::Color32::RED, error);
        }
    });

    if let Some(grid) = confirmed {
        app.begin_editing(grid, ctx);
    }
}
