use crate::SketchpadApp;
use crate::components::ToolButton;
use crate::sticker::StickerText;
use crate::stroke::Thickness;
use crate::tools::Tool;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Clear/Undo/Redo section
            ui.horizontal(|ui| {
                let history = app.sketchpad().history();
                let can_clear = history.can_clear();
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();

                if ui.add_enabled(can_clear, egui::Button::new("Clear")).clicked() {
                    log::info!("Clearing canvas");
                    app.sketchpad_mut().clear();
                }
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
            });

            ui.separator();

            ui.label("Marker");
            ui.horizontal(|ui| {
                let marker_active = !app.sketchpad().tool().is_sticker_tool();
                for thickness in [Thickness::Thin, Thickness::Thick] {
                    let is_selected = marker_active && app.sketchpad().thickness() == thickness;
                    if ui.selectable_label(is_selected, thickness.label()).clicked() {
                        app.sketchpad_mut().select_thickness(thickness);
                    }
                }
            });

            ui.separator();

            ui.label("Stickers");
            let palette = app.config().stickers.clone();
            ui.horizontal_wrapped(|ui| {
                for sticker in palette {
                    let is_selected = app.sketchpad().selected_sticker() == Some(&sticker);
                    if ToolButton::new(sticker.as_str(), is_selected).show(ui).clicked() {
                        app.sketchpad_mut().select_sticker(Some(sticker));
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.text_edit_singleline(app.custom_sticker_mut());
                if ui.button("Create Custom Sticker").clicked() {
                    create_custom_sticker(app);
                }
            });
            if let Some(error) = app.custom_sticker_error() {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.separator();

            let sketchpad = app.sketchpad();
            let history = sketchpad.history();
            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Drawables");
                    ui.label(history.len().to_string());
                    ui.end_row();

                    ui.label("Undo stack");
                    ui.label(history.undo_stack().len().to_string());
                    ui.end_row();

                    ui.label("Redo stack");
                    ui.label(history.redo_stack().len().to_string());
                    ui.end_row();

                    ui.label("Tool");
                    ui.label(format!("{} ({})", sketchpad.tool().name(), sketchpad.state().name()));
                    ui.end_row();
                });
        });
}

fn create_custom_sticker(app: &mut SketchpadApp) {
    match StickerText::parse(app.custom_sticker_mut().clone()) {
        Ok(text) => {
            log::info!("Created custom sticker {:?}", text.as_str());
            app.config_mut().add_sticker(text.clone());
            app.sketchpad_mut().select_sticker(Some(text));
            app.custom_sticker_mut().clear();
            app.set_custom_sticker_error(None);
        }
        Err(err) => {
            log::warn!("Rejected custom sticker: {}", err);
            app.set_custom_sticker_error(Some(err.to_string()));
        }
    }
}
