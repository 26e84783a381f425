use crate::SketchpadApp;
use crate::input::route_event;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        let canvas_size = app.config().canvas_size;
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        for event in app.input_mut().process_input(ctx, canvas_rect) {
            route_event(&event, app.sketchpad_mut());
        }

        let config = app.config();
        let mut surface =
            PainterSurface::new(&painter, canvas_rect, config.background, config.glyph_size);
        app.sketchpad().render(&mut surface);

        painter.rect_stroke(
            canvas_rect,
            PainterSurface::CORNER_RADIUS,
            egui::Stroke::new(1.0, egui::Color32::BLACK),
        );

        // The tool preview stands in for the cursor
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
    });
}
