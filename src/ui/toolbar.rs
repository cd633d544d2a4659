//! Toolbar für Werkzeugauswahl, Stil und Canvas-Aktionen.
//!
//! Jeder Button wird doppelt gemeldet: als Maus-Klick (`AppIntent`) und
//! als `UiControl`-Rechteck für die Hover-Dwell-Aktivierung per Geste.

use crate::app::{AppIntent, AppState, ControlId, ToolKind, UiControl};
use crate::shared::Bounds;
use glam::Vec2;

/// Rendert die Toolbar und gibt Intents plus Gesten-Controls zurück.
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &AppState,
) -> (Vec<AppIntent>, Vec<UiControl>) {
    let mut events = Vec::new();
    let mut controls = Vec::new();
    let active = state.tools.active_kind();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for kind in ToolKind::all() {
                let label = format!("{} {}", kind.icon(), kind.name());
                let response = ui.add(egui::Button::new(label).selected(active == kind));
                if response.clicked() {
                    events.push(AppIntent::SetToolRequested { kind });
                }
                controls.push(control_from_rect(ControlId::Tool(kind), response.rect));
            }

            ui.separator();

            // ── Undo / Redo ──
            let undo = ui.add_enabled(state.can_undo(), egui::Button::new("↶ Undo"));
            if undo.clicked() {
                events.push(AppIntent::UndoRequested);
            }
            controls.push(control_from_rect(ControlId::Undo, undo.rect));

            let redo = ui.add_enabled(state.can_redo(), egui::Button::new("↷ Redo"));
            if redo.clicked() {
                events.push(AppIntent::RedoRequested);
            }
            controls.push(control_from_rect(ControlId::Redo, redo.rect));

            ui.separator();

            let clear = ui.add_enabled(
                !state.scene.is_empty(),
                egui::Button::new("🗑 Leeren"),
            );
            if clear.clicked() {
                events.push(AppIntent::ClearCanvasRequested);
            }
            controls.push(control_from_rect(ControlId::Clear, clear.rect));

            ui.separator();

            // ── Kamera ──
            let zoom_out = ui.button("−");
            if zoom_out.clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            controls.push(control_from_rect(ControlId::ZoomOut, zoom_out.rect));

            ui.label(format!("{:.0}%", state.view.camera.scale * 100.0));

            let zoom_in = ui.button("+");
            if zoom_in.clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            controls.push(control_from_rect(ControlId::ZoomIn, zoom_in.rect));

            let reset = ui.button("⌖ Ansicht");
            if reset.clicked() {
                events.push(AppIntent::ResetViewRequested);
            }
            controls.push(control_from_rect(ControlId::ResetView, reset.rect));

            ui.separator();

            // ── Stil neuer Elemente ──
            render_style_controls(ui, state, &mut events);

            // Options-Button (rechts ausgerichtet)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Optionen").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                }
            });
        });
    });

    (events, controls)
}

fn render_style_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Strich:");
    let mut stroke = state.options.default_stroke_color;
    if color_edit(ui, &mut stroke) {
        events.push(AppIntent::SetStrokeColorRequested { color: stroke });
    }

    let mut width = state.options.default_stroke_width;
    if ui
        .add(
            egui::DragValue::new(&mut width)
                .range(0.5..=30.0)
                .speed(0.1),
        )
        .changed()
    {
        events.push(AppIntent::SetStrokeWidthRequested { width });
    }

    // Füllung: Checkbox schaltet zwischen None und letzter Farbe
    let mut filled = state.options.default_fill_color.is_some();
    if ui.checkbox(&mut filled, "Füllung").changed() {
        let color = filled.then(|| state.options.default_stroke_color);
        events.push(AppIntent::SetFillColorRequested { color });
    }
    if let Some(mut fill) = state.options.default_fill_color {
        if color_edit(ui, &mut fill) {
            events.push(AppIntent::SetFillColorRequested { color: Some(fill) });
        }
    }
}

/// Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, color: &mut [f32; 4]) -> bool {
    let mut c = egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    );
    if ui.color_edit_button_srgba(&mut c).changed() {
        color[0] = c.r() as f32 / 255.0;
        color[1] = c.g() as f32 / 255.0;
        color[2] = c.b() as f32 / 255.0;
        color[3] = c.a() as f32 / 255.0;
        return true;
    }
    false
}

fn control_from_rect(id: ControlId, rect: egui::Rect) -> UiControl {
    UiControl {
        id,
        rect: Bounds::from_corners(
            Vec2::new(rect.min.x, rect.min.y),
            Vec2::new(rect.max.x, rect.max.y),
        ),
    }
}
