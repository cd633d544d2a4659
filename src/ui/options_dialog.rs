//! Optionen-Dialog für Gesten-Schwellwerte, Tool- und Render-Einstellungen.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Gesten ──────────────────────────────────────
                    ui.collapsing("Gesten", |ui| {
                        changed |= drag_value_u64(
                            ui,
                            "Tap max. Dauer (ms):",
                            &mut opts.gesture.tap_max_duration_ms,
                            100..=1000,
                        );
                        changed |= drag_value_u64(
                            ui,
                            "Tap Refraktärzeit (ms):",
                            &mut opts.gesture.tap_debounce_ms,
                            100..=2000,
                        );
                        changed |= drag_value(
                            ui,
                            "Tap max. Verschiebung:",
                            &mut opts.gesture.tap_max_displacement,
                            0.01..=0.5,
                            0.005,
                        );
                        changed |= drag_value(
                            ui,
                            "Glättung Zeigen (EMA):",
                            &mut opts.gesture.point_smooth_factor,
                            0.05..=1.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Glättung Handfläche (EMA):",
                            &mut opts.gesture.palm_smooth_factor,
                            0.05..=1.0,
                            0.01,
                        );
                    });

                    // ── Hover-Dwell ─────────────────────────────────
                    ui.collapsing("Hover-Steuerung", |ui| {
                        changed |= drag_value_u64(
                            ui,
                            "Anzeige ab (ms):",
                            &mut opts.hover_progress_ms,
                            200..=5000,
                        );
                        changed |= drag_value_u64(
                            ui,
                            "Auslösung ab (ms):",
                            &mut opts.hover_activate_ms,
                            500..=10000,
                        );
                    });

                    // ── Tools ───────────────────────────────────────
                    ui.collapsing("Werkzeuge", |ui| {
                        changed |= drag_value(
                            ui,
                            "Min. Shape-Größe:",
                            &mut opts.min_shape_size,
                            1.0..=50.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Min. Linienlänge:",
                            &mut opts.min_line_length,
                            1.0..=100.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Freihand-Dezimierung:",
                            &mut opts.freehand_min_distance,
                            0.5..=20.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Freihand-Vereinfachung (ε):",
                            &mut opts.freehand_simplify_epsilon,
                            0.1..=10.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Pick-Radius (px):",
                            &mut opts.selection_pick_radius_px,
                            2.0..=50.0,
                            0.5,
                        );
                    });

                    // ── Rendering ───────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= ui.checkbox(&mut opts.show_grid, "Grid anzeigen").changed();
                        changed |= drag_value(
                            ui,
                            "Grid-Abstand:",
                            &mut opts.grid_spacing,
                            10.0..=200.0,
                            1.0,
                        );
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        changed |= color_edit(ui, "Grid-Farbe:", &mut opts.grid_color);
                        changed |= color_edit(ui, "Selektion:", &mut opts.selection_color);
                        changed |= drag_value(
                            ui,
                            "Vorschau-Deckkraft:",
                            &mut opts.preview_opacity,
                            0.1..=1.0,
                            0.05,
                        );
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        changed |= drag_value(
                            ui,
                            "Zoom-Schritt:",
                            &mut opts.camera_zoom_step,
                            1.01..=3.0,
                            0.01,
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f32,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

fn drag_value_u64(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut u64,
    range: std::ops::RangeInclusive<u64>,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(10))
            .changed();
    });
    changed
}

/// Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
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
            changed = true;
        }
    });
    changed
}
