//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionMode};
use crate::gesture::Gesture;

/// Rendert die Status-Bar.
pub fn render_status_bar(
    ctx: &egui::Context,
    state: &AppState,
    gesture: Option<&Gesture>,
    mode: InteractionMode,
) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Elemente: {}", state.element_count()));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.0}% | Pan: ({:.0}, {:.0})",
                state.view.camera.scale * 100.0,
                state.view.camera.pan.x,
                state.view.camera.pan.y
            ));

            ui.separator();

            ui.label(format!(
                "Tool: {}",
                state.tools.active_kind().name()
            ));

            ui.separator();

            if let Some(id) = state.scene.selected_id() {
                ui.label(format!("Selektiert: #{}", id));
            } else {
                ui.label("Selektiert: —");
            }

            ui.separator();

            // Gesten-Status
            match gesture {
                Some(g) => {
                    let mode_label = match mode {
                        InteractionMode::Idle => "Bereit",
                        InteractionMode::Drawing => "Zeichnet",
                        InteractionMode::Panning => "Pan",
                    };
                    ui.label(format!(
                        "Hand: {} | Konfidenz: {:.0}%",
                        mode_label,
                        g.confidence * 100.0
                    ));
                }
                None => {
                    ui.label("Hand: keine erkannt");
                }
            }

            // Statusnachricht
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
