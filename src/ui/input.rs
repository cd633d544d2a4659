//! Maus- und Tastatur-Input für den Canvas-Viewport.
//!
//! Die Maus ist der zweite Eingabeweg neben den Gesten und läuft durch
//! dieselben Intents: Primär-Drag zeichnet, Sekundär-Drag pannt,
//! Scroll zoomt auf den Mauszeiger.

use crate::app::{AppIntent, ToolKind};
use crate::shared::EditorOptions;
use glam::Vec2;

use super::keyboard;

/// Frame-übergreifender Input-Zustand.
#[derive(Debug, Default)]
pub struct InputState {
    last_viewport: Option<[f32; 2]>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt alle Viewport-Intents eines Frames.
    #[allow(clippy::too_many_arguments)]
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        has_selection: bool,
        active_tool: ToolKind,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.last_viewport != Some(viewport_size) {
            self.last_viewport = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            has_selection,
            active_tool,
        ));

        let pointer = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos());
        let screen_pos = pointer.map(|p| Vec2::new(p.x, p.y));

        // ── Primär-Drag = aktives Tool ──
        if let Some(screen_pos) = screen_pos {
            if response.drag_started_by(egui::PointerButton::Primary) {
                events.push(AppIntent::DrawStarted { screen_pos });
            } else if response.dragged_by(egui::PointerButton::Primary) {
                events.push(AppIntent::DrawMoved { screen_pos });
            } else if response.drag_stopped_by(egui::PointerButton::Primary) {
                events.push(AppIntent::DrawEnded { screen_pos });
            } else if response.clicked() {
                events.push(AppIntent::TapAt { screen_pos });
            }
        }

        // ── Sekundär-Drag = Pan ──
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta: Vec2::new(delta.x, delta.y),
                });
            }
        }

        // ── Scroll / Pinch = Zoom auf den Mauszeiger ──
        if response.hovered() {
            let (scroll, pinch) = ui.input(|i| (i.raw_scroll_delta.y, i.zoom_delta()));
            let focus_screen = response.hover_pos().map(|p| Vec2::new(p.x, p.y));

            if scroll.abs() > 0.1 {
                let factor = options.camera_zoom_step.powf(scroll / 120.0);
                events.push(AppIntent::CameraZoom {
                    factor,
                    focus_screen,
                });
            }
            if (pinch - 1.0).abs() > f32::EPSILON {
                events.push(AppIntent::CameraZoom {
                    factor: pinch,
                    focus_screen,
                });
            }
        }

        events
    }
}
