//! Gesten-Overlay: Cursor und Hover-Dwell-Fortschritt.

use crate::app::{ControlId, UiControl};
use crate::gesture::{Gesture, GestureKind};
use egui::epaint;

/// Radius des Gesten-Cursors in Pixeln.
const CURSOR_RADIUS: f32 = 9.0;
/// Radius des Fortschritts-Rings um ein Control.
const PROGRESS_RADIUS: f32 = 22.0;
/// Segmentanzahl des Fortschritts-Rings.
const PROGRESS_SEGMENTS: usize = 48;

/// Zeichnet den Gesten-Cursor und den Dwell-Fortschritt über alles andere.
#[derive(Default)]
pub struct OverlayRenderer;

impl OverlayRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn paint(
        &self,
        painter: &egui::Painter,
        gesture: Option<&Gesture>,
        hover: Option<(ControlId, f32)>,
        controls: &[UiControl],
    ) {
        if let Some(gesture) = gesture {
            self.paint_cursor(painter, gesture);
        }
        if let Some((control_id, progress)) = hover {
            if let Some(control) = controls.iter().find(|c| c.id == control_id) {
                self.paint_progress_ring(painter, control, progress);
            }
        }
    }

    fn paint_cursor(&self, painter: &egui::Painter, gesture: &Gesture) {
        let pos = egui::pos2(gesture.cursor.x, gesture.cursor.y);

        match gesture.kind {
            GestureKind::Point => {
                painter.circle_filled(pos, CURSOR_RADIUS * 0.5, egui::Color32::WHITE);
                painter.circle_stroke(
                    pos,
                    CURSOR_RADIUS,
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                );
            }
            GestureKind::Palm => {
                painter.circle_stroke(
                    pos,
                    CURSOR_RADIUS * 1.4,
                    egui::Stroke::new(2.5, egui::Color32::LIGHT_BLUE),
                );
            }
            GestureKind::Fist => {
                painter.circle_filled(pos, CURSOR_RADIUS * 0.8, egui::Color32::LIGHT_RED);
            }
            GestureKind::Idle => {
                painter.circle_stroke(
                    pos,
                    CURSOR_RADIUS * 0.7,
                    egui::Stroke::new(1.0, egui::Color32::GRAY),
                );
            }
        }
    }

    /// Fortschritts-Ring: blasser Vollkreis plus heller Bogen von 12 Uhr
    /// im Uhrzeigersinn bis `progress` (0..=1).
    fn paint_progress_ring(&self, painter: &egui::Painter, control: &UiControl, progress: f32) {
        let center_canvas = control.rect.center();
        let center = egui::pos2(center_canvas.x, center_canvas.y);

        painter.circle_stroke(
            center,
            PROGRESS_RADIUS,
            egui::Stroke::new(2.0, egui::Color32::from_white_alpha(40)),
        );

        let progress = progress.clamp(0.0, 1.0);
        let steps = ((PROGRESS_SEGMENTS as f32) * progress).ceil() as usize;
        if steps < 1 {
            return;
        }

        let points: Vec<egui::Pos2> = (0..=steps)
            .map(|i| {
                let t = i as f32 / PROGRESS_SEGMENTS as f32;
                let angle = -std::f32::consts::FRAC_PI_2
                    + t.min(progress) * std::f32::consts::TAU;
                egui::pos2(
                    center.x + PROGRESS_RADIUS * angle.cos(),
                    center.y + PROGRESS_RADIUS * angle.sin(),
                )
            })
            .collect();

        painter.add(epaint::PathShape::line(
            points,
            egui::Stroke::new(3.0, egui::Color32::LIGHT_GREEN),
        ));
    }
}
