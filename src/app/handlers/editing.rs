//! Handler für Canvas-weite Mutationen und Stil-Defaults.

use crate::app::{AppState, CanvasEvent};

/// Leert den Canvas vollständig (mit Undo-Snapshot).
pub fn clear_canvas(state: &mut AppState) {
    if state.scene.is_empty() && state.scene.selected_id().is_none() {
        return;
    }
    state.record_undo_snapshot();
    state.scene.clear();
    state.tools.reset();
    state.events.publish(&CanvasEvent::Cleared);
}

/// Setzt die Strichfarbe für künftig erstellte Elemente.
pub fn set_stroke_color(state: &mut AppState, color: [f32; 4]) {
    state.options.default_stroke_color = color;
}

/// Setzt die Füllfarbe für künftig erstellte Elemente.
pub fn set_fill_color(state: &mut AppState, color: Option<[f32; 4]>) {
    state.options.default_fill_color = color;
}

/// Setzt die Strichbreite für künftig erstellte Elemente.
pub fn set_stroke_width(state: &mut AppState, width: f32) {
    state.options.default_stroke_width = width.max(0.1);
}
