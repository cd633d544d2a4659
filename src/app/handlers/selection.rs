//! Handler für Selektion und Löschen.

use crate::app::{AppState, CanvasEvent};
use crate::core::ElementId;
use glam::Vec2;

/// Hit-Test-Selektion an einer Canvas-Position: Treffer selektiert
/// das oberste Element, Fehlschlag hebt die Selektion auf.
pub fn tap_select(state: &mut AppState, canvas_pos: Vec2) {
    let hit = state.scene.element_at(canvas_pos, state.pick_tolerance());
    apply_selection(state, hit);
}

/// Setzt die Selektion auf `target` und publiziert nur bei Änderung.
pub fn apply_selection(state: &mut AppState, target: Option<ElementId>) {
    let before = state.scene.selected_id();
    match target {
        Some(id) => {
            // Unbekannte Id: Selektion bleibt unverändert
            state.scene.select(id);
        }
        None => state.scene.deselect_all(),
    }
    let after = state.scene.selected_id();
    if after != before {
        state
            .events
            .publish(&CanvasEvent::SelectionChanged { selected: after });
    }
}

/// Hebt die Selektion auf (Faust-Geste, Escape).
pub fn deselect_all(state: &mut AppState) {
    apply_selection(state, None);
}

/// Löscht das selektierte Element (No-op ohne Selektion).
pub fn delete_selected(state: &mut AppState) {
    let Some(id) = state.scene.selected_id() else {
        return;
    };
    state.record_undo_snapshot();
    state.scene.remove_element(id);
    state.events.publish(&CanvasEvent::ElementRemoved { id });
    state
        .events
        .publish(&CanvasEvent::SelectionChanged { selected: None });
}
