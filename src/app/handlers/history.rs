//! Handler für Undo/Redo.

use crate::app::history::Snapshot;
use crate::app::{AppState, CanvasEvent};

/// Macht die letzte Aktion rückgängig. An der Grenze (leerer
/// Undo-Stack) ein No-op.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let Some(prev) = state.history.pop_undo_with_current(current) else {
        return;
    };
    restore(state, prev);
}

/// Stellt die zuletzt rückgängig gemachte Aktion wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    let Some(next) = state.history.pop_redo_with_current(current) else {
        return;
    };
    restore(state, next);
}

fn restore(state: &mut AppState, snap: Snapshot) {
    let selected_before = state.scene.selected_id();
    snap.apply_to(state);
    // Laufende Tool-Drags beziehen sich auf den alten Szenen-Stand
    state.tools.reset();

    let selected_after = state.scene.selected_id();
    if selected_after != selected_before {
        state.events.publish(&CanvasEvent::SelectionChanged {
            selected: selected_after,
        });
    }
}
