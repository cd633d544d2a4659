//! Snapshot-basierte Undo/Redo-Historie.
//!
//! Bewusst Voll-Snapshots statt inverser Deltas: Wiederherstellen ist
//! O(Elemente), aber die Tiefe ist begrenzt und die Semantik nach
//! Eviction der ältesten Einträge bleibt trivial korrekt.

use crate::core::SceneSnapshot;

/// Vollständiger Szenen-Zustand zum Zeitpunkt der Aufnahme.
#[derive(Clone)]
pub struct Snapshot {
    /// Elemente und Selektion
    pub scene: SceneSnapshot,
}

impl Snapshot {
    /// Erstellt einen Snapshot des aktuellen App-Zustands.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            scene: state.scene.snapshot(),
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.scene.restore(self.scene);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen vorgefertigten Snapshot auf. Der älteste Eintrag
    /// weicht bei voller Tiefe; ein neuer Eintrag verwirft die
    /// Redo-Zukunft.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt den obersten Undo-Eintrag und legt `current` auf den
    /// Redo-Stack; der Aufrufer wendet den zurückgegebenen Snapshot an.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Gegenstück zu `pop_undo_with_current` für Redo.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}
