//! Render-Gating für den Frame-getriebenen Hauptloop.
//!
//! Der Renderer läuft nicht frei, sondern nur wenn sich etwas geändert hat
//! ("dirty") oder eine kontinuierliche Operation (aktives Zeichnen/Pannen)
//! Live-Feedback braucht. Beide Eingänge sind explizit, damit das Verhalten
//! ohne UI-Shell testbar bleibt.

/// Entscheidet pro Tick ob ein Render-Pass nötig ist.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    dirty: bool,
    continuous: bool,
}

impl FrameScheduler {
    /// Erstellt einen Scheduler ohne ausstehende Arbeit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signalisiert eine ausstehende Zustandsänderung.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Setzt ob gerade eine kontinuierliche Feedback-Operation läuft
    /// (aktiver Zeichen-Drag oder Pan) — dann wird jeder Tick gerendert.
    pub fn set_continuous(&mut self, active: bool) {
        self.continuous = active;
    }

    /// Gibt zurück ob dieser Tick rendern soll und konsumiert das Dirty-Flag.
    pub fn take_should_render(&mut self) -> bool {
        let render = self.dirty || self.continuous;
        self.dirty = false;
        render
    }
}
