//! Gesten-Pipeline: Landmark-Topologie und Frame-Klassifikation.
//!
//! Der externe Hand-Detektor (ML-Modell, Webcam) ist bewusst außen
//! vor — diese Schicht konsumiert fertige Landmark-Frames über den
//! `LandmarkFeed`-Trait.

/// Landmark-Indizes, `HandFrame`, Finger-Streckungs-Heuristik.
pub mod landmarks;
/// Klassifikation, Glättung, Tap-Erkennung, Gesten-Events.
pub mod recognizer;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use landmarks::{FingerState, HandFrame, Handedness, Landmark};
pub use recognizer::{Gesture, GestureEvent, GestureKind, GestureRecognizer};

/// Quelle der Landmark-Frames (pro Tick null oder mehr Hände).
///
/// Produktiv sitzt hier die Webcam-Detektor-Anbindung; Tests und der
/// Headless-Betrieb stecken eine Null-Quelle ein.
pub trait LandmarkFeed {
    /// Holt die Hände des aktuellen Frames ab (leer = keine Hand).
    fn poll(&mut self) -> Vec<HandFrame>;
}

/// Feed ohne Detektor: liefert nie eine Hand. Der Editor bleibt damit
/// vollständig über Maus/Toolbar bedienbar.
#[derive(Debug, Default)]
pub struct NullFeed;

impl LandmarkFeed for NullFeed {
    fn poll(&mut self) -> Vec<HandFrame> {
        Vec::new()
    }
}
