//! Hand-Landmark-Topologie und Finger-Streckungs-Heuristik.
//!
//! Der externe Detektor liefert 21 normierte 3D-Punkte pro Hand in
//! fester Skelett-Reihenfolge. Dieses Modul kennt nur die Topologie
//! und leitet daraus pro Frame einen `FingerState` ab — keine
//! Historie, keine Klassifikation.

use crate::shared::options::GestureOptions;
use glam::Vec2;

// ── Landmark-Indizes (feste Skelett-Topologie) ──────────────────────

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Anzahl Landmarks pro Hand.
pub const LANDMARK_COUNT: usize = 21;

/// Ein normierter 3D-Keypoint in [0,1]² (z: relative Tiefe).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Projektion in die Bildebene (z wird verworfen).
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Händigkeits-Label des Detektors. Wird durchgereicht, aber nicht
/// zur Klassifikation verwendet (nur die erste Hand zählt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// Eine erkannte Hand eines Frames: geordnete Landmark-Liste plus Label.
#[derive(Debug, Clone)]
pub struct HandFrame {
    pub landmarks: Vec<Landmark>,
    pub handedness: Handedness,
}

impl HandFrame {
    pub fn new(landmarks: Vec<Landmark>, handedness: Handedness) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }

    /// Gültig nur mit vollständiger Topologie — unvollständige Frames
    /// degradieren zu "keine Geste", niemals zu einem Panic.
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= LANDMARK_COUNT
    }
}

/// Streckungs-Zustand pro Finger, abgeleitet aus genau einem Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Leitet den Streckungs-Zustand aus einer vollständigen Hand ab.
    ///
    /// Nicht-Daumen-Finger gelten als gestreckt wenn die Fingerspitze
    /// (mit Toleranz) über ihrem PIP-Gelenk liegt UND der Abstand
    /// Spitze↔Handgelenk das konfigurierte Vielfache des Abstands
    /// MCP↔Handgelenk überschreitet. Der Daumen hat keinen brauchbaren
    /// Vertikal-Test und nutzt stattdessen den Abstand seiner Spitze
    /// zum Zeigefinger-MCP.
    pub fn from_landmarks(landmarks: &[Landmark], options: &GestureOptions) -> Self {
        debug_assert!(landmarks.len() >= LANDMARK_COUNT);
        let wrist = landmarks[WRIST].xy();

        let extended = |tip: usize, pip: usize, mcp: usize| -> bool {
            let tip_p = landmarks[tip].xy();
            let above_pip = tip_p.y < landmarks[pip].y + options.finger_y_tolerance;
            let long_enough = tip_p.distance(wrist)
                > options.finger_length_ratio * landmarks[mcp].xy().distance(wrist);
            above_pip && long_enough
        };

        let thumb = landmarks[THUMB_TIP].xy().distance(landmarks[INDEX_MCP].xy())
            > options.thumb_extend_distance;

        Self {
            thumb,
            index: extended(INDEX_TIP, INDEX_PIP, INDEX_MCP),
            middle: extended(MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
            ring: extended(RING_TIP, RING_PIP, RING_MCP),
            pinky: extended(PINKY_TIP, PINKY_PIP, PINKY_MCP),
        }
    }

    /// Alle vier Nicht-Daumen-Finger gestreckt.
    pub fn all_non_thumb_extended(&self) -> bool {
        self.index && self.middle && self.ring && self.pinky
    }

    /// Alle vier Nicht-Daumen-Finger eingerollt.
    pub fn all_non_thumb_curled(&self) -> bool {
        !self.index && !self.middle && !self.ring && !self.pinky
    }

    /// Genau der Zeigefinger unter den Nicht-Daumen-Fingern gestreckt.
    pub fn only_index_extended(&self) -> bool {
        self.index && !self.middle && !self.ring && !self.pinky
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::test_fixtures::{hand_with_fingers, ALL_CURLED, ALL_EXTENDED};

    #[test]
    fn extended_fingers_are_detected() {
        let hand = hand_with_fingers(ALL_EXTENDED);
        let state = FingerState::from_landmarks(&hand.landmarks, &GestureOptions::default());
        assert!(state.all_non_thumb_extended());
        assert!(state.thumb);
    }

    #[test]
    fn curled_fingers_are_detected() {
        let hand = hand_with_fingers(ALL_CURLED);
        let state = FingerState::from_landmarks(&hand.landmarks, &GestureOptions::default());
        assert!(state.all_non_thumb_curled());
        assert!(!state.thumb);
    }

    #[test]
    fn index_only_is_distinguished() {
        let hand = hand_with_fingers([false, true, false, false, false]);
        let state = FingerState::from_landmarks(&hand.landmarks, &GestureOptions::default());
        assert!(state.only_index_extended());
        assert!(!state.all_non_thumb_extended());
        assert!(!state.all_non_thumb_curled());
    }

    #[test]
    fn tip_below_pip_tolerance_counts_as_curled() {
        let mut hand = hand_with_fingers(ALL_EXTENDED);
        // Zeigefinger-Spitze knapp unter das PIP-Gelenk schieben
        hand.landmarks[INDEX_TIP].y = hand.landmarks[INDEX_PIP].y + 0.05;
        let state = FingerState::from_landmarks(&hand.landmarks, &GestureOptions::default());
        assert!(!state.index);
    }
}
