//! Synthetische Hand-Fixtures für die Gesten-Tests.
//!
//! Die Schwellwerte der Erkennung sind empirisch kalibriert; getestet
//! wird deshalb gegen handkonstruierte Landmark-Sätze mit eindeutig
//! gestreckten bzw. eingerollten Fingern, nicht gegen Grenzwerte.

use crate::gesture::landmarks::{HandFrame, Handedness, Landmark, INDEX_TIP, MIDDLE_MCP};
use glam::Vec2;

/// Fingerreihenfolge der Builder: [Daumen, Zeige, Mittel, Ring, Klein].
pub const ALL_EXTENDED: [bool; 5] = [true; 5];
pub const ALL_CURLED: [bool; 5] = [false; 5];
pub const POINT_ONLY: [bool; 5] = [false, true, false, false, false];

/// Baut eine vollständige Hand (21 Landmarks) mit gegebenem
/// Streckungs-Zustand. Handgelenk bei (0.5, 0.9), Finger nach oben.
pub fn hand_with_fingers(fingers: [bool; 5]) -> HandFrame {
    let mut lm = vec![Landmark::default(); 21];
    lm[0] = Landmark::new(0.5, 0.9, 0.0); // Handgelenk

    // Daumen-Kette seitlich; Spitze weit weg vom Zeigefinger-MCP
    // (gestreckt) bzw. direkt daneben (eingerollt)
    lm[1] = Landmark::new(0.38, 0.80, 0.0);
    lm[2] = Landmark::new(0.34, 0.75, 0.0);
    lm[3] = Landmark::new(0.31, 0.72, 0.0);
    lm[4] = if fingers[0] {
        Landmark::new(0.25, 0.68, 0.0)
    } else {
        Landmark::new(0.40, 0.62, 0.0)
    };

    // Nicht-Daumen-Finger: MCP/PIP/DIP/TIP in einer Spalte
    let columns = [0.42, 0.50, 0.58, 0.66];
    for (i, &x) in columns.iter().enumerate() {
        let base = 5 + i * 4;
        lm[base] = Landmark::new(x, 0.60, 0.0); // MCP
        lm[base + 1] = Landmark::new(x, 0.50, 0.0); // PIP
        if fingers[i + 1] {
            lm[base + 2] = Landmark::new(x, 0.40, 0.0); // DIP
            lm[base + 3] = Landmark::new(x, 0.30, 0.0); // TIP
        } else {
            lm[base + 2] = Landmark::new(x, 0.55, 0.0);
            lm[base + 3] = Landmark::new(x, 0.60, 0.0);
        }
    }

    HandFrame::new(lm, Handedness::Right)
}

/// Verschiebt eine komplette Hand um ein normiertes Delta.
fn translated(mut hand: HandFrame, delta: Vec2) -> HandFrame {
    for lm in &mut hand.landmarks {
        lm.x += delta.x;
        lm.y += delta.y;
    }
    hand
}

/// Zeige-Hand, deren Zeigefinger-Spitze bei `index_tip` liegt
/// (normierte, ungespiegelte Koordinaten).
pub fn pointing_hand_at(index_tip: Vec2) -> HandFrame {
    let hand = hand_with_fingers(POINT_ONLY);
    let current = hand.landmarks[INDEX_TIP].xy();
    translated(hand, index_tip - current)
}

/// Offene Hand, deren Mittelfinger-MCP (Handflächen-Anker) bei
/// `palm_center` liegt.
pub fn palm_hand_at(palm_center: Vec2) -> HandFrame {
    let hand = hand_with_fingers(ALL_EXTENDED);
    let current = hand.landmarks[MIDDLE_MCP].xy();
    translated(hand, palm_center - current)
}
