//! Gesten-Erkennung über dem rohen Landmark-Strom.
//!
//! Pro Frame: Klassifikation (Faust → Handfläche → Zeigen → Idle),
//! Cursor-Anker, zweistufige Glättung (gewichtetes Fenster + EMA) und
//! flanken-getriggerte Tap-Erkennung. Die Geste selbst ist ephemer —
//! nur die kurze Positions-Historie und die Tap-Zeitmarken überleben
//! den Frame.

use crate::gesture::landmarks::{FingerState, HandFrame, INDEX_TIP, MIDDLE_MCP};
use crate::shared::options::{GestureOptions, POSITION_HISTORY_LEN};
use crate::shared::EventBus;
use glam::Vec2;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Diskreter Gesten-Typ eines Frames (Prioritätsreihenfolge der
/// Klassifikation: Faust vor Handfläche vor Zeigen vor Idle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Keine der definierten Posen — Cursor wird weiter verfolgt,
    /// aber es wird weder gezeichnet noch gepannt.
    Idle,
    /// Nur der Zeigefinger gestreckt: Zeichnen / UI-Bedienung.
    Point,
    /// Alle vier Nicht-Daumen-Finger gestreckt: Pannen.
    Palm,
    /// Alle vier Nicht-Daumen-Finger eingerollt: Löschen der Selektion.
    Fist,
}

/// Klassifikations-Ergebnis eines Frames. Wird jede ~33ms neu erzeugt
/// und nie länger aufbewahrt.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    /// Roher Cursor-Anker, normiert und horizontal gespiegelt
    pub raw_pos: Vec2,
    /// Geglätteter Cursor in Viewport-Pixeln
    pub cursor: Vec2,
    pub is_pointing: bool,
    pub is_open_palm: bool,
    pub is_fist: bool,
    /// Genau in dem Frame gesetzt, in dem ein Tap akzeptiert wurde
    pub is_tap: bool,
    /// Aus der Tiefen-Varianz abgeleitet; rein informativ, gated
    /// bewusst keine Klassifikation (bekannte Limitierung).
    pub confidence: f32,
}

/// Events für Abonnenten, die nicht pro Frame pollen wollen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Akzeptierter Tap an der geglätteten Cursor-Position (Pixel)
    Tap { position: Vec2 },
    /// Steigende Faust-Flanke
    Fist,
    /// Geglättete Cursor-Position dieses Frames (Pixel)
    Moved { position: Vec2 },
}

/// Zustandsbehaftete Erkennung über aufeinanderfolgende Frames.
pub struct GestureRecognizer {
    options: GestureOptions,
    /// Rollende rohe Cursor-Positionen (normiert, gespiegelt)
    history: VecDeque<Vec2>,
    /// EMA-Zustand der Glättung (normiert)
    smoothed: Option<Vec2>,
    /// Steigende Zeige-Flanke: Startzeit + Startposition
    pointing_since: Option<(Instant, Vec2)>,
    /// Zeitpunkt des letzten akzeptierten Taps (Refraktärzeit)
    last_tap_at: Option<Instant>,
    was_fist: bool,
    events: EventBus<GestureEvent>,
}

impl GestureRecognizer {
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            history: VecDeque::with_capacity(POSITION_HISTORY_LEN),
            smoothed: None,
            pointing_since: None,
            last_tap_at: None,
            was_fist: false,
            events: EventBus::new(),
        }
    }

    /// Event-Kanal für Tap/Fist/Moved-Abonnenten.
    pub fn events(&mut self) -> &mut EventBus<GestureEvent> {
        &mut self.events
    }

    /// Verarbeitet die Hände eines Frames zu einer klassifizierten Geste.
    ///
    /// Nur die erste Hand zählt; weitere werden ignoriert. Ohne Hand
    /// (oder mit unvollständiger Topologie) wird der Tap-Zustand
    /// verworfen, die Glättungs-Historie aber behalten, damit der
    /// Cursor bei Wiedererkennung nicht springt.
    pub fn process(
        &mut self,
        hands: &[HandFrame],
        viewport: Vec2,
        now: Instant,
    ) -> Option<Gesture> {
        let hand = match hands.first() {
            Some(h) if h.is_complete() => h,
            _ => {
                self.pointing_since = None;
                self.was_fist = false;
                return None;
            }
        };

        let fingers = FingerState::from_landmarks(&hand.landmarks, &self.options);
        let kind = if fingers.all_non_thumb_curled() {
            GestureKind::Fist
        } else if fingers.all_non_thumb_extended() {
            GestureKind::Palm
        } else if fingers.only_index_extended() {
            GestureKind::Point
        } else {
            GestureKind::Idle
        };

        // Anker: Handflächen-Zentrum beim Pannen (stabiler als die
        // Fingerspitze), sonst Zeigefinger-Spitze. X gespiegelt, weil
        // das Webcam-Preview gespiegelt angezeigt wird.
        let anchor = match kind {
            GestureKind::Palm => hand.landmarks[MIDDLE_MCP].xy(),
            _ => hand.landmarks[INDEX_TIP].xy(),
        };
        let raw_pos = Vec2::new(1.0 - anchor.x, anchor.y);

        self.history.push_back(raw_pos);
        while self.history.len() > POSITION_HISTORY_LEN {
            self.history.pop_front();
        }

        let smoothed_norm = self.smooth(kind);
        let cursor = smoothed_norm * viewport;

        let is_tap = self.detect_tap(kind, raw_pos, cursor, now);

        if kind == GestureKind::Fist && !self.was_fist {
            self.events.publish(&GestureEvent::Fist);
        }
        self.was_fist = kind == GestureKind::Fist;
        self.events.publish(&GestureEvent::Moved { position: cursor });

        Some(Gesture {
            kind,
            raw_pos,
            cursor,
            is_pointing: kind == GestureKind::Point,
            is_open_palm: kind == GestureKind::Palm,
            is_fist: kind == GestureKind::Fist,
            is_tap,
            confidence: confidence_from_depth(hand),
        })
    }

    /// Gewichtetes Fenster über der Historie, danach EMA-Blend.
    ///
    /// Handfläche glättet quadratisch über ein längeres Fenster mit
    /// trägerem EMA — Pannen muss sichtbar ruhiger sein als Zeigen,
    /// sonst zittert der gesamte Canvas.
    fn smooth(&mut self, kind: GestureKind) -> Vec2 {
        let (window, factor, quadratic) = match kind {
            GestureKind::Palm => (
                self.options.palm_smooth_window,
                self.options.palm_smooth_factor,
                true,
            ),
            _ => (
                self.options.point_smooth_window,
                self.options.point_smooth_factor,
                false,
            ),
        };

        let take = window.min(self.history.len()).max(1);
        let start = self.history.len() - take;
        let mut sum = Vec2::ZERO;
        let mut weight_sum = 0.0;
        for (i, pos) in self.history.iter().skip(start).enumerate() {
            let w = (i + 1) as f32;
            let w = if quadratic { w * w } else { w };
            sum += *pos * w;
            weight_sum += w;
        }
        let avg = sum / weight_sum;

        let smoothed = match self.smoothed {
            Some(prev) => prev.lerp(avg, factor),
            None => avg,
        };
        self.smoothed = Some(smoothed);
        smoothed
    }

    /// Flanken-getriggerte Tap-Erkennung auf dem Zeige-Bool.
    ///
    /// Alle drei Schwellen sind strikt: Dauer < Maximum, Verschiebung
    /// < Maximum, Abstand zum letzten Tap > Refraktärzeit. Exakt auf
    /// der Schwelle liegende Werte lehnen damit konsistent ab.
    fn detect_tap(&mut self, kind: GestureKind, raw_pos: Vec2, cursor: Vec2, now: Instant) -> bool {
        let pointing = kind == GestureKind::Point;
        match (self.pointing_since, pointing) {
            (None, true) => {
                self.pointing_since = Some((now, raw_pos));
                false
            }
            (Some((start, start_pos)), false) => {
                self.pointing_since = None;
                let duration = now.duration_since(start);
                let displacement = raw_pos.distance(start_pos);
                let debounced = self.last_tap_at.is_none_or(|t| {
                    now.duration_since(t) > Duration::from_millis(self.options.tap_debounce_ms)
                });
                let accepted = duration
                    < Duration::from_millis(self.options.tap_max_duration_ms)
                    && displacement < self.options.tap_max_displacement
                    && debounced;
                if accepted {
                    self.last_tap_at = Some(now);
                    self.events.publish(&GestureEvent::Tap { position: cursor });
                }
                accepted
            }
            _ => false,
        }
    }
}

/// Konfidenz aus der Varianz der Landmark-Tiefen: flache, ruhige
/// Hände liefern konsistente z-Werte.
fn confidence_from_depth(hand: &HandFrame) -> f32 {
    let n = hand.landmarks.len() as f32;
    let mean = hand.landmarks.iter().map(|l| l.z).sum::<f32>() / n;
    let variance = hand
        .landmarks
        .iter()
        .map(|l| (l.z - mean).powi(2))
        .sum::<f32>()
        / n;
    1.0 / (1.0 + 50.0 * variance)
}
