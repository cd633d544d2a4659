//! Gesten-zu-Tool-Dispatcher.
//!
//! Übersetzt die klassifizierte Geste eines Frames in `AppIntent`s:
//! Zeigen zeichnet oder bedient per Hover-Dwell die Toolbar, offene
//! Handfläche pannt, Faust löscht die Selektion, Handverlust schließt
//! alles deterministisch. Alle Übergänge sind defensiv — das Schließen
//! einer nie geöffneten Operation ist ein No-op, nie ein Fehler.

use super::tools::ToolKind;
use super::AppIntent;
use crate::gesture::{Gesture, GestureKind};
use crate::shared::{Bounds, EditorOptions};
use glam::Vec2;
use std::time::{Duration, Instant};

/// Identität eines per Geste bedienbaren UI-Controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    /// Werkzeug-Button der Toolbar
    Tool(ToolKind),
    Undo,
    Redo,
    Clear,
    ResetView,
    ZoomIn,
    ZoomOut,
}

/// Screen-Region eines UI-Controls, pro Frame von der Toolbar exportiert.
#[derive(Debug, Clone, Copy)]
pub struct UiControl {
    pub id: ControlId,
    /// Trefferfläche in Screen-Pixeln
    pub rect: Bounds,
}

/// Grober Interaktions-Modus (Hover läuft als unabhängiger Sub-Zustand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Drawing,
    Panning,
}

/// Hover-Dwell-Zustand über einem UI-Control.
#[derive(Debug, Default)]
struct HoverState {
    control: Option<ControlId>,
    since: Option<Instant>,
    /// Einmal-Flag: pro Hover-Phase genau eine Auto-Aktivierung.
    /// Zurückgesetzt nur bei Control-Wechsel oder Hover-Verlust.
    activated: bool,
}

impl HoverState {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Zustandsbehafteter Dispatcher über aufeinanderfolgende Gesten-Frames.
#[derive(Debug, Default)]
pub struct InteractionController {
    mode: InteractionMode,
    hover: HoverState,
    /// Cursor-Position beim letzten Pan-Frame
    pan_last: Option<Vec2>,
    /// Letzte bekannte Cursor-Position (für das Schließen eines Drags
    /// nach Handverlust)
    last_cursor: Option<Vec2>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Ob eine kontinuierliche Feedback-Operation läuft (dann rendert
    /// der Hauptloop jeden Tick).
    pub fn is_continuous(&self) -> bool {
        self.mode != InteractionMode::Idle
    }

    /// Hover-Fortschritt für die Render-Anzeige: ab `hover_progress_ms`
    /// ein Wert in (0,1], bei 1.0 steht die Auto-Aktivierung an.
    pub fn hover_progress(
        &self,
        now: Instant,
        options: &EditorOptions,
    ) -> Option<(ControlId, f32)> {
        let control = self.hover.control?;
        let since = self.hover.since?;
        let elapsed = now.duration_since(since).as_millis() as u64;
        if elapsed < options.hover_progress_ms {
            return None;
        }
        let span = options
            .hover_activate_ms
            .saturating_sub(options.hover_progress_ms)
            .max(1);
        let progress = (elapsed - options.hover_progress_ms) as f32 / span as f32;
        Some((control, progress.min(1.0)))
    }

    /// Verarbeitet das Gesten-Ergebnis eines Frames zu Intents.
    pub fn process(
        &mut self,
        gesture: Option<&Gesture>,
        controls: &[UiControl],
        options: &EditorOptions,
        now: Instant,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();

        let Some(gesture) = gesture else {
            // Handverlust ist das einzige Abbruch-Signal: offene
            // Operationen deterministisch schließen
            self.close_drawing(&mut intents);
            self.close_panning();
            self.hover.clear();
            return intents;
        };

        let cursor = gesture.cursor;

        match gesture.kind {
            GestureKind::Fist => {
                self.close_drawing(&mut intents);
                self.close_panning();
                self.hover.clear();
                intents.push(AppIntent::DeselectAllRequested);
            }
            GestureKind::Palm => {
                self.close_drawing(&mut intents);
                self.hover.clear();
                if let Some(prev) = self.pan_last {
                    let delta = cursor - prev;
                    if delta != Vec2::ZERO {
                        intents.push(AppIntent::CameraPan { delta });
                    }
                }
                self.pan_last = Some(cursor);
                self.mode = InteractionMode::Panning;
            }
            GestureKind::Point => {
                self.close_panning();
                if let Some(control) = control_under(controls, cursor) {
                    // UI-Region unterdrückt das Zeichnen
                    self.close_drawing(&mut intents);
                    self.update_hover(control, options, now, &mut intents);
                } else {
                    self.hover.clear();
                    if self.mode == InteractionMode::Drawing {
                        intents.push(AppIntent::DrawMoved { screen_pos: cursor });
                    } else {
                        self.mode = InteractionMode::Drawing;
                        intents.push(AppIntent::DrawStarted { screen_pos: cursor });
                    }
                }
            }
            GestureKind::Idle => {
                self.close_drawing(&mut intents);
                self.close_panning();
                self.hover.clear();
            }
        }

        // Ein in die Faust entlassener Zeigefinger ist kein Tap:
        // die Faust löscht die Selektion, ein Tap würde sie im selben
        // Frame wieder setzen
        if gesture.is_tap && gesture.kind != GestureKind::Fist {
            if let Some(control) = control_under(controls, cursor) {
                // Tap löst dieselbe Aktivierung aus wie der Dwell
                self.hover.activated = true;
                intents.push(control_intent(control));
            } else if self.mode != InteractionMode::Drawing {
                intents.push(AppIntent::TapAt { screen_pos: cursor });
            }
        }

        self.last_cursor = Some(cursor);
        intents
    }

    fn close_drawing(&mut self, intents: &mut Vec<AppIntent>) {
        if self.mode == InteractionMode::Drawing {
            intents.push(AppIntent::DrawEnded {
                screen_pos: self.last_cursor.unwrap_or(Vec2::ZERO),
            });
            self.mode = InteractionMode::Idle;
        }
    }

    fn close_panning(&mut self) {
        self.pan_last = None;
        if self.mode == InteractionMode::Panning {
            self.mode = InteractionMode::Idle;
        }
    }

    fn update_hover(
        &mut self,
        control: ControlId,
        options: &EditorOptions,
        now: Instant,
        intents: &mut Vec<AppIntent>,
    ) {
        if self.hover.control != Some(control) {
            // Control-Wechsel startet die Dwell-Uhr neu
            self.hover = HoverState {
                control: Some(control),
                since: Some(now),
                activated: false,
            };
            return;
        }
        let Some(since) = self.hover.since else {
            return;
        };
        if !self.hover.activated
            && now.duration_since(since) >= Duration::from_millis(options.hover_activate_ms)
        {
            self.hover.activated = true;
            intents.push(control_intent(control));
        }
    }
}

/// Oberstes Control unter dem Cursor (letztes gewinnt bei Überlappung).
fn control_under(controls: &[UiControl], cursor: Vec2) -> Option<ControlId> {
    controls
        .iter()
        .rev()
        .find(|c| c.rect.contains(cursor))
        .map(|c| c.id)
}

/// Übersetzt eine Control-Aktivierung in den zugehörigen Intent.
fn control_intent(control: ControlId) -> AppIntent {
    match control {
        ControlId::Tool(kind) => AppIntent::SetToolRequested { kind },
        ControlId::Undo => AppIntent::UndoRequested,
        ControlId::Redo => AppIntent::RedoRequested,
        ControlId::Clear => AppIntent::ClearCanvasRequested,
        ControlId::ResetView => AppIntent::ResetViewRequested,
        ControlId::ZoomIn => AppIntent::ZoomInRequested,
        ControlId::ZoomOut => AppIntent::ZoomOutRequested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(kind: GestureKind, cursor: Vec2) -> Gesture {
        Gesture {
            kind,
            raw_pos: cursor / Vec2::new(640.0, 480.0),
            cursor,
            is_pointing: kind == GestureKind::Point,
            is_open_palm: kind == GestureKind::Palm,
            is_fist: kind == GestureKind::Fist,
            is_tap: false,
            confidence: 1.0,
        }
    }

    fn toolbar() -> Vec<UiControl> {
        vec![
            UiControl {
                id: ControlId::Undo,
                rect: Bounds {
                    min: Vec2::new(0.0, 0.0),
                    size: Vec2::new(40.0, 40.0),
                },
            },
            UiControl {
                id: ControlId::Clear,
                rect: Bounds {
                    min: Vec2::new(50.0, 0.0),
                    size: Vec2::new(40.0, 40.0),
                },
            },
        ]
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn pointing_over_canvas_starts_then_continues_drawing() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        let first = ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(200.0, 200.0))),
            &toolbar(),
            &options,
            t0,
        );
        assert!(matches!(first.as_slice(), [AppIntent::DrawStarted { .. }]));
        assert_eq!(ic.mode(), InteractionMode::Drawing);

        let second = ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(210.0, 205.0))),
            &toolbar(),
            &options,
            t0 + ms(33),
        );
        assert!(matches!(second.as_slice(), [AppIntent::DrawMoved { .. }]));
    }

    #[test]
    fn hand_loss_closes_open_draw() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(200.0, 200.0))),
            &toolbar(),
            &options,
            t0,
        );
        let intents = ic.process(None, &toolbar(), &options, t0 + ms(33));
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::DrawEnded { screen_pos }] if *screen_pos == Vec2::new(200.0, 200.0)
        ));
        assert_eq!(ic.mode(), InteractionMode::Idle);
    }

    #[test]
    fn hand_loss_with_nothing_open_is_noop() {
        let mut ic = InteractionController::new();
        let intents = ic.process(None, &toolbar(), &EditorOptions::default(), Instant::now());
        assert!(intents.is_empty());
    }

    #[test]
    fn palm_pans_by_cursor_delta() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        let first = ic.process(
            Some(&gesture(GestureKind::Palm, Vec2::new(100.0, 100.0))),
            &toolbar(),
            &options,
            t0,
        );
        assert!(first.is_empty(), "Pan-Start liefert noch kein Delta");
        assert_eq!(ic.mode(), InteractionMode::Panning);

        let second = ic.process(
            Some(&gesture(GestureKind::Palm, Vec2::new(130.0, 90.0))),
            &toolbar(),
            &options,
            t0 + ms(33),
        );
        assert!(matches!(
            second.as_slice(),
            [AppIntent::CameraPan { delta }] if *delta == Vec2::new(30.0, -10.0)
        ));
    }

    #[test]
    fn palm_interrupts_open_draw_before_panning() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(200.0, 200.0))),
            &toolbar(),
            &options,
            t0,
        );
        let intents = ic.process(
            Some(&gesture(GestureKind::Palm, Vec2::new(220.0, 200.0))),
            &toolbar(),
            &options,
            t0 + ms(33),
        );
        assert!(matches!(intents.as_slice(), [AppIntent::DrawEnded { .. }]));
        assert_eq!(ic.mode(), InteractionMode::Panning);
    }

    #[test]
    fn fist_deselects_and_closes_everything() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(200.0, 200.0))),
            &toolbar(),
            &options,
            t0,
        );
        let intents = ic.process(
            Some(&gesture(GestureKind::Fist, Vec2::new(200.0, 200.0))),
            &toolbar(),
            &options,
            t0 + ms(33),
        );
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::DrawEnded { .. }, AppIntent::DeselectAllRequested]
        ));
    }

    #[test]
    fn pointing_over_control_suppresses_drawing_and_dwells() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();
        let over_undo = Vec2::new(20.0, 20.0);

        // Frame 1: Hover beginnt, keine Aktivierung
        let first = ic.process(
            Some(&gesture(GestureKind::Point, over_undo)),
            &toolbar(),
            &options,
            t0,
        );
        assert!(first.is_empty());

        // Unter der Aktivierungs-Schwelle passiert nichts
        let early = ic.process(
            Some(&gesture(GestureKind::Point, over_undo)),
            &toolbar(),
            &options,
            t0 + ms(options.hover_activate_ms - 1),
        );
        assert!(early.is_empty());

        // Ab der Schwelle genau eine Auto-Aktivierung
        let fired = ic.process(
            Some(&gesture(GestureKind::Point, over_undo)),
            &toolbar(),
            &options,
            t0 + ms(options.hover_activate_ms),
        );
        assert!(matches!(fired.as_slice(), [AppIntent::UndoRequested]));

        // Weiteres Verweilen aktiviert nicht erneut
        let again = ic.process(
            Some(&gesture(GestureKind::Point, over_undo)),
            &toolbar(),
            &options,
            t0 + ms(options.hover_activate_ms * 2),
        );
        assert!(again.is_empty(), "Einmal-Flag verhindert Doppel-Auslösung");
    }

    #[test]
    fn switching_hovered_control_restarts_dwell_clock() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(20.0, 20.0))),
            &toolbar(),
            &options,
            t0,
        );
        // Wechsel auf das zweite Control kurz vor der Schwelle
        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(70.0, 20.0))),
            &toolbar(),
            &options,
            t0 + ms(options.hover_activate_ms - 100),
        );
        // Alte Verweilzeit zählt nicht weiter
        let intents = ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(70.0, 20.0))),
            &toolbar(),
            &options,
            t0 + ms(options.hover_activate_ms + 100),
        );
        assert!(intents.is_empty());
    }

    #[test]
    fn hover_progress_is_hidden_then_grows() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(20.0, 20.0))),
            &toolbar(),
            &options,
            t0,
        );
        assert!(ic
            .hover_progress(t0 + ms(options.hover_progress_ms - 1), &options)
            .is_none());

        let (control, progress) = ic
            .hover_progress(
                t0 + ms((options.hover_progress_ms + options.hover_activate_ms) / 2),
                &options,
            )
            .expect("Fortschritt sichtbar");
        assert_eq!(control, ControlId::Undo);
        assert!(progress > 0.0 && progress < 1.0);
    }

    #[test]
    fn tap_over_control_activates_it() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        let mut g = gesture(GestureKind::Idle, Vec2::new(70.0, 20.0));
        g.is_tap = true;
        let intents = ic.process(Some(&g), &toolbar(), &options, t0);
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::ClearCanvasRequested]
        ));
    }

    #[test]
    fn tap_over_canvas_selects() {
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();

        let mut g = gesture(GestureKind::Idle, Vec2::new(300.0, 300.0));
        g.is_tap = true;
        let intents = ic.process(Some(&g), &toolbar(), &options, Instant::now());
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::TapAt { screen_pos }] if *screen_pos == Vec2::new(300.0, 300.0)
        ));
    }

    #[test]
    fn tap_released_into_fist_does_not_select() {
        // Kurzes Zeigen, dann Faust: der Recognizer meldet auf der
        // fallenden Flanke einen Tap, die Faust muss ihn schlucken —
        // nur die Deselektion darf durchgehen.
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(300.0, 300.0))),
            &toolbar(),
            &options,
            t0,
        );
        let mut release = gesture(GestureKind::Fist, Vec2::new(300.0, 300.0));
        release.is_tap = true;
        let intents = ic.process(Some(&release), &toolbar(), &options, t0 + ms(100));
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::DrawEnded { .. }, AppIntent::DeselectAllRequested]
        ));
    }

    #[test]
    fn quick_tap_after_draw_release_still_selects() {
        // Zeigen über dem Canvas startet sofort einen Draw; der
        // Release-Frame schließt ihn und erst danach greift der Tap.
        let mut ic = InteractionController::new();
        let options = EditorOptions::default();
        let t0 = Instant::now();

        ic.process(
            Some(&gesture(GestureKind::Point, Vec2::new(300.0, 300.0))),
            &toolbar(),
            &options,
            t0,
        );
        let mut release = gesture(GestureKind::Idle, Vec2::new(300.0, 300.0));
        release.is_tap = true;
        let intents = ic.process(Some(&release), &toolbar(), &options, t0 + ms(100));
        assert!(matches!(
            intents.as_slice(),
            [AppIntent::DrawEnded { .. }, AppIntent::TapAt { .. }]
        ));
    }
}
