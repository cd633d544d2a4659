//! Zentrale Konfiguration für den AirCanvas Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//!
//! Die Gesten-Schwellwerte sind empirisch kalibriert, nicht analytisch
//! hergeleitet — sie werden gegen synthetische Landmark-Fixtures getestet
//! statt neu berechnet.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 4.0;
/// Zoom-Schritt bei stufenweisem Zoom (Toolbar / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;

// ── Gesten-Erkennung ────────────────────────────────────────────────

/// Toleranz nach unten beim Fingertip-über-PIP-Test (normalisiert).
pub const FINGER_Y_TOLERANCE: f32 = 0.02;
/// Tip-zu-Wrist muss dieses Vielfache von MCP-zu-Wrist überschreiten.
pub const FINGER_LENGTH_RATIO: f32 = 0.85;
/// Daumen gilt als gestreckt ab diesem Abstand Daumenspitze↔Zeigefinger-MCP.
pub const THUMB_EXTEND_DISTANCE: f32 = 0.08;
/// Maximale Tap-Dauer in Millisekunden (strikte Obergrenze).
pub const TAP_MAX_DURATION_MS: u64 = 300;
/// Maximale Tap-Verschiebung (normalisiert, strikte Obergrenze).
pub const TAP_MAX_DISPLACEMENT: f32 = 0.1;
/// Refraktärzeit zwischen zwei akzeptierten Taps in Millisekunden.
pub const TAP_DEBOUNCE_MS: u64 = 400;
/// Fenstergröße der Cursor-Glättung beim Zeigen (linear gewichtet).
pub const POINT_SMOOTH_WINDOW: usize = 8;
/// EMA-Faktor der Cursor-Glättung beim Zeigen.
pub const POINT_SMOOTH_FACTOR: f32 = 0.5;
/// Fenstergröße der Cursor-Glättung bei offener Handfläche (quadratisch).
pub const PALM_SMOOTH_WINDOW: usize = 12;
/// EMA-Faktor bei offener Handfläche (träger als Zeigen, gegen Zitter-Pan).
pub const PALM_SMOOTH_FACTOR: f32 = 0.25;
/// Maximale Länge der Positions-Historie.
pub const POSITION_HISTORY_LEN: usize = 20;

// ── Hover-Dwell ─────────────────────────────────────────────────────

/// Ab dieser Hover-Dauer wird die Fortschritts-Anzeige eingeblendet.
pub const HOVER_PROGRESS_MS: u64 = 1000;
/// Ab dieser Hover-Dauer wird das Control genau einmal ausgelöst.
pub const HOVER_ACTIVATE_MS: u64 = 3000;

// ── Tools ───────────────────────────────────────────────────────────

/// Mindest-Kantenlänge (Canvas-Einheiten) für Rechteck/Kreis-Commit.
pub const MIN_SHAPE_SIZE: f32 = 5.0;
/// Mindest-Länge (Canvas-Einheiten) für Linie/Pfeil-Commit.
pub const MIN_LINE_LENGTH: f32 = 10.0;
/// Freihand: Mindestabstand zwischen aufgezeichneten Punkten.
pub const FREEHAND_MIN_DISTANCE: f32 = 3.0;
/// Freihand: RDP-Epsilon bei der Vereinfachung am Commit.
pub const FREEHAND_SIMPLIFY_EPSILON: f32 = 2.0;
/// Pick-Radius für Hit-Tests in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 8.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 100;

// ── Rendering ───────────────────────────────────────────────────────

/// Hintergrundfarbe des Canvas (RGBA).
pub const BACKGROUND_COLOR: [f32; 4] = [0.09, 0.09, 0.11, 1.0];
/// Farbe der Grid-Linien (RGBA).
pub const GRID_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.06];
/// Grid-Abstand in Canvas-Einheiten.
pub const GRID_SPACING: f32 = 50.0;
/// Farbe der Selektions-Dekoration (RGBA: Magenta).
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Deckkraft der Tool-Vorschau relativ zum Element-Stil.
pub const PREVIEW_OPACITY: f32 = 0.5;
/// Standard-Strichfarbe neuer Elemente (RGBA: Weiß).
pub const DEFAULT_STROKE_COLOR: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
/// Standard-Strichbreite neuer Elemente.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

// ── Gesten-Optionen (serialisierbar) ────────────────────────────────

/// Konfigurierbare Schwellwerte der Gesten-Erkennung.
/// Wird als Teil der `EditorOptions` persistent gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureOptions {
    /// Toleranz nach unten beim Fingertip-über-PIP-Test
    pub finger_y_tolerance: f32,
    /// Längenverhältnis Tip-zu-Wrist / MCP-zu-Wrist für "gestreckt"
    pub finger_length_ratio: f32,
    /// Abstand Daumenspitze↔Zeigefinger-MCP für gestreckten Daumen
    pub thumb_extend_distance: f32,
    /// Maximale Tap-Dauer in Millisekunden
    pub tap_max_duration_ms: u64,
    /// Maximale Tap-Verschiebung (normalisiert)
    pub tap_max_displacement: f32,
    /// Refraktärzeit zwischen zwei Taps in Millisekunden
    pub tap_debounce_ms: u64,
    /// Glättungsfenster beim Zeigen
    pub point_smooth_window: usize,
    /// EMA-Faktor beim Zeigen
    pub point_smooth_factor: f32,
    /// Glättungsfenster bei offener Handfläche
    pub palm_smooth_window: usize,
    /// EMA-Faktor bei offener Handfläche
    pub palm_smooth_factor: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            finger_y_tolerance: FINGER_Y_TOLERANCE,
            finger_length_ratio: FINGER_LENGTH_RATIO,
            thumb_extend_distance: THUMB_EXTEND_DISTANCE,
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            tap_max_displacement: TAP_MAX_DISPLACEMENT,
            tap_debounce_ms: TAP_DEBOUNCE_MS,
            point_smooth_window: POINT_SMOOTH_WINDOW,
            point_smooth_factor: POINT_SMOOTH_FACTOR,
            palm_smooth_window: PALM_SMOOTH_WINDOW,
            palm_smooth_factor: PALM_SMOOTH_FACTOR,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `air_canvas_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Toolbar-Buttons / Shortcuts
    pub camera_zoom_step: f32,

    // ── Gesten ──────────────────────────────────────────────────
    /// Schwellwerte der Gesten-Erkennung
    #[serde(default)]
    pub gesture: GestureOptions,

    // ── Hover-Dwell ─────────────────────────────────────────────
    /// Hover-Dauer bis zur Fortschritts-Anzeige (ms)
    pub hover_progress_ms: u64,
    /// Hover-Dauer bis zur Auslösung (ms)
    pub hover_activate_ms: u64,

    // ── Tools ───────────────────────────────────────────────────
    /// Mindest-Kantenlänge für Flächen-Shapes (Canvas-Einheiten)
    pub min_shape_size: f32,
    /// Mindest-Länge für Linie/Pfeil (Canvas-Einheiten)
    pub min_line_length: f32,
    /// Freihand: Mindestabstand zwischen aufgezeichneten Punkten
    pub freehand_min_distance: f32,
    /// Freihand: RDP-Epsilon bei der Vereinfachung
    pub freehand_simplify_epsilon: f32,
    /// Pick-Radius für Hit-Tests in Screen-Pixeln
    pub selection_pick_radius_px: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    pub history_max_depth: usize,

    // ── Rendering ───────────────────────────────────────────────
    /// Hintergrundfarbe des Canvas
    pub background_color: [f32; 4],
    /// Grid einblenden
    pub show_grid: bool,
    /// Farbe der Grid-Linien
    pub grid_color: [f32; 4],
    /// Grid-Abstand in Canvas-Einheiten
    pub grid_spacing: f32,
    /// Farbe der Selektions-Dekoration
    pub selection_color: [f32; 4],
    /// Deckkraft der Tool-Vorschau
    pub preview_opacity: f32,
    /// Standard-Strichfarbe neuer Elemente
    pub default_stroke_color: [f32; 4],
    /// Standard-Füllfarbe neuer Elemente (None = keine Füllung)
    pub default_fill_color: Option<[f32; 4]>,
    /// Standard-Strichbreite neuer Elemente
    pub default_stroke_width: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,

            gesture: GestureOptions::default(),

            hover_progress_ms: HOVER_PROGRESS_MS,
            hover_activate_ms: HOVER_ACTIVATE_MS,

            min_shape_size: MIN_SHAPE_SIZE,
            min_line_length: MIN_LINE_LENGTH,
            freehand_min_distance: FREEHAND_MIN_DISTANCE,
            freehand_simplify_epsilon: FREEHAND_SIMPLIFY_EPSILON,
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,

            history_max_depth: HISTORY_MAX_DEPTH,

            background_color: BACKGROUND_COLOR,
            show_grid: true,
            grid_color: GRID_COLOR,
            grid_spacing: GRID_SPACING,
            selection_color: SELECTION_COLOR,
            preview_opacity: PREVIEW_OPACITY,
            default_stroke_color: DEFAULT_STROKE_COLOR,
            default_fill_color: None,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("air_canvas_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("air_canvas_editor.toml")
    }

    /// Hit-Test-Toleranz in Canvas-Einheiten bei gegebenem Zoom.
    pub fn pick_tolerance(&self, scale: f32) -> f32 {
        self.selection_pick_radius_px / scale.max(f32::EPSILON)
    }
}
