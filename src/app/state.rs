//! Application State — zentrale Datenhaltung.

use super::history::Snapshot;
use super::tools::ToolManager;
use super::{CanvasEvent, CommandLog};
use crate::core::{Camera2D, Scene};
use crate::shared::{EditorOptions, EventBus};

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Grid einblenden (Arbeitskopie aus den Optionen)
    pub show_grid: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            show_grid: true,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Dialog geschlossen).
    pub fn new() -> Self {
        Self {
            status_message: None,
            show_options_dialog: false,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Canvas-Inhalt (Elemente + Selektion)
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Zeichen-Werkzeuge (genau eines aktiv)
    pub tools: ToolManager,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: super::history::EditHistory,
    /// Laufzeit-Optionen (Schwellwerte, Farben, Breiten)
    pub options: EditorOptions,
    /// Ausgehende Canvas-Notifications
    pub events: EventBus<CanvasEvent>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self::with_options(options)
    }

    /// Erstellt einen App-State mit bereits geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut view = ViewState::new();
        view.show_grid = options.show_grid;
        Self {
            scene: Scene::new(),
            view,
            ui: UiState::new(),
            tools: ToolManager::new(),
            command_log: CommandLog::new(),
            history: super::history::EditHistory::new_with_capacity(options.history_max_depth),
            options,
            events: EventBus::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Elemente zurück (für UI-Anzeige)
    pub fn element_count(&self) -> usize {
        self.scene.len()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Handlern.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Hit-Test-Toleranz in Canvas-Einheiten beim aktuellen Zoom.
    pub fn pick_tolerance(&self) -> f32 {
        self.options.pick_tolerance(self.view.camera.scale)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
