//! Application-Schicht: Intent/Command-Fluss, Tools, Historie.
//!
//! Eingaben (Maus wie Gesten) werden zu `AppIntent`s, diese zu
//! `AppCommand`s, die zentral über den `AppController` ausgeführt
//! werden. Nach Mutationen gehen `CanvasEvent`s an Abonnenten hinaus.

/// Command-Log für Diagnose.
pub mod command_log;
/// Zentrale Intent/Command-Verarbeitung.
pub mod controller;
/// Intent-, Command- und Event-Typen.
pub mod events;
/// Feature-Handler (Mutationslogik).
pub mod handlers;
/// Snapshot-basierte Undo/Redo-Historie.
pub mod history;
/// Intent→Command-Mapping inkl. Screen→Canvas-Umrechnung.
pub mod intent_mapping;
/// Gesten-zu-Tool-Dispatcher mit Hover-Dwell.
pub mod interaction;
/// Zentrale Datenhaltung.
pub mod state;
/// Zeichen-Werkzeuge.
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, CanvasEvent};
pub use history::EditHistory;
pub use interaction::{ControlId, InteractionController, InteractionMode, UiControl};
pub use state::{AppState, UiState, ViewState};
pub use tools::{DrawTool, ToolKind, ToolManager, ToolOutcome};
