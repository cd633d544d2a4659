//! Feature-Handler für die zentrale Command-Ausführung.
//!
//! Jeder Handler mutiert den `AppState` und publiziert die passenden
//! `CanvasEvent`s. Fehlerfälle (unbekannte Id, leere Historie) sind
//! durchgehend No-ops.

/// Canvas leeren, Stil-Defaults setzen.
pub mod editing;
/// Undo/Redo über Snapshots.
pub mod history;
/// Options-Dialog und Options-Persistenz.
pub mod options;
/// Tap-Selektion, Deselektion, Löschen.
pub mod selection;
/// Tool-Wechsel und Tool-Drag-Lifecycle.
pub mod tools;
/// Kamera und Viewport.
pub mod view;
