//! AppIntent-, AppCommand- und CanvasEvent-Typen für den Datenfluss.
//!
//! Intents sind Eingaben aus UI, Maus oder Gesten-Pipeline in
//! Screen-Koordinaten. Commands sind die daraus abgeleiteten
//! mutierenden Schritte in Canvas-Koordinaten. CanvasEvents gehen an
//! Abonnenten hinaus, nachdem eine Mutation stattgefunden hat.

use super::tools::ToolKind;
use crate::core::ElementId;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Intents sind Eingaben aus UI/Gesten ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Screen-Pixel)
    CameraPan { delta: Vec2 },
    /// Kamera zoomen (optional auf einen Screen-Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_screen: Option<Vec2>,
    },

    /// Zeichen-Werkzeug wechseln
    SetToolRequested { kind: ToolKind },
    /// Strichfarbe für neue Elemente setzen
    SetStrokeColorRequested { color: [f32; 4] },
    /// Füllfarbe für neue Elemente setzen (None = keine Füllung)
    SetFillColorRequested { color: Option<[f32; 4]> },
    /// Strichbreite für neue Elemente setzen
    SetStrokeWidthRequested { width: f32 },

    /// Zeichen-Lifecycle Start (Screen-Position)
    DrawStarted { screen_pos: Vec2 },
    /// Zeichen-Lifecycle Update
    DrawMoved { screen_pos: Vec2 },
    /// Zeichen-Lifecycle Ende
    DrawEnded { screen_pos: Vec2 },

    /// Tap auf den Canvas: Element selektieren oder Selektion aufheben
    TapAt { screen_pos: Vec2 },
    /// Selektion aufheben (Faust-Geste, Escape)
    DeselectAllRequested,
    /// Selektiertes Element löschen
    DeleteSelectedRequested,
    /// Canvas vollständig leeren
    ClearCanvasRequested,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Kamera auf Standard zurücksetzen
    ResetView,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben (Screen-Pixel)
    PanCamera { delta: Vec2 },
    /// Kamera zoomen (optional auf Screen-Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_screen: Option<Vec2>,
    },

    /// Zeichen-Werkzeug wechseln
    SetTool { kind: ToolKind },
    /// Strichfarbe setzen
    SetStrokeColor { color: [f32; 4] },
    /// Füllfarbe setzen
    SetFillColor { color: Option<[f32; 4]> },
    /// Strichbreite setzen
    SetStrokeWidth { width: f32 },

    /// Aktives Tool: Drag starten (Canvas-Position)
    ToolStart { canvas_pos: Vec2 },
    /// Aktives Tool: Drag-Position aktualisieren
    ToolMove { canvas_pos: Vec2 },
    /// Aktives Tool: Drag beenden (Commit oder Verwerfen)
    ToolEnd { canvas_pos: Vec2 },

    /// Hit-Test-Selektion an Canvas-Position (Treffer selektiert,
    /// Fehlschlag hebt die Selektion auf)
    TapSelect { canvas_pos: Vec2 },
    /// Selektion aufheben
    DeselectAll,
    /// Selektiertes Element löschen
    DeleteSelected,
    /// Canvas vollständig leeren
    ClearCanvas,

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

/// Ausgehende Notifications nach erfolgten Mutationen.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Kamera wurde verschoben (Screen-Pixel-Delta)
    Pan { delta: Vec2 },
    /// Zoom hat sich geändert (neuer absoluter Faktor)
    Zoom { scale: f32 },
    /// Element wurde der Szene hinzugefügt
    ElementAdded { id: ElementId },
    /// Element wurde aus der Szene entfernt
    ElementRemoved { id: ElementId },
    /// Selektion hat sich geändert
    SelectionChanged { selected: Option<ElementId> },
    /// Undo/Redo-Verfügbarkeit hat sich geändert
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// Canvas wurde geleert
    Cleared,
}
