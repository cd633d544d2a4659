//! Trait-basiertes Zeichen-Tool-System.
//!
//! Jedes Werkzeug implementiert den `DrawTool`-Trait und wird beim
//! `ToolManager` registriert. Tools erzeugen reine Daten
//! (`ToolOutcome`), die Mutation erfolgt zentral im Tool-Handler.
//! Genau ein Tool ist aktiv; beim Wechsel wird das alte Tool
//! zurückgesetzt, damit kein Preview-Zustand leckt.

/// Kreis/Ellipse-Tool (in die Drag-Box eingeschrieben).
pub mod circle;
/// Freihand-Tool mit Punkt-Dezimierung und RDP-Vereinfachung.
pub mod freehand;
/// Linien- und Pfeil-Tool (Anker → Endpunkt).
pub mod line;
/// Rechteck-Tool (Anker → Bounding-Box).
pub mod rectangle;
/// Selektions- und Verschiebe-Tool.
pub mod select;

use crate::core::{ElementId, Scene, Shape};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Identität eines Zeichen-Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    /// Standard: Elemente selektieren und verschieben
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
    Arrow,
    Freehand,
}

impl ToolKind {
    /// Anzeigename für Toolbar und Statuszeile.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Auswählen",
            ToolKind::Rectangle => "Rechteck",
            ToolKind::Circle => "Kreis",
            ToolKind::Line => "Linie",
            ToolKind::Arrow => "Pfeil",
            ToolKind::Freehand => "Freihand",
        }
    }

    /// Toolbar-Icon (Unicode, kein Asset nötig).
    pub fn icon(&self) -> &'static str {
        match self {
            ToolKind::Select => "⬉",
            ToolKind::Rectangle => "▭",
            ToolKind::Circle => "◯",
            ToolKind::Line => "╱",
            ToolKind::Arrow => "➚",
            ToolKind::Freehand => "✎",
        }
    }

    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub fn all() -> [ToolKind; 6] {
        [
            ToolKind::Select,
            ToolKind::Rectangle,
            ToolKind::Circle,
            ToolKind::Line,
            ToolKind::Arrow,
            ToolKind::Freehand,
        ]
    }
}

/// Read-only Kontext für Tool-Aufrufe.
pub struct ToolContext<'a> {
    /// Aktueller Szenen-Inhalt (für Hit-Tests)
    pub scene: &'a Scene,
    /// Laufzeit-Optionen (Commit-Schwellen, Dezimierung)
    pub options: &'a EditorOptions,
    /// Hit-Test-Toleranz in Canvas-Einheiten beim aktuellen Zoom
    pub pick_tolerance: f32,
}

/// Ergebnis eines Tool-Aufrufs — reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// Nichts zu mutieren
    None,
    /// Selektion setzen bzw. aufheben (None = Klick ins Leere)
    Select(Option<ElementId>),
    /// Selektiertes Element verschieben. `first` markiert das erste
    /// Delta eines Drags — dort wird der eine Undo-Snapshot fällig.
    MoveSelected { delta: Vec2, first: bool },
    /// Fertige Geometrie in die Szene übernehmen
    Commit(Shape),
}

/// Gemeinsamer Lebenszyklus aller Zeichen-Werkzeuge.
///
/// `reset` muss jeglichen Drag-/Preview-Zustand verwerfen — ein nach
/// der Deaktivierung weiterlebendes Preview ist ein Defekt.
pub trait DrawTool {
    fn kind(&self) -> ToolKind;

    /// Drag-Beginn an einer Canvas-Position.
    fn on_start(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome;

    /// Drag-Update.
    fn on_move(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome;

    /// Drag-Ende. Degenerierte Geometrie wird hier verworfen, nicht
    /// erst nach dem Einfügen gefiltert.
    fn on_end(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome;

    /// Live-Vorschau der in Arbeit befindlichen Geometrie.
    fn preview(&self) -> Option<Shape>;

    /// Ob gerade ein Drag läuft (steuert das kontinuierliche Rendern).
    fn is_dragging(&self) -> bool;

    /// Verwirft jeglichen transienten Zustand.
    fn reset(&mut self);
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet die registrierten Zeichen-Tools und das aktive Werkzeug.
pub struct ToolManager {
    tools: Vec<Box<dyn DrawTool>>,
    active: ToolKind,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen ToolManager mit allen Standard-Tools,
    /// Select-Tool aktiv.
    pub fn new() -> Self {
        let tools: Vec<Box<dyn DrawTool>> = vec![
            Box::new(select::SelectTool::new()),
            Box::new(rectangle::RectangleTool::new()),
            Box::new(circle::CircleTool::new()),
            Box::new(line::LineTool::new()),
            Box::new(line::LineTool::new_arrow()),
            Box::new(freehand::FreehandTool::new()),
        ];
        Self {
            tools,
            active: ToolKind::Select,
        }
    }

    /// Aktiviert ein Werkzeug. Das bisherige Tool wird zurückgesetzt,
    /// ein laufender Drag damit ohne Commit verworfen.
    pub fn set_active(&mut self, kind: ToolKind) {
        if kind != self.active {
            if let Some(old) = self.tool_mut(self.active) {
                old.reset();
            }
            self.active = kind;
        }
    }

    pub fn active_kind(&self) -> ToolKind {
        self.active
    }

    /// Referenz auf das aktive Tool.
    pub fn active_tool(&self) -> &dyn DrawTool {
        self.tool(self.active)
            .unwrap_or_else(|| unreachable!("alle ToolKinds sind registriert"))
    }

    /// Mutable Referenz auf das aktive Tool.
    pub fn active_tool_mut(&mut self) -> &mut dyn DrawTool {
        let kind = self.active;
        let tool = self.tools.iter_mut().find(|t| t.kind() == kind);
        match tool {
            Some(t) => t.as_mut(),
            None => unreachable!("alle ToolKinds sind registriert"),
        }
    }

    fn tool(&self, kind: ToolKind) -> Option<&dyn DrawTool> {
        self.tools
            .iter()
            .find(|t| t.kind() == kind)
            .map(|t| t.as_ref())
    }

    fn tool_mut(&mut self, kind: ToolKind) -> Option<&mut Box<dyn DrawTool>> {
        self.tools.iter_mut().find(|t| t.kind() == kind)
    }

    /// Setzt alle Tools zurück (z.B. bei Clear/Undo).
    pub fn reset(&mut self) {
        for tool in &mut self.tools {
            tool.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scene;

    fn ctx<'a>(scene: &'a Scene, options: &'a EditorOptions) -> ToolContext<'a> {
        ToolContext {
            scene,
            options,
            pick_tolerance: 8.0,
        }
    }

    #[test]
    fn switching_tools_discards_in_progress_drag() {
        let mut manager = ToolManager::new();
        let scene = Scene::new();
        let options = EditorOptions::default();

        manager.set_active(ToolKind::Rectangle);
        manager
            .active_tool_mut()
            .on_start(Vec2::new(0.0, 0.0), &ctx(&scene, &options));
        manager
            .active_tool_mut()
            .on_move(Vec2::new(50.0, 50.0), &ctx(&scene, &options));
        assert!(manager.active_tool().preview().is_some());

        manager.set_active(ToolKind::Circle);
        manager.set_active(ToolKind::Rectangle);
        assert!(
            manager.active_tool().preview().is_none(),
            "Tool-Wechsel muss das Preview verwerfen"
        );
        assert!(!manager.active_tool().is_dragging());
    }

    #[test]
    fn default_tool_is_select() {
        let manager = ToolManager::new();
        assert_eq!(manager.active_kind(), ToolKind::Select);
    }

    #[test]
    fn every_kind_has_a_registered_tool() {
        let mut manager = ToolManager::new();
        for kind in ToolKind::all() {
            manager.set_active(kind);
            assert_eq!(manager.active_tool().kind(), kind);
        }
    }
}
