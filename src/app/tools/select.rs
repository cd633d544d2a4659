//! Selektions-Tool: Hit-Test beim Start, Verschieben per Drag.

use super::{DrawTool, ToolContext, ToolKind, ToolOutcome};
use crate::core::{ElementId, Shape};
use glam::Vec2;

/// Selektiert das oberste Element unter dem Anker und verschiebt es
/// während des Drags. Der Undo-Snapshot fällt einmal pro Drag an
/// (beim ersten Delta), nicht pro Frame.
#[derive(Debug, Default)]
pub struct SelectTool {
    drag_id: Option<ElementId>,
    last_pos: Vec2,
    moved: bool,
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawTool for SelectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn on_start(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome {
        let hit = ctx.scene.element_at(pos, ctx.pick_tolerance);
        self.drag_id = hit;
        self.last_pos = pos;
        self.moved = false;
        ToolOutcome::Select(hit)
    }

    fn on_move(&mut self, pos: Vec2, _ctx: &ToolContext<'_>) -> ToolOutcome {
        if self.drag_id.is_none() {
            return ToolOutcome::None;
        }
        let delta = pos - self.last_pos;
        if delta == Vec2::ZERO {
            return ToolOutcome::None;
        }
        self.last_pos = pos;
        let first = !self.moved;
        self.moved = true;
        ToolOutcome::MoveSelected { delta, first }
    }

    fn on_end(&mut self, _pos: Vec2, _ctx: &ToolContext<'_>) -> ToolOutcome {
        self.reset();
        ToolOutcome::None
    }

    fn preview(&self) -> Option<Shape> {
        None
    }

    fn is_dragging(&self) -> bool {
        self.drag_id.is_some()
    }

    fn reset(&mut self) {
        self.drag_id = None;
        self.last_pos = Vec2::ZERO;
        self.moved = false;
    }
}
