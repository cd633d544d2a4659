//! Freihand-Tool: Punkt-Dezimierung beim Aufzeichnen, RDP am Commit.

use super::{DrawTool, ToolContext, ToolKind, ToolOutcome};
use crate::core::Shape;
use crate::shared::geometry;
use glam::Vec2;

/// Zeichnet einen freien Pfad aus dezimierten Cursor-Positionen.
#[derive(Debug, Default)]
pub struct FreehandTool {
    points: Vec<Vec2>,
    dragging: bool,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen Punkt nur auf wenn er weit genug vom zuletzt
    /// aufgezeichneten entfernt ist — begrenzt die Punktdichte schon
    /// während der Aufnahme.
    fn record(&mut self, pos: Vec2, min_distance: f32) {
        match self.points.last() {
            Some(last) if last.distance(pos) < min_distance => {}
            _ => self.points.push(pos),
        }
    }
}

impl DrawTool for FreehandTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Freehand
    }

    fn on_start(&mut self, pos: Vec2, _ctx: &ToolContext<'_>) -> ToolOutcome {
        self.points.clear();
        self.points.push(pos);
        self.dragging = true;
        ToolOutcome::None
    }

    fn on_move(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome {
        if self.dragging {
            self.record(pos, ctx.options.freehand_min_distance);
        }
        ToolOutcome::None
    }

    fn on_end(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome {
        if !self.dragging {
            return ToolOutcome::None;
        }
        self.record(pos, ctx.options.freehand_min_distance);
        let mut points = std::mem::take(&mut self.points);
        self.dragging = false;

        // Ab drei Punkten lohnt die Vereinfachung; ein Zwei-Punkt-Pfad
        // ist bereits minimal
        if points.len() >= 3 {
            points = geometry::simplify_polyline(&points, ctx.options.freehand_simplify_epsilon);
        }
        if points.len() >= 2 && geometry::polyline_length(&points) > 0.0 {
            ToolOutcome::Commit(Shape::Freehand { points })
        } else {
            ToolOutcome::None
        }
    }

    fn preview(&self) -> Option<Shape> {
        if self.dragging && self.points.len() >= 2 {
            Some(Shape::Freehand {
                points: self.points.clone(),
            })
        } else {
            None
        }
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn reset(&mut self) {
        self.points.clear();
        self.dragging = false;
    }
}
