//! Rechteck-Tool: Anker setzen, Bounding-Box aufziehen, committen.

use super::{DrawTool, ToolContext, ToolKind, ToolOutcome};
use crate::core::Shape;
use crate::shared::Bounds;
use glam::Vec2;

/// Zieht ein achsenparalleles Rechteck zwischen Anker und Cursor auf.
#[derive(Debug, Default)]
pub struct RectangleTool {
    anchor: Option<Vec2>,
    current: Vec2,
}

impl RectangleTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn drag_bounds(&self) -> Option<Bounds> {
        self.anchor
            .map(|anchor| Bounds::from_corners(anchor, self.current))
    }
}

impl DrawTool for RectangleTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Rectangle
    }

    fn on_start(&mut self, pos: Vec2, _ctx: &ToolContext<'_>) -> ToolOutcome {
        self.anchor = Some(pos);
        self.current = pos;
        ToolOutcome::None
    }

    fn on_move(&mut self, pos: Vec2, _ctx: &ToolContext<'_>) -> ToolOutcome {
        if self.anchor.is_some() {
            self.current = pos;
        }
        ToolOutcome::None
    }

    fn on_end(&mut self, pos: Vec2, ctx: &ToolContext<'_>) -> ToolOutcome {
        self.current = pos;
        let bounds = self.drag_bounds();
        self.reset();
        match bounds {
            // Beide Kanten müssen die Mindestgröße überschreiten —
            // sonst entstehen aus zittrigen Taps oder flachen Drags
            // degenerierte Sliver-Elemente
            Some(b) if b.size.min_element() > ctx.options.min_shape_size => {
                ToolOutcome::Commit(Shape::Rectangle {
                    min: b.min,
                    size: b.size,
                    corner_radius: 0.0,
                })
            }
            _ => ToolOutcome::None,
        }
    }

    fn preview(&self) -> Option<Shape> {
        self.drag_bounds().map(|b| Shape::Rectangle {
            min: b.min,
            size: b.size,
            corner_radius: 0.0,
        })
    }

    fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.current = Vec2::ZERO;
    }
}
