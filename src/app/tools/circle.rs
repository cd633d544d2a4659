//! Kreis-Tool: Ellipse, eingeschrieben in die aufgezogene Box.

use super::{DrawTool, ToolContext, ToolKind, ToolOutcome};
use crate::core::Shape;
use crate::shared::Bounds;
use glam::Vec2;

/// Zieht eine Ellipse in der Bounding-Box zwischen Anker und Cursor auf.
#[derive(Debug, Default)]
pub struct CircleTool {
    anchor: Option<Vec2>,
    current: Vec2,
}

impl CircleTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn shape_from_drag(&self) -> Option<Shape> {
        self.anchor.map(|anchor| {
            let b = Bounds::from_corners(anchor, self.current);
            Shape::Circle {
                center: b.center(),
                radius: b.size * 0.5,
            }
        })
    }
}

impl DrawTool for CircleTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Circle
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
        let anchor = self.anchor;
        let shape = self.shape_from_drag();
        self.reset();
        match (anchor, shape) {
            // Beide Achsen müssen die Mindestgröße überschreiten,
            // sonst entstehen degenerierte Strich-Ellipsen
            (Some(anchor), Some(shape))
                if Bounds::from_corners(anchor, pos).size.min_element()
                    > ctx.options.min_shape_size =>
            {
                ToolOutcome::Commit(shape)
            }
            _ => ToolOutcome::None,
        }
    }

    fn preview(&self) -> Option<Shape> {
        self.shape_from_drag()
    }

    fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.current = Vec2::ZERO;
    }
}
