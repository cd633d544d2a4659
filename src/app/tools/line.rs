//! Linien- und Pfeil-Tool: Strecke vom Anker zum Endpunkt.
//!
//! Pfeil ist dieselbe Mechanik mit Pfeilspitze am Endpunkt — beide
//! Varianten teilen sich die Implementierung über einen Konstruktor-
//! Schalter statt zweier Typen.

use super::{DrawTool, ToolContext, ToolKind, ToolOutcome};
use crate::core::Shape;
use glam::Vec2;

/// Länge der Pfeilspitzen-Schenkel in Canvas-Einheiten.
const ARROW_HEAD_LENGTH: f32 = 14.0;
/// Öffnungswinkel der Pfeilspitze.
const ARROW_HEAD_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

/// Zieht eine Strecke (optional mit Pfeilspitze) auf.
#[derive(Debug)]
pub struct LineTool {
    kind: ToolKind,
    anchor: Option<Vec2>,
    current: Vec2,
}

impl LineTool {
    /// Linien-Variante.
    pub fn new() -> Self {
        Self {
            kind: ToolKind::Line,
            anchor: None,
            current: Vec2::ZERO,
        }
    }

    /// Pfeil-Variante.
    pub fn new_arrow() -> Self {
        Self {
            kind: ToolKind::Arrow,
            ..Self::new()
        }
    }

    fn shape_from_drag(&self) -> Option<Shape> {
        self.anchor.map(|start| match self.kind {
            ToolKind::Arrow => Shape::Arrow {
                start,
                end: self.current,
                head_length: ARROW_HEAD_LENGTH,
                head_angle: ARROW_HEAD_ANGLE,
            },
            _ => Shape::Line {
                start,
                end: self.current,
            },
        })
    }
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTool for LineTool {
    fn kind(&self) -> ToolKind {
        self.kind
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
            (Some(start), Some(shape)) if start.distance(pos) > ctx.options.min_line_length => {
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
