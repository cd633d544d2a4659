//! Handler für Tool-Wechsel und den Tool-Drag-Lifecycle.
//!
//! Tools liefern reine `ToolOutcome`-Daten; sämtliche Szenen-Mutation
//! (Selektion, Verschieben, Commit) passiert hier an einer Stelle.

use super::selection;
use crate::app::tools::{ToolContext, ToolKind, ToolOutcome};
use crate::app::{AppState, CanvasEvent};
use crate::core::{Element, Style};
use glam::Vec2;

/// Wechselt das aktive Werkzeug. Ein laufender Drag des alten Tools
/// wird ohne Commit verworfen.
pub fn set_tool(state: &mut AppState, kind: ToolKind) {
    state.tools.set_active(kind);
}

/// Drag-Beginn an einer Canvas-Position.
pub fn tool_start(state: &mut AppState, canvas_pos: Vec2) {
    let outcome = run_active_tool(state, canvas_pos, ToolPhase::Start);
    apply_outcome(state, outcome);
}

/// Drag-Update.
pub fn tool_move(state: &mut AppState, canvas_pos: Vec2) {
    let outcome = run_active_tool(state, canvas_pos, ToolPhase::Move);
    apply_outcome(state, outcome);
}

/// Drag-Ende (Commit oder Verwerfen entscheidet das Tool).
pub fn tool_end(state: &mut AppState, canvas_pos: Vec2) {
    let outcome = run_active_tool(state, canvas_pos, ToolPhase::End);
    apply_outcome(state, outcome);
}

enum ToolPhase {
    Start,
    Move,
    End,
}

fn run_active_tool(state: &mut AppState, pos: Vec2, phase: ToolPhase) -> ToolOutcome {
    let pick_tolerance = state.pick_tolerance();
    let ctx = ToolContext {
        scene: &state.scene,
        options: &state.options,
        pick_tolerance,
    };
    let tool = state.tools.active_tool_mut();
    match phase {
        ToolPhase::Start => tool.on_start(pos, &ctx),
        ToolPhase::Move => tool.on_move(pos, &ctx),
        ToolPhase::End => tool.on_end(pos, &ctx),
    }
}

fn apply_outcome(state: &mut AppState, outcome: ToolOutcome) {
    match outcome {
        ToolOutcome::None => {}
        ToolOutcome::Select(target) => selection::apply_selection(state, target),
        ToolOutcome::MoveSelected { delta, first } => {
            let Some(id) = state.scene.selected_id() else {
                return;
            };
            if state.scene.element(id).is_some_and(|e| e.locked) {
                return;
            }
            // Ein Snapshot pro Drag, nicht pro Frame
            if first {
                state.record_undo_snapshot();
            }
            if let Some(element) = state.scene.element_mut(id) {
                element.translate(delta);
            }
        }
        ToolOutcome::Commit(shape) => {
            state.record_undo_snapshot();
            let id = state.scene.alloc_id();
            let element = Element {
                id,
                shape,
                style: Style {
                    stroke_color: state.options.default_stroke_color,
                    fill_color: state.options.default_fill_color,
                    stroke_width: state.options.default_stroke_width,
                    opacity: 1.0,
                },
                locked: false,
            };
            state.scene.add_element(element);
            state.events.publish(&CanvasEvent::ElementAdded { id });
        }
    }
}
