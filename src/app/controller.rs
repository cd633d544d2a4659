//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState, CanvasEvent};

/// Orchestriert Intents und Commands auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Ändert sich dabei die Undo/Redo-Verfügbarkeit, geht genau eine
    /// `HistoryChanged`-Notification aus — zentral hier, damit kein
    /// Handler sie vergessen oder doppelt senden kann.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let before = (state.can_undo(), state.can_redo());

        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        let (can_undo, can_redo) = (state.can_undo(), state.can_redo());
        if before != (can_undo, can_redo) {
            state
                .events
                .publish(&CanvasEvent::HistoryChanged { can_undo, can_redo });
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            AppCommand::RequestExit => state.should_exit = true,

            // === Kamera & Viewport ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),

            // === Tools & Stil ===
            AppCommand::SetTool { kind } => handlers::tools::set_tool(state, kind),
            AppCommand::SetStrokeColor { color } => handlers::editing::set_stroke_color(state, color),
            AppCommand::SetFillColor { color } => handlers::editing::set_fill_color(state, color),
            AppCommand::SetStrokeWidth { width } => {
                handlers::editing::set_stroke_width(state, width)
            }
            AppCommand::ToolStart { canvas_pos } => handlers::tools::tool_start(state, canvas_pos),
            AppCommand::ToolMove { canvas_pos } => handlers::tools::tool_move(state, canvas_pos),
            AppCommand::ToolEnd { canvas_pos } => handlers::tools::tool_end(state, canvas_pos),

            // === Selektion & Szene ===
            AppCommand::TapSelect { canvas_pos } => {
                handlers::selection::tap_select(state, canvas_pos)
            }
            AppCommand::DeselectAll => handlers::selection::deselect_all(state),
            AppCommand::DeleteSelected => handlers::selection::delete_selected(state),
            AppCommand::ClearCanvas => handlers::editing::clear_canvas(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => handlers::options::open_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::options::close_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::ResetOptions => handlers::options::reset(state)?,
        }

        Ok(())
    }
}
