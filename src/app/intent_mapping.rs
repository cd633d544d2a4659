//! Mapping von UI/Gesten-Intents auf mutierende App-Commands.
//!
//! Hier findet die Screen→Canvas-Umrechnung statt: Intents kommen in
//! Screen-Pixeln an (Maus wie Gesten-Cursor), Commands arbeiten in
//! Canvas-Koordinaten. Die Kamera wird dafür nur gelesen.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let to_canvas = |screen_pos| state.view.camera.screen_to_canvas(screen_pos);

    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_screen,
        }],

        AppIntent::SetToolRequested { kind } => vec![AppCommand::SetTool { kind }],
        AppIntent::SetStrokeColorRequested { color } => {
            vec![AppCommand::SetStrokeColor { color }]
        }
        AppIntent::SetFillColorRequested { color } => vec![AppCommand::SetFillColor { color }],
        AppIntent::SetStrokeWidthRequested { width } => {
            vec![AppCommand::SetStrokeWidth { width }]
        }

        AppIntent::DrawStarted { screen_pos } => vec![AppCommand::ToolStart {
            canvas_pos: to_canvas(screen_pos),
        }],
        AppIntent::DrawMoved { screen_pos } => vec![AppCommand::ToolMove {
            canvas_pos: to_canvas(screen_pos),
        }],
        AppIntent::DrawEnded { screen_pos } => vec![AppCommand::ToolEnd {
            canvas_pos: to_canvas(screen_pos),
        }],

        AppIntent::TapAt { screen_pos } => vec![AppCommand::TapSelect {
            canvas_pos: to_canvas(screen_pos),
        }],
        AppIntent::DeselectAllRequested => vec![AppCommand::DeselectAll],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::ClearCanvasRequested => vec![AppCommand::ClearCanvas],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn draw_intents_are_mapped_into_canvas_space() {
        let mut state = AppState::new();
        state.view.camera.pan = Vec2::new(100.0, 50.0);
        state.view.camera.scale = 2.0;

        let commands = map_intent_to_commands(
            &state,
            AppIntent::DrawStarted {
                screen_pos: Vec2::new(300.0, 150.0),
            },
        );

        match commands.as_slice() {
            [AppCommand::ToolStart { canvas_pos }] => {
                assert_eq!(*canvas_pos, Vec2::new(100.0, 50.0));
            }
            other => panic!("erwartet ToolStart, bekam {:?}", other),
        }
    }

    #[test]
    fn zoom_keeps_screen_focus() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::CameraZoom {
                factor: 1.5,
                focus_screen: Some(Vec2::new(10.0, 20.0)),
            },
        );
        match commands.as_slice() {
            [AppCommand::ZoomCamera { focus_screen, .. }] => {
                assert_eq!(*focus_screen, Some(Vec2::new(10.0, 20.0)));
            }
            other => panic!("erwartet ZoomCamera, bekam {:?}", other),
        }
    }
}
