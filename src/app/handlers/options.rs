//! Handler für den Options-Dialog und die Options-Persistenz.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Öffnet den Options-Dialog.
pub fn open_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Wendet geänderte Optionen sofort an und persistiert sie.
pub fn apply(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.view.show_grid = options.show_grid;
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}

/// Setzt alle Optionen auf die Standardwerte zurück und persistiert.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    apply(state, EditorOptions::default())
}
