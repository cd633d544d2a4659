//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, ToolKind};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    active_tool: ToolKind,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    let (key_del_pressed, key_escape_pressed, key_plus_pressed, key_minus_pressed, key_0_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Plus),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
            )
        });

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_escape_pressed {
        if has_selection {
            events.push(AppIntent::DeselectAllRequested);
        } else if active_tool != ToolKind::Select {
            // Zurück zum Select-Tool
            events.push(AppIntent::SetToolRequested {
                kind: ToolKind::Select,
            });
        }
    }

    if key_plus_pressed && !modifiers.command {
        events.push(AppIntent::ZoomInRequested);
    }
    if key_minus_pressed && !modifiers.command {
        events.push(AppIntent::ZoomOutRequested);
    }
    if key_0_pressed && modifiers.command {
        events.push(AppIntent::ResetViewRequested);
    }

    // Tool-Wechsel über Zifferntasten 1-6
    let keys = [
        (egui::Key::Num1, ToolKind::Select),
        (egui::Key::Num2, ToolKind::Rectangle),
        (egui::Key::Num3, ToolKind::Circle),
        (egui::Key::Num4, ToolKind::Line),
        (egui::Key::Num5, ToolKind::Arrow),
        (egui::Key::Num6, ToolKind::Freehand),
    ];
    for (key, kind) in keys {
        if ui.input(|i| i.key_pressed(key)) && !modifiers.command {
            events.push(AppIntent::SetToolRequested { kind });
        }
    }

    events
}
