//! UI-Komponenten: Toolbar, Status-Bar, Options-Dialog, Input-Handling.
//!
//! Alle Komponenten geben `AppIntent`s zurück statt direkt zu mutieren.
//! Die Toolbar liefert zusätzlich die Control-Rechtecke für die
//! Gesten-Steuerung (Hover-Dwell).

pub mod input;
mod keyboard;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
