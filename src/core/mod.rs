//! Domänen-Modell: Kamera, Elemente, Szene.
//!
//! Diese Schicht kennt weder UI noch Gestenerkennung; sie wird
//! ausschließlich über die `app`-Schicht verändert.

/// 2D-Kamera (Pan/Zoom, Screen↔Canvas-Transformation).
pub mod camera;
/// Zeichen-Elemente als getaggte Summe.
pub mod element;
/// Element-Liste, Selektion, Snapshots, Dokument-Format.
pub mod scene;

pub use camera::Camera2D;
pub use element::{Element, ElementId, Shape, Style};
pub use scene::{CanvasDocument, Scene, SceneSnapshot, ViewTransform};
