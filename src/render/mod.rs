//! Canvas-Rendering mit egui/epaint.
//!
//! Feste Zeichenreihenfolge pro Frame: Hintergrund → Grid → Elemente
//! (Einfüge-Reihenfolge) → Tool-Vorschau → Selektions-Dekoration.
//! Der Gesten-Overlay (Cursor, Hover-Fortschritt) liegt darüber.

mod canvas_renderer;
mod overlay_renderer;

pub use canvas_renderer::CanvasRenderer;
pub use overlay_renderer::OverlayRenderer;

/// Konvertiert eine RGBA-Farbe in `Color32`, optional mit zusätzlicher
/// Deckkraft (z.B. für die Tool-Vorschau).
pub(crate) fn color32(rgba: [f32; 4], opacity: f32) -> egui::Color32 {
    let a = (rgba[3] * opacity).clamp(0.0, 1.0);
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (a * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_applies_opacity_to_alpha_only() {
        let c = color32([1.0, 0.5, 0.0, 1.0], 0.5);
        assert_eq!(c.r(), 255);
        assert_eq!(c.a(), 127);
    }

    #[test]
    fn color32_clamps_alpha() {
        let c = color32([0.0, 0.0, 0.0, 2.0], 1.0);
        assert_eq!(c.a(), 255);
    }
}
