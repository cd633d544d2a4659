//! 2D-Kamera für Pan und Zoom.
//!
//! Screen- und Canvas-Koordinaten hängen über eine affine Transformation
//! zusammen: `screen = canvas * scale + pan`. Beide Richtungen müssen zu
//! jedem Zeitpunkt exakte Inverse voneinander sein.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Verschiebung in Screen-Pixeln
    pub pan: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub scale: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 4.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Konvertiert Screen-Koordinaten zu Canvas-Koordinaten.
    pub fn screen_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan) / self.scale
    }

    /// Konvertiert Canvas-Koordinaten zu Screen-Koordinaten.
    pub fn canvas_to_screen(&self, canvas_pos: Vec2) -> Vec2 {
        canvas_pos * self.scale + self.pan
    }

    /// Verschiebt die Kamera um ein Screen-Pixel-Delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Zoomt relativ um `factor`, verankert am Screen-Punkt `focus_screen`.
    ///
    /// Der Canvas-Punkt unter dem Anker bleibt vor und nach dem Zoom an
    /// derselben Bildschirmposition. Gibt `false` zurück wenn der geclampte
    /// Zoom unverändert bleibt — dann darf keine Notification ausgehen.
    pub fn zoom_towards(&mut self, factor: f32, focus_screen: Vec2, min: f32, max: f32) -> bool {
        let new_scale = (self.scale * factor).clamp(min, max);
        if (new_scale - self.scale).abs() < f32::EPSILON {
            return false;
        }
        // Anker fixieren: screen = canvas*scale + pan bleibt für den
        // Canvas-Punkt unter focus_screen konstant
        let anchor_canvas = self.screen_to_canvas(focus_screen);
        self.scale = new_scale;
        self.pan = focus_screen - anchor_canvas * self.scale;
        true
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Canvas-Einheiten.
    pub fn canvas_per_pixel(&self) -> f32 {
        1.0 / self.scale
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
