//! Handler für Kamera und Viewport.

use crate::app::{AppState, CanvasEvent};
use crate::core::Camera2D;
use glam::Vec2;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    let default = Camera2D::new();
    if state.view.camera == default {
        return;
    }
    let pan_delta = default.pan - state.view.camera.pan;
    let scale_changed = state.view.camera.scale != default.scale;
    state.view.camera = default;

    if pan_delta != Vec2::ZERO {
        state.events.publish(&CanvasEvent::Pan { delta: pan_delta });
    }
    if scale_changed {
        state.events.publish(&CanvasEvent::Zoom { scale: 1.0 });
    }
}

/// Zoomt stufenweise hinein (Fokus: Viewport-Mitte).
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom_towards(state, step, None);
}

/// Zoomt stufenweise heraus (Fokus: Viewport-Mitte).
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom_towards(state, 1.0 / step, None);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    if delta == Vec2::ZERO {
        return;
    }
    state.view.camera.pan_by(delta);
    state.events.publish(&CanvasEvent::Pan { delta });
}

/// Zoomt relativ, verankert am Screen-Fokuspunkt (Default: Mitte).
///
/// Bleibt der geclampte Zoom unverändert, geht keine Notification aus.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    let focus = focus_screen.unwrap_or_else(|| {
        Vec2::new(
            state.view.viewport_size[0] * 0.5,
            state.view.viewport_size[1] * 0.5,
        )
    });
    let changed = state.view.camera.zoom_towards(
        factor,
        focus,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
    if changed {
        state.events.publish(&CanvasEvent::Zoom {
            scale: state.view.camera.scale,
        });
    }
}
