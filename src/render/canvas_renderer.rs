//! Zeichnet Szene, Tool-Vorschau und Selektion auf einen egui-Painter.

use crate::app::AppState;
use crate::core::{Camera2D, Element, Shape, Style};
use crate::shared::EditorOptions;
use egui::epaint;
use glam::Vec2;

use super::color32;

/// Stateless-Renderer für den Canvas-Inhalt.
///
/// Alle Koordinaten laufen durch `Camera2D::canvas_to_screen`; der Painter
/// bekommt ausschließlich Fenster-Koordinaten.
#[derive(Default)]
pub struct CanvasRenderer;

impl CanvasRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Rendert einen kompletten Frame in fester Reihenfolge.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
        let camera = &state.view.camera;
        let options = &state.options;

        // 1. Hintergrund
        painter.rect_filled(rect, 0.0, color32(options.background_color, 1.0));

        // 2. Grid
        if state.view.show_grid {
            self.paint_grid(painter, rect, camera, options);
        }

        // 3. Elemente in Einfüge-Reihenfolge (ältestes zuunterst)
        for element in state.scene.elements() {
            self.paint_shape(painter, camera, &element.shape, &element.style, 1.0);
        }

        // 4. Tool-Vorschau (halbtransparent über den Elementen)
        if let Some(preview) = state.tools.active_tool().preview() {
            let style = Style {
                stroke_color: options.default_stroke_color,
                fill_color: options.default_fill_color,
                stroke_width: options.default_stroke_width,
                opacity: 1.0,
            };
            self.paint_shape(painter, camera, &preview, &style, options.preview_opacity);
        }

        // 5. Selektions-Dekoration zuoberst
        if let Some(selected) = state.scene.selected_element() {
            self.paint_selection(painter, camera, selected, options);
        }
    }

    fn paint_grid(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        camera: &Camera2D,
        options: &EditorOptions,
    ) {
        let spacing = options.grid_spacing;
        if spacing <= 0.0 {
            return;
        }
        let stroke = egui::Stroke::new(1.0, color32(options.grid_color, 1.0));

        // Sichtbarer Canvas-Ausschnitt
        let top_left = camera.screen_to_canvas(Vec2::new(rect.min.x, rect.min.y));
        let bottom_right = camera.screen_to_canvas(Vec2::new(rect.max.x, rect.max.y));

        let mut x = (top_left.x / spacing).floor() * spacing;
        while x <= bottom_right.x {
            let sx = camera.canvas_to_screen(Vec2::new(x, 0.0)).x;
            painter.line_segment(
                [egui::pos2(sx, rect.min.y), egui::pos2(sx, rect.max.y)],
                stroke,
            );
            x += spacing;
        }

        let mut y = (top_left.y / spacing).floor() * spacing;
        while y <= bottom_right.y {
            let sy = camera.canvas_to_screen(Vec2::new(0.0, y)).y;
            painter.line_segment(
                [egui::pos2(rect.min.x, sy), egui::pos2(rect.max.x, sy)],
                stroke,
            );
            y += spacing;
        }
    }

    fn paint_shape(
        &self,
        painter: &egui::Painter,
        camera: &Camera2D,
        shape: &Shape,
        style: &Style,
        extra_opacity: f32,
    ) {
        let opacity = style.opacity * extra_opacity;
        let stroke = egui::Stroke::new(
            style.stroke_width * camera.scale,
            color32(style.stroke_color, opacity),
        );
        let fill = style
            .fill_color
            .map(|c| color32(c, opacity))
            .unwrap_or(egui::Color32::TRANSPARENT);

        match shape {
            Shape::Rectangle {
                min,
                size,
                corner_radius,
            } => {
                let rect = egui::Rect::from_min_size(
                    to_pos2(camera, *min),
                    egui::vec2(size.x * camera.scale, size.y * camera.scale),
                );
                let radius =
                    egui::CornerRadius::same((corner_radius * camera.scale).round() as u8);
                if style.fill_color.is_some() {
                    painter.rect_filled(rect, radius, fill);
                }
                painter.rect_stroke(rect, radius, stroke, egui::StrokeKind::Middle);
            }
            Shape::Circle { center, radius } => {
                painter.add(epaint::EllipseShape {
                    center: to_pos2(camera, *center),
                    radius: egui::vec2(radius.x * camera.scale, radius.y * camera.scale),
                    fill,
                    stroke,
                });
            }
            Shape::Line { start, end } => {
                painter.line_segment([to_pos2(camera, *start), to_pos2(camera, *end)], stroke);
            }
            Shape::Arrow {
                start,
                end,
                head_length,
                head_angle,
            } => {
                let a = to_pos2(camera, *start);
                let b = to_pos2(camera, *end);
                painter.line_segment([a, b], stroke);

                // Pfeilspitze: zwei Schenkel gegen die Linienrichtung
                let dir = *start - *end;
                if dir.length_squared() > f32::EPSILON {
                    let dir = dir.normalize() * *head_length;
                    let left = Vec2::from_angle(*head_angle).rotate(dir);
                    let right = Vec2::from_angle(-*head_angle).rotate(dir);
                    painter.line_segment([b, to_pos2(camera, *end + left)], stroke);
                    painter.line_segment([b, to_pos2(camera, *end + right)], stroke);
                }
            }
            Shape::Freehand { points } => {
                if points.len() < 2 {
                    return;
                }
                let screen_points: Vec<egui::Pos2> =
                    points.iter().map(|p| to_pos2(camera, *p)).collect();
                painter.add(epaint::PathShape::line(screen_points, stroke));
            }
        }
    }

    fn paint_selection(
        &self,
        painter: &egui::Painter,
        camera: &Camera2D,
        element: &Element,
        options: &EditorOptions,
    ) {
        // Rahmen leicht außerhalb der Element-Bounds, Abstand zoom-unabhängig
        let bounds = element.bounds().expanded(4.0 / camera.scale.max(f32::EPSILON));
        let rect = egui::Rect::from_min_max(
            to_pos2(camera, bounds.min),
            to_pos2(camera, bounds.max()),
        );
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.5, color32(options.selection_color, 1.0)),
            egui::StrokeKind::Outside,
        );
    }
}

fn to_pos2(camera: &Camera2D, p: Vec2) -> egui::Pos2 {
    let s = camera.canvas_to_screen(p);
    egui::pos2(s.x, s.y)
}
