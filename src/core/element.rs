//! Zeichen-Elemente als getaggte Summe mit festem Fähigkeiten-Satz.
//!
//! Statt einer Klassenhierarchie gibt es einen `Shape`-Enum; Dispatch
//! läuft über `match` an genau einer Stelle pro Fähigkeit (Bounds,
//! Hit-Test, Translate). Serialisierung per serde-Tag `type`.

use crate::shared::geometry::{self, Bounds};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stabile Element-Identität innerhalb einer Szene.
pub type ElementId = u64;

/// Darstellungs-Stil eines Elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Strichfarbe (RGBA)
    pub stroke_color: [f32; 4],
    /// Füllfarbe (None = keine Füllung)
    pub fill_color: Option<[f32; 4]>,
    /// Strichbreite in Canvas-Einheiten
    pub stroke_width: f32,
    /// Gesamt-Deckkraft (0.0–1.0)
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: crate::shared::options::DEFAULT_STROKE_COLOR,
            fill_color: None,
            stroke_width: crate::shared::options::DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
        }
    }
}

/// Geometrie eines Elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Achsenparalleles Rechteck
    Rectangle {
        /// Linke obere Ecke
        min: Vec2,
        /// Breite/Höhe
        size: Vec2,
        /// Ecken-Radius (0 = scharfe Ecken)
        corner_radius: f32,
    },
    /// Ellipse, eingeschrieben in die Drag-Bounding-Box
    Circle {
        /// Mittelpunkt
        center: Vec2,
        /// Radius pro Achse
        radius: Vec2,
    },
    /// Strecke zwischen zwei Punkten
    Line {
        start: Vec2,
        end: Vec2,
    },
    /// Strecke mit Pfeilspitze am Endpunkt
    Arrow {
        start: Vec2,
        end: Vec2,
        /// Länge der Pfeilspitzen-Schenkel
        head_length: f32,
        /// Öffnungswinkel der Pfeilspitze (Radiant)
        head_angle: f32,
    },
    /// Freihand-Pfad (geordnete Punktliste)
    Freehand {
        points: Vec<Vec2>,
    },
}

/// Ein Zeichen-Element: Identität, Geometrie, Stil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stabile Id (bleibt über Serialisieren/Laden erhalten)
    pub id: ElementId,
    /// Geometrie
    pub shape: Shape,
    /// Stil
    pub style: Style,
    /// Gegen Verschieben gesperrt
    #[serde(default)]
    pub locked: bool,
}

impl Element {
    /// Erstellt ein Element mit gegebener Id und Standard-Stil.
    pub fn new(id: ElementId, shape: Shape) -> Self {
        Self {
            id,
            shape,
            style: Style::default(),
            locked: false,
        }
    }

    /// Bounding-Box des Elements in Canvas-Koordinaten.
    pub fn bounds(&self) -> Bounds {
        match &self.shape {
            Shape::Rectangle { min, size, .. } => Bounds {
                min: *min,
                size: *size,
            },
            Shape::Circle { center, radius } => Bounds {
                min: *center - *radius,
                size: *radius * 2.0,
            },
            Shape::Line { start, end } | Shape::Arrow { start, end, .. } => {
                Bounds::from_corners(*start, *end)
            }
            Shape::Freehand { points } => Bounds::from_points(points),
        }
    }

    /// Prüft ob `pos` das Element trifft (Toleranz in Canvas-Einheiten).
    ///
    /// Gefüllte Shapes treffen auf der gesamten Fläche, ungefüllte nur
    /// entlang des Strichs.
    pub fn hit_test(&self, pos: Vec2, tolerance: f32) -> bool {
        let stroke_reach = tolerance + self.style.stroke_width * 0.5;
        match &self.shape {
            Shape::Rectangle { min, size, .. } => {
                let bounds = Bounds {
                    min: *min,
                    size: *size,
                };
                if self.style.fill_color.is_some() {
                    return bounds.expanded(tolerance).contains(pos);
                }
                let max = bounds.max();
                let corners = [
                    *min,
                    Vec2::new(max.x, min.y),
                    max,
                    Vec2::new(min.x, max.y),
                ];
                (0..4).any(|i| {
                    geometry::point_segment_distance(pos, corners[i], corners[(i + 1) % 4])
                        <= stroke_reach
                })
            }
            Shape::Circle { center, radius } => {
                let r = radius.max(Vec2::splat(f32::EPSILON));
                // Normalisierter Ellipsen-Abstand: 1.0 = auf dem Rand
                let d = ((pos - *center) / r).length();
                let tol_norm = stroke_reach / r.min_element().max(f32::EPSILON);
                if self.style.fill_color.is_some() {
                    d <= 1.0 + tol_norm
                } else {
                    (d - 1.0).abs() <= tol_norm
                }
            }
            Shape::Line { start, end } | Shape::Arrow { start, end, .. } => {
                geometry::point_segment_distance(pos, *start, *end) <= stroke_reach
            }
            Shape::Freehand { points } => {
                if points.len() < 2 {
                    return points
                        .first()
                        .is_some_and(|p| p.distance(pos) <= stroke_reach);
                }
                points
                    .windows(2)
                    .any(|w| geometry::point_segment_distance(pos, w[0], w[1]) <= stroke_reach)
            }
        }
    }

    /// Verschiebt das Element um ein Canvas-Delta. Gesperrte Elemente
    /// bleiben unverändert.
    pub fn translate(&mut self, delta: Vec2) {
        if self.locked {
            return;
        }
        match &mut self.shape {
            Shape::Rectangle { min, .. } => *min += delta,
            Shape::Circle { center, .. } => *center += delta,
            Shape::Line { start, end } | Shape::Arrow { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            Shape::Freehand { points } => {
                for p in points.iter_mut() {
                    *p += delta;
                }
            }
        }
    }

    /// Erstellt eine Kopie unter neuer Id (einziger Pfad der eine Id
    /// regeneriert — normales Laden behält Ids bei).
    pub fn clone_with_new_id(&self, id: ElementId) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_elements() -> Vec<Element> {
        vec![
            Element::new(
                1,
                Shape::Rectangle {
                    min: Vec2::new(10.0, 20.0),
                    size: Vec2::new(30.0, 40.0),
                    corner_radius: 4.0,
                },
            ),
            Element::new(
                2,
                Shape::Circle {
                    center: Vec2::new(50.0, 50.0),
                    radius: Vec2::new(20.0, 10.0),
                },
            ),
            Element::new(
                3,
                Shape::Line {
                    start: Vec2::new(0.0, 0.0),
                    end: Vec2::new(100.0, 0.0),
                },
            ),
            Element::new(
                4,
                Shape::Arrow {
                    start: Vec2::new(0.0, 0.0),
                    end: Vec2::new(0.0, 80.0),
                    head_length: 12.0,
                    head_angle: std::f32::consts::FRAC_PI_6,
                },
            ),
            Element::new(
                5,
                Shape::Freehand {
                    points: vec![
                        Vec2::new(0.0, 0.0),
                        Vec2::new(10.0, 5.0),
                        Vec2::new(20.0, 0.0),
                    ],
                },
            ),
        ]
    }

    #[test]
    fn serde_roundtrip_preserves_geometry_style_and_id() {
        for element in sample_elements() {
            let json = serde_json::to_string(&element).expect("Element serialisierbar");
            let back: Element = serde_json::from_str(&json).expect("Element deserialisierbar");
            assert_eq!(back, element);
        }
    }

    #[test]
    fn clone_with_new_id_changes_only_id() {
        let original = &sample_elements()[0];
        let copy = original.clone_with_new_id(99);
        assert_eq!(copy.id, 99);
        assert_eq!(copy.shape, original.shape);
        assert_eq!(copy.style, original.style);
    }

    #[test]
    fn rectangle_bounds() {
        let b = sample_elements()[0].bounds();
        assert_eq!(b.min, Vec2::new(10.0, 20.0));
        assert_eq!(b.size, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn circle_bounds_span_both_radii() {
        let b = sample_elements()[1].bounds();
        assert_eq!(b.min, Vec2::new(30.0, 40.0));
        assert_eq!(b.size, Vec2::new(40.0, 20.0));
    }

    #[test]
    fn unfilled_rectangle_hits_only_edge() {
        let rect = &sample_elements()[0];
        assert!(rect.hit_test(Vec2::new(10.0, 40.0), 1.0)); // linke Kante
        assert!(!rect.hit_test(Vec2::new(25.0, 40.0), 1.0)); // Innenraum
    }

    #[test]
    fn filled_rectangle_hits_interior() {
        let mut rect = sample_elements()[0].clone();
        rect.style.fill_color = Some([1.0, 0.0, 0.0, 1.0]);
        assert!(rect.hit_test(Vec2::new(25.0, 40.0), 1.0));
    }

    #[test]
    fn line_hit_respects_tolerance() {
        let line = &sample_elements()[2];
        assert!(line.hit_test(Vec2::new(50.0, 3.0), 2.0));
        assert!(!line.hit_test(Vec2::new(50.0, 10.0), 2.0));
    }

    #[test]
    fn translate_moves_all_points() {
        let mut freehand = sample_elements()[4].clone();
        freehand.translate(Vec2::new(5.0, -2.0));
        match &freehand.shape {
            Shape::Freehand { points } => {
                assert_relative_eq!(points[0].x, 5.0);
                assert_relative_eq!(points[2].y, -2.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn locked_element_ignores_translate() {
        let mut line = sample_elements()[2].clone();
        line.locked = true;
        line.translate(Vec2::new(10.0, 10.0));
        match &line.shape {
            Shape::Line { start, .. } => assert_eq!(*start, Vec2::ZERO),
            _ => unreachable!(),
        }
    }
}
