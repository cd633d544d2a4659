//! Reine Geometrie-Funktionen für Bounds, Pfad-Glättung und -Vereinfachung.
//!
//! Layer-neutral: kann von `tools`, `handlers` und `render` importiert
//! werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// Achsenparallele Bounding-Box in Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Linke obere Ecke
    pub min: Vec2,
    /// Breite/Höhe (immer ≥ 0)
    pub size: Vec2,
}

impl Bounds {
    /// Baut eine Bounds aus zwei beliebigen Eckpunkten (Reihenfolge egal).
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        Self {
            min,
            size: a.max(b) - min,
        }
    }

    /// Baut die Bounding-Box einer Punktliste. Leere Liste → Null-Bounds.
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self {
                min: Vec2::ZERO,
                size: Vec2::ZERO,
            };
        };
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self {
            min,
            size: max - min,
        }
    }

    /// Rechte untere Ecke.
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Prüft ob ein Punkt innerhalb der Box liegt (inklusive Rand).
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }

    /// Erweitert die Box in alle Richtungen um `margin`.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }
}

/// Kürzester Abstand eines Punkts zu einer Strecke a–b.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Glättet eine Polyline durch Catmull-Rom-Interpolation.
///
/// An den Rändern werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
pub fn smooth_polyline(points: &[Vec2], samples_per_segment: usize) -> Vec<Vec2> {
    if points.len() < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let n = points.len();
    let mut result = Vec::with_capacity((n - 1) * samples_per_segment + 1);

    for seg in 0..(n - 1) {
        let p0 = if seg == 0 {
            2.0 * points[0] - points[1]
        } else {
            points[seg - 1]
        };
        let p1 = points[seg];
        let p2 = points[seg + 1];
        let p3 = if seg + 2 < n {
            points[seg + 2]
        } else {
            2.0 * points[n - 1] - points[n - 2]
        };

        let steps = if seg == n - 2 {
            samples_per_segment + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples_per_segment
        };

        for i in 0..steps {
            let t = i as f32 / samples_per_segment as f32;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }

    result
}

/// Vereinfacht eine Polyline per Ramer-Douglas-Peucker.
///
/// Behält Punkte deren Abstand zur Sehne `epsilon` überschreitet.
/// Start- und Endpunkt bleiben immer erhalten.
pub fn simplify_polyline(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    rdp_mark(points, 0, points.len() - 1, epsilon, &mut keep);

    points
        .iter()
        .zip(keep.iter())
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

/// Rekursiver RDP-Schritt: markiert den Punkt mit maximalem Sehnen-Abstand.
fn rdp_mark(points: &[Vec2], start: usize, end: usize, epsilon: f32, keep: &mut [bool]) {
    if end <= start + 1 {
        return;
    }

    let mut max_dist = 0.0f32;
    let mut max_idx = start;
    for i in (start + 1)..end {
        let d = point_segment_distance(points[i], points[start], points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        keep[max_idx] = true;
        rdp_mark(points, start, max_idx, epsilon, keep);
        rdp_mark(points, max_idx, end, epsilon, keep);
    }
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
