//! Szenen-Modell: Element-Liste, Selektion und Id-Vergabe.
//!
//! Die Szene ist die einzige Wahrheit über den Canvas-Inhalt. Sie kennt
//! weder Kamera noch Tools — Hit-Tests bekommen die Toleranz bereits in
//! Canvas-Einheiten übergeben.

use crate::core::element::{Element, ElementId, Shape};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Canvas-Inhalt: geordnete Element-Liste (Index = Z-Reihenfolge,
/// später eingefügt = weiter oben) plus Selektion.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Element>,
    selected_id: Option<ElementId>,
    next_id: ElementId,
}

/// Vollständige Kopie des Szenen-Inhalts für die Undo-Historie.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub elements: Vec<Element>,
    pub selected_id: Option<ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected_id: None,
            next_id: 1,
        }
    }

    /// Vergibt die nächste freie Element-Id.
    pub fn alloc_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Erstellt ein Element aus einer Geometrie und hängt es oben an.
    pub fn add_shape(&mut self, shape: Shape) -> ElementId {
        let id = self.alloc_id();
        self.elements.push(Element::new(id, shape));
        id
    }

    /// Hängt ein fertiges Element oben an. Die Id-Vergabe wird so
    /// nachgezogen, dass künftige `alloc_id`-Aufrufe nicht kollidieren.
    pub fn add_element(&mut self, element: Element) {
        self.next_id = self.next_id.max(element.id + 1);
        self.elements.push(element);
    }

    /// Entfernt ein Element. Eine darauf zeigende Selektion wird gelöscht.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        self.elements.len() != before
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Alle Elemente in Z-Reihenfolge (unterstes zuerst).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Oberstes Element unter `pos` (Canvas-Koordinaten). Bei Überlappung
    /// gewinnt das zuletzt hinzugefügte.
    pub fn element_at(&self, pos: Vec2, tolerance: f32) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(pos, tolerance))
            .map(|e| e.id)
    }

    /// Selektiert ein Element. Gibt `false` zurück wenn die Id unbekannt
    /// ist (Selektion bleibt dann unverändert).
    pub fn select(&mut self, id: ElementId) -> bool {
        if self.element(id).is_some() {
            self.selected_id = Some(id);
            true
        } else {
            false
        }
    }

    pub fn deselect_all(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_id
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_id.and_then(|id| self.element(id))
    }

    /// Leert die Szene vollständig. Ids werden nicht wiederverwendet.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected_id = None;
    }

    /// Kopiert den aktuellen Inhalt für die Historie.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            elements: self.elements.clone(),
            selected_id: self.selected_id,
        }
    }

    /// Setzt die Szene auf einen früheren Snapshot zurück. `next_id`
    /// bleibt monoton, damit nach Undo+Neuzeichnen keine Ids kollidieren.
    pub fn restore(&mut self, snapshot: SceneSnapshot) {
        self.elements = snapshot.elements;
        self.selected_id = snapshot.selected_id;
        let max_id = self.elements.iter().map(|e| e.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
    }
}

/// Persistierter Viewport-Zustand im Dokument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub pan_x: f32,
    pub pan_y: f32,
    pub scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Speicherformat eines Canvas: Viewport plus Elemente, JSON-kodiert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    #[serde(default)]
    pub transform: ViewTransform,
    pub elements: Vec<Element>,
}

impl CanvasDocument {
    /// Fängt Szene und Kamera als speicherbares Dokument ein.
    pub fn capture(scene: &Scene, transform: ViewTransform) -> Self {
        Self {
            transform,
            elements: scene.elements.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Baut eine Szene aus dem Dokument auf (Selektion leer, Id-Zähler
    /// hinter der höchsten geladenen Id).
    pub fn into_scene(self) -> Scene {
        let mut scene = Scene::new();
        for element in self.elements {
            scene.add_element(element);
        }
        scene
    }
}
