//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `gesture` und `render` geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

/// Event-Kanal für Publish/Subscribe per Dependency Injection.
pub mod event_bus;
/// Bounds, Pfad-Glättung (Catmull-Rom) und -Vereinfachung (RDP).
pub mod geometry;
/// Laufzeit-Optionen und Fallback-Konstanten.
pub mod options;
/// Render-Gating (Dirty-Flag + kontinuierliches Feedback).
pub mod scheduler;

pub use event_bus::{EventBus, SubscriptionId};
pub use geometry::Bounds;
pub use options::{EditorOptions, GestureOptions};
pub use scheduler::FrameScheduler;
