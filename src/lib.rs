//! AirCanvas Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod gesture;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CanvasEvent, ControlId, InteractionController,
    InteractionMode, ToolKind, UiControl, UiState, ViewState,
};
pub use core::{Camera2D, CanvasDocument, Element, ElementId, Scene, Shape, Style};
pub use gesture::{
    Gesture, GestureEvent, GestureKind, GestureRecognizer, HandFrame, Landmark, LandmarkFeed,
    NullFeed,
};
pub use shared::{EditorOptions, EventBus, FrameScheduler, GestureOptions};
