//! Integrationstests für den Intent→Command→Handler-Fluss.

use std::cell::RefCell;
use std::rc::Rc;

use air_canvas_editor::{
    AppController, AppIntent, AppState, CanvasEvent, Shape, ToolKind,
};
use glam::Vec2;

fn make_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [1280.0, 720.0];
    state
}

/// Abonniert den Canvas-Event-Bus und sammelt alle Notifications.
fn capture_events(state: &mut AppState) -> Rc<RefCell<Vec<CanvasEvent>>> {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let sink = captured.clone();
    state.events.subscribe(move |event: &CanvasEvent| {
        sink.borrow_mut().push(event.clone());
    });
    captured
}

fn draw_rect(
    controller: &mut AppController,
    state: &mut AppState,
    from: Vec2,
    to: Vec2,
) {
    controller
        .handle_intent(state, AppIntent::SetToolRequested { kind: ToolKind::Rectangle })
        .unwrap();
    controller
        .handle_intent(state, AppIntent::DrawStarted { screen_pos: from })
        .unwrap();
    controller
        .handle_intent(state, AppIntent::DrawMoved { screen_pos: to })
        .unwrap();
    controller
        .handle_intent(state, AppIntent::DrawEnded { screen_pos: to })
        .unwrap();
}

#[test]
fn test_draw_rectangle_commits_element() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let events = capture_events(&mut state);

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(10.0, 10.0),
        Vec2::new(110.0, 90.0),
    );

    assert_eq!(state.element_count(), 1);
    let element = state.scene.elements().first().expect("Element existiert");
    match &element.shape {
        Shape::Rectangle { min, size, .. } => {
            assert_eq!(*min, Vec2::new(10.0, 10.0));
            assert_eq!(*size, Vec2::new(100.0, 80.0));
        }
        other => panic!("Rechteck erwartet, war {:?}", other),
    }

    let events = events.borrow();
    assert!(events
        .iter()
        .any(|e| matches!(e, CanvasEvent::ElementAdded { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        CanvasEvent::HistoryChanged {
            can_undo: true,
            can_redo: false
        }
    )));
}

#[test]
fn test_tiny_drag_commits_nothing() {
    let mut controller = AppController::new();
    let mut state = make_state();

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(10.0, 10.0),
        Vec2::new(13.0, 13.0),
    );

    assert_eq!(state.element_count(), 0);
    assert!(!state.can_undo(), "verworfener Drag darf keinen Undo-Schritt erzeugen");
}

#[test]
fn test_undo_redo_roundtrip() {
    let mut controller = AppController::new();
    let mut state = make_state();

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );
    assert_eq!(state.element_count(), 1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.element_count(), 0);
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .unwrap();
    assert_eq!(state.element_count(), 1);
}

#[test]
fn test_undo_at_boundary_is_noop() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let events = capture_events(&mut state);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();

    assert_eq!(state.element_count(), 0);
    assert!(
        events.borrow().is_empty(),
        "Undo ohne Historie darf nichts publizieren"
    );
}

#[test]
fn test_tap_selects_and_empty_tap_deselects() {
    let mut controller = AppController::new();
    let mut state = make_state();

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
    );

    // Tap auf die Kante des Rechtecks
    controller
        .handle_intent(
            &mut state,
            AppIntent::TapAt {
                screen_pos: Vec2::new(100.0, 150.0),
            },
        )
        .unwrap();
    assert!(state.scene.selected_id().is_some());

    // Tap ins Leere hebt die Selektion auf
    controller
        .handle_intent(
            &mut state,
            AppIntent::TapAt {
                screen_pos: Vec2::new(600.0, 600.0),
            },
        )
        .unwrap();
    assert!(state.scene.selected_id().is_none());
}

#[test]
fn test_delete_selected_is_undoable() {
    let mut controller = AppController::new();
    let mut state = make_state();

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(80.0, 80.0),
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::TapAt {
                screen_pos: Vec2::new(0.0, 40.0),
            },
        )
        .unwrap();
    assert!(state.scene.selected_id().is_some());

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .unwrap();
    assert_eq!(state.element_count(), 0);
    assert!(state.scene.selected_id().is_none());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.element_count(), 1);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let events = capture_events(&mut state);

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .unwrap();

    assert!(events.borrow().is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_clear_canvas_restorable_in_one_undo() {
    let mut controller = AppController::new();
    let mut state = make_state();

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(0.0, 0.0),
        Vec2::new(50.0, 50.0),
    );
    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        Vec2::new(180.0, 160.0),
    );
    assert_eq!(state.element_count(), 2);

    let events = capture_events(&mut state);
    controller
        .handle_intent(&mut state, AppIntent::ClearCanvasRequested)
        .unwrap();
    assert_eq!(state.element_count(), 0);
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, CanvasEvent::Cleared)));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.element_count(), 2, "Clear muss ein einziger Undo-Schritt sein");
}

#[test]
fn test_pan_moves_camera_and_publishes() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let events = capture_events(&mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(30.0, -10.0),
            },
        )
        .unwrap();

    assert_eq!(state.view.camera.pan, Vec2::new(30.0, -10.0));
    assert!(events.borrow().iter().any(|e| matches!(
        e,
        CanvasEvent::Pan { delta } if *delta == Vec2::new(30.0, -10.0)
    )));
}

#[test]
fn test_zero_pan_publishes_nothing() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let events = capture_events(&mut state);

    controller
        .handle_intent(&mut state, AppIntent::CameraPan { delta: Vec2::ZERO })
        .unwrap();

    assert!(events.borrow().is_empty());
}

#[test]
fn test_zoom_clamps_at_maximum() {
    let mut controller = AppController::new();
    let mut state = make_state();

    for _ in 0..50 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .unwrap();
    }

    assert!(state.view.camera.scale <= state.options.camera_zoom_max);

    let events = capture_events(&mut state);
    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .unwrap();
    assert!(
        events.borrow().is_empty(),
        "Zoom am Anschlag darf nichts publizieren"
    );
}

#[test]
fn test_draw_respects_camera_transform() {
    let mut controller = AppController::new();
    let mut state = make_state();

    // Kamera verschieben: Screen (100, 100) liegt jetzt bei Canvas (50, 80)
    state.view.camera.pan = Vec2::new(50.0, 20.0);

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
    );

    let element = state.scene.elements().first().expect("Element existiert");
    match &element.shape {
        Shape::Rectangle { min, .. } => {
            assert_eq!(*min, Vec2::new(50.0, 80.0));
        }
        other => panic!("Rechteck erwartet, war {:?}", other),
    }
}

#[test]
fn test_tool_switch_mid_drag_discards_preview() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetToolRequested {
                kind: ToolKind::Circle,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawStarted {
                screen_pos: Vec2::new(0.0, 0.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawMoved {
                screen_pos: Vec2::new(100.0, 100.0),
            },
        )
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetToolRequested {
                kind: ToolKind::Line,
            },
        )
        .unwrap();

    // Das Ende des verwaisten Drags darf nichts mehr committen
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawEnded {
                screen_pos: Vec2::new(100.0, 100.0),
            },
        )
        .unwrap();

    assert_eq!(state.element_count(), 0);
}

#[test]
fn test_select_drag_moves_element_with_single_undo_step() {
    let mut controller = AppController::new();
    let mut state = make_state();

    draw_rect(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetToolRequested {
                kind: ToolKind::Select,
            },
        )
        .unwrap();

    // Drag auf der Kante beginnen, in zwei Schritten verschieben
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawStarted {
                screen_pos: Vec2::new(100.0, 150.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawMoved {
                screen_pos: Vec2::new(120.0, 150.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawMoved {
                screen_pos: Vec2::new(140.0, 150.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawEnded {
                screen_pos: Vec2::new(140.0, 150.0),
            },
        )
        .unwrap();

    let element = state.scene.elements().first().expect("Element existiert");
    match &element.shape {
        Shape::Rectangle { min, .. } => assert_eq!(*min, Vec2::new(140.0, 100.0)),
        other => panic!("Rechteck erwartet, war {:?}", other),
    }

    // Ein Undo stellt die Position vor dem gesamten Drag wieder her
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    let element = state.scene.elements().first().expect("Element existiert");
    match &element.shape {
        Shape::Rectangle { min, .. } => assert_eq!(*min, Vec2::new(100.0, 100.0)),
        other => panic!("Rechteck erwartet, war {:?}", other),
    }
}

#[test]
fn test_freehand_draw_commits_simplified_path() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetToolRequested {
                kind: ToolKind::Freehand,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawStarted {
                screen_pos: Vec2::new(0.0, 0.0),
            },
        )
        .unwrap();
    // Kollinearer Zug mit vielen Zwischenpunkten
    for i in 1..=20 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::DrawMoved {
                    screen_pos: Vec2::new(i as f32 * 5.0, 0.0),
                },
            )
            .unwrap();
    }
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawEnded {
                screen_pos: Vec2::new(100.0, 0.0),
            },
        )
        .unwrap();

    assert_eq!(state.element_count(), 1);
    let element = state.scene.elements().first().expect("Element existiert");
    match &element.shape {
        Shape::Freehand { points } => {
            assert_eq!(points.len(), 2, "kollinearer Zug kollabiert auf zwei Punkte");
            assert_eq!(points[0], Vec2::new(0.0, 0.0));
            assert_eq!(points[1], Vec2::new(100.0, 0.0));
        }
        other => panic!("Freihand erwartet, war {:?}", other),
    }
}

#[test]
fn test_viewport_resize_updates_state() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .unwrap();

    assert_eq!(state.view.viewport_size, [800.0, 600.0]);
}

#[test]
fn test_exit_request_sets_flag() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .unwrap();

    assert!(state.should_exit);
}
