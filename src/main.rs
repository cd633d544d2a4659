//! AirCanvas Editor.
//!
//! Gestengesteuerter Vektor-Zeichen-Editor: Handgesten von der Webcam
//! steuern Zeichnen, Pan und Zoom — Maus und Tastatur laufen parallel
//! durch dieselbe Intent-Pipeline.

use std::time::Instant;

use air_canvas_editor::{
    render, ui, AppController, AppIntent, AppState, EditorOptions, GestureRecognizer,
    InteractionController, LandmarkFeed, NullFeed,
};
use air_canvas_editor::shared::FrameScheduler;
use eframe::egui;
use glam::Vec2;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("AirCanvas Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("AirCanvas Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "AirCanvas Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    interaction: InteractionController,
    recognizer: GestureRecognizer,
    /// Landmark-Quelle. Ohne angebundenen Detektor liefert der
    /// `NullFeed` nie eine Hand — der Editor bleibt voll bedienbar.
    feed: Box<dyn LandmarkFeed>,
    input: ui::InputState,
    canvas_renderer: render::CanvasRenderer,
    overlay_renderer: render::OverlayRenderer,
    scheduler: FrameScheduler,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let recognizer = GestureRecognizer::new(editor_options.gesture.clone());
        let state = AppState::with_options(editor_options);

        Self {
            state,
            controller: AppController::new(),
            interaction: InteractionController::new(),
            recognizer,
            feed: Box::new(NullFeed),
            input: ui::InputState::new(),
            canvas_renderer: render::CanvasRenderer::new(),
            overlay_renderer: render::OverlayRenderer::new(),
            scheduler: FrameScheduler::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let now = Instant::now();

        // Gesten-Pipeline: Landmark-Frames → klassifizierte Geste
        let hands = self.feed.poll();
        let screen = ctx.screen_rect();
        let gesture = self.recognizer.process(
            &hands,
            Vec2::new(screen.width(), screen.height()),
            now,
        );

        let (mut events, controls) = ui::render_toolbar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(
            self.interaction
                .process(gesture.as_ref(), &controls, &self.state.options, now),
        );

        ui::render_status_bar(ctx, &self.state, gesture.as_ref(), self.interaction.mode());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    [rect.width(), rect.height()],
                    self.state.scene.selected_id().is_some(),
                    self.state.tools.active_kind(),
                    &self.state.options,
                ));

                let painter = ui.painter().with_clip_rect(rect);
                self.canvas_renderer.paint(&painter, rect, &self.state);
            });

        // Overlay über allem (auch über der Toolbar): Cursor + Dwell-Ring
        let hover = self.interaction.hover_progress(now, &self.state.options);
        let overlay_painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("gesture_overlay"),
        ));
        self.overlay_renderer
            .paint(&overlay_painter, gesture.as_ref(), hover, &controls);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        // Render-Gating: dirty bei Mutationen, kontinuierlich bei
        // laufender Geste/Drag (Cursor und Dwell-Ring brauchen Frames)
        if has_meaningful_events {
            self.scheduler.mark_dirty();
        }
        self.scheduler.set_continuous(
            self.interaction.is_continuous()
                || gesture.is_some()
                || self.state.tools.active_tool().is_dragging(),
        );
        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.scheduler.take_should_render()
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
