//! Application state and main game loop.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::assets::{Assets, TextureStore};
use crate::config::GameConfig;
use crate::input::GestureTracker;
use crate::persist::{Catalog, Store};
use crate::render::Renderer;
use crate::screens::{GameContext, ScreenManager};
use crate::ui::theme::GameColors;

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    gestures: GestureTracker,
    manager: ScreenManager,
    game: GameContext,
    last_frame: Instant,
    frame_count: u32,
}

impl App {
    pub async fn new(
        config: GameConfig,
        store: Store,
        catalog: Catalog,
    ) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new()?;

        let window_attrs = WindowAttributes::default()
            .with_title("Pipkin")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ));

        // Use deprecated create_window to avoid async complexity for now
        #[allow(deprecated)]
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = Renderer::new(window.clone()).await?;

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None, // max_texture_side
        );

        let assets = Assets::new()?;

        let mut game = GameContext {
            config,
            store,
            catalog,
            assets,
            textures: TextureStore::new(),
            colors: GameColors::default(),
            session: None,
            rng: rand::thread_rng(),
        };
        let manager = ScreenManager::new(&mut game);

        let app = Self {
            window,
            renderer,
            egui_ctx,
            egui_state,
            gestures: GestureTracker::new(),
            manager,
            game,
            last_frame: Instant::now(),
            frame_count: 0,
        };

        Ok((app, event_loop))
    }

    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Persist the live session, if any. Used on quit and manual save.
    fn save_now(&mut self) {
        if let Some(session) = &self.game.session {
            if let Err(e) = self.game.store.save_session(session) {
                log::error!("Save failed: {e:#}");
            }
        }
    }

    fn handle_redraw(&mut self) {
        let dt = self.last_frame.elapsed().as_secs_f32().min(0.25);
        self.last_frame = Instant::now();

        if self.game.config.debug.log_fps {
            self.frame_count = self.frame_count.wrapping_add(1);
            if self.frame_count % 600 == 0 {
                // Every ~10 seconds at 60fps
                log::info!("Frame {}: {:.1}ms", self.frame_count, dt * 1000.0);
            }
        }

        // Apply any transition queued last frame, then advance the screen.
        let gesture_frame = self.gestures.take_frame(dt);
        self.manager.apply_pending(&mut self.game);
        self.manager.update(dt, &gesture_frame, &mut self.game);

        // Build the UI
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.manager.draw(ctx, &mut self.game);
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        // Render
        let clear = self.game.config.stage.background_rgb();
        if let Err(e) = self.renderer.render(
            &self.egui_ctx,
            full_output.textures_delta,
            full_output.shapes,
            clear,
        ) {
            log::error!("Render error: {e}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and renderer are already initialized in new()
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle events first
        let _ = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                self.save_now();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if self.egui_ctx.wants_keyboard_input() {
                    return;
                }
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    let pressed = key_event.state == ElementState::Pressed;
                    match code {
                        KeyCode::Escape => {
                            if pressed {
                                self.save_now();
                                event_loop.exit();
                            }
                        }
                        // Manual save
                        KeyCode::F5 => {
                            if pressed {
                                self.save_now();
                                log::info!("Manual save completed");
                            }
                        }
                        _ => {}
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.gestures
                    .on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.gestures.on_cursor_left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    // Swipes over widgets belong to egui, not the carousel.
                    if self.egui_ctx.wants_pointer_input() {
                        self.gestures.on_button(false);
                    } else {
                        self.gestures.on_button(state == ElementState::Pressed);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.handle_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.window.request_redraw();
    }
}
