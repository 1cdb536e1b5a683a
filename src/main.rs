use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, Window, WindowId},
};

use bubble_pop::cli::Cli;
use bubble_pop::config::SceneConfig;
use bubble_pop::frame::FrameClock;
use bubble_pop::game::{PopGame, SessionEvent};
use bubble_pop::input::Viewport;
use bubble_pop::interaction::Interaction;
use bubble_pop::renderer::{HudOverlay, SceneRenderer, Tunables};
use bubble_pop::scene::Scene;
use bubble_pop::Camera;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1024;
const INITIAL_WINDOW_HEIGHT: u32 = 768;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    config: SceneConfig,
    show_hud: bool,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: Camera,
    scene: Scene,
    interaction: Interaction,
    game: Option<PopGame>,
    game_over: Option<u32>,
    viewport: Viewport,
    tunables: Tunables,
    rng: rand::rngs::ThreadRng,
    frame_clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: SceneConfig, no_ui: bool) -> Self {
        let mut rng = rand::thread_rng();
        let scene = Scene::build(&config, &mut rng);

        let viewport = Viewport::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
        let mut camera = Camera::new(
            config.fov_degrees,
            viewport.aspect(),
            config.min_camera_distance,
            config.max_camera_distance,
        );
        camera.parallax_scale = config.parallax_scale;

        let game = config
            .variant
            .interactive()
            .then(|| PopGame::new(config.session_seconds));

        let tunables = Tunables {
            rise_speed: config.rise_speed,
            parallax_scale: config.parallax_scale,
            fog_near: config.fog_near,
            fog_far: config.fog_far,
        };

        Self {
            show_hud: !no_ui && config.variant.interactive(),
            config,
            window: None,
            renderer: None,
            camera,
            scene,
            interaction: Interaction::new(),
            game,
            game_over: None,
            viewport,
            tunables,
            rng,
            frame_clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// A click or touch-move pop attempt, applied against the pick from the
    /// most recently completed frame.
    fn trigger(&mut self) {
        if let Some(game) = &mut self.game {
            game.trigger(
                self.interaction.last_pick(),
                &mut self.scene.bubbles,
                &mut self.rng,
            );
        }
    }

    fn restart(&mut self) {
        if let Some(game) = &mut self.game {
            game.restart(&mut self.scene.bubbles, &mut self.rng);
        }
        self.game_over = None;
    }

    fn apply_tunables(&mut self) {
        self.scene.bubbles.set_rise_speed(self.tunables.rise_speed);
        self.camera.parallax_scale = self.tunables.parallax_scale;
        self.scene.fog.near = self.tunables.fog_near;
        self.scene.fog.far = self.tunables.fog_far;
    }

    fn redraw(&mut self) {
        let frame = self.frame_clock.tick();
        self.update_fps(frame.delta);

        if self.config.variant.debug_controls() {
            self.apply_tunables();
        }

        self.scene.animate(frame.delta);

        if let Some(game) = &mut self.game {
            if let Some(SessionEvent::Finished { final_score }) = game.advance(frame.delta) {
                self.game_over = Some(final_score);
            }
        }

        self.camera.apply_parallax(self.interaction.pointer.state());

        if self.config.variant.interactive() {
            self.interaction.frame_pick(&self.camera, &self.scene.bubbles);
            if let Some(window) = &self.window {
                let icon = if self.interaction.is_hovering() {
                    CursorIcon::Pointer
                } else {
                    CursorIcon::Default
                };
                window.set_cursor(icon);
            }
        }

        let (score, remaining_seconds) = self
            .game
            .as_ref()
            .map(|g| (g.session.score, g.session.remaining_seconds))
            .unwrap_or((0, 0));

        let hud = HudOverlay {
            show_hud: self.show_hud,
            score,
            remaining_seconds,
            fps: self.fps,
            game_over: self.game_over,
            tunables: self
                .config
                .variant
                .debug_controls()
                .then_some(&mut self.tunables),
        };

        let result = match (&mut self.renderer, &self.window) {
            (Some(renderer), Some(window)) => {
                renderer.render(&self.camera, window, &self.scene, frame.time, hud)
            }
            _ => return,
        };

        match result {
            Ok(actions) => {
                if actions.restart {
                    self.restart();
                }
            }
            Err(e) => error!("render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Bubble Pop")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SceneRenderer::new(window.clone(), &self.scene))
            {
                Ok(r) => r,
                Err(e) => {
                    error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.viewport = Viewport::new(size.width, size.height);
            self.camera.set_viewport(self.viewport);

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.viewport = Viewport::new(size.width, size.height);
                self.camera.set_viewport(self.viewport);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.interaction
                    .on_pointer_move(position.x as f32, position.y as f32, self.viewport);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 * 0.01,
                };
                self.camera.zoom(amount);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.trigger(),
            WindowEvent::Touch(touch) => {
                let point = Some((touch.location.x as f32, touch.location.y as f32));
                match touch.phase {
                    TouchPhase::Started => {
                        self.interaction.on_touch_move(point, self.viewport);
                    }
                    TouchPhase::Moved => {
                        self.interaction.on_touch_move(point, self.viewport);
                        // Any touch movement while intersecting counts as a
                        // pop attempt.
                        self.trigger();
                    }
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(duration) = cli.duration {
        config.session_seconds = duration;
    }
    if let Some(bubbles) = cli.bubbles {
        config.bubble_count = bubbles;
    }

    info!(
        "starting {:?} scene: {} bubbles, {} s session",
        config.variant, config.bubble_count, config.session_seconds
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, cli.no_ui);
    event_loop.run_app(&mut app)?;

    Ok(())
}
