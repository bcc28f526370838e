/// Viewer application — the winit frame loop driving the engine.
///
/// One iteration per frame: translate the window events winit delivered
/// into queue pushes, emit one CameraMove per held movement key, run
/// `World::update`, flush the queue, hand the world to the renderer.
/// The loop ends when the world stops running (Quit) or a fatal error
/// is hit.

use std::sync::Arc;

use ct_volume_engine::ctvolume::camera::{FlyCamera, MoveDirection};
use ct_volume_engine::ctvolume::event::{Event, EventQueue};
use ct_volume_engine::ctvolume::point_cloud::PointCloud;
use ct_volume_engine::ctvolume::render::{Renderer, RendererConfig};
use ct_volume_engine::ctvolume::world::{Viewport, World};
use ct_volume_engine::{engine_error, engine_info, CtVolumeError, CtVolumeResult};
use ct_volume_engine_renderer_wgpu::WgpuRenderer;
use rustc_hash::FxHashSet;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "CT Scan Visualizer";

const LOG_SOURCE: &str = "ctvolume::demo::App";

/// Held-key to movement mapping, sampled in this fixed order each frame
const MOVE_KEYS: [(KeyCode, MoveDirection); 4] = [
    (KeyCode::KeyW, MoveDirection::Forward),
    (KeyCode::KeyS, MoveDirection::Backward),
    (KeyCode::KeyA, MoveDirection::Left),
    (KeyCode::KeyD, MoveDirection::Right),
];

/// Everything that exists only while the window does.
struct ViewerState {
    window: Arc<Window>,
    renderer: WgpuRenderer,
    world: World,
    events: EventQueue,
    held_keys: FxHashSet<KeyCode>,
}

/// The winit application: owns the ingested cloud until the window
/// exists, then the live viewer state.
pub struct ViewerApp {
    cloud: Option<PointCloud>,
    state: Option<ViewerState>,
    fatal: bool,
}

impl ViewerApp {
    /// Build an app around an already-ingested point cloud
    pub fn new(cloud: PointCloud) -> Self {
        Self {
            cloud: Some(cloud),
            state: None,
            fatal: false,
        }
    }

    /// Log a fatal error and stop the loop
    fn abort(&mut self, event_loop: &ActiveEventLoop, error: CtVolumeError) {
        engine_error!(LOG_SOURCE, "fatal: {}", error);
        self.fatal = true;
        event_loop.exit();
    }

    /// Queue one event, aborting on queue overflow
    fn push_event(&mut self, event_loop: &ActiveEventLoop, event: Event) {
        let result = match &mut self.state {
            Some(state) => state.events.push(event),
            None => return,
        };
        if let Err(error) = result {
            self.abort(event_loop, error);
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key_event: KeyEvent) {
        let PhysicalKey::Code(code) = key_event.physical_key else {
            return;
        };
        if code == KeyCode::Escape {
            if key_event.state == ElementState::Pressed {
                self.push_event(event_loop, Event::Quit);
            }
            return;
        }
        if MOVE_KEYS.iter().any(|(key, _)| *key == code) {
            if let Some(state) = &mut self.state {
                match key_event.state {
                    ElementState::Pressed => {
                        state.held_keys.insert(code);
                    }
                    ElementState::Released => {
                        state.held_keys.remove(&code);
                    }
                }
            }
        }
    }

    /// One frame: sample held keys, update the world, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let result = {
            let Some(state) = &mut self.state else { return };

            let mut push_result = Ok(());
            for (key, direction) in MOVE_KEYS {
                if state.held_keys.contains(&key) {
                    push_result = state.events.push(Event::CameraMove { direction });
                    if push_result.is_err() {
                        break;
                    }
                }
            }

            match push_result {
                Ok(()) => {
                    state.world.update(&state.events);
                    state.events.flush();
                    if !state.world.is_running() {
                        event_loop.exit();
                        return;
                    }
                    state.renderer.update(&state.world)
                }
                Err(error) => Err(error),
            }
        };

        if let Err(error) = result {
            self.abort(event_loop, error);
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                let error = CtVolumeError::ResourceInit(format!("window creation failed: {error}"));
                self.abort(event_loop, error);
                return;
            }
        };

        let renderer = match WgpuRenderer::new(window.clone(), RendererConfig::default()) {
            Ok(renderer) => renderer,
            Err(error) => {
                self.abort(event_loop, error);
                return;
            }
        };

        let size = window.inner_size();
        let world = World::new(
            FlyCamera::new(),
            self.cloud.take().unwrap_or_default(),
            Viewport { width: size.width, height: size.height },
        );
        engine_info!(
            LOG_SOURCE,
            "viewer up: {} points, {}x{} window",
            world.point_cloud().len(),
            size.width,
            size.height
        );

        self.state = Some(ViewerState {
            window,
            renderer,
            world,
            events: EventQueue::new(),
            held_keys: FxHashSet::default(),
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(state) = &self.state {
            if window_id != state.window.id() {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => self.push_event(event_loop, Event::Quit),
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.renderer.resize(size.width, size.height);
                }
                self.push_event(
                    event_loop,
                    Event::WindowResize { width: size.width, height: size.height },
                );
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_key(event_loop, key_event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.push_event(
                    event_loop,
                    Event::CameraLook { x: position.x as f32, y: position.y as f32 },
                );
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

/// Run the viewer over an ingested cloud until Quit or a fatal error.
///
/// # Errors
///
/// [`CtVolumeError::ResourceInit`] when the event loop cannot be
/// created or run; [`CtVolumeError::Backend`] when the loop ended on a
/// fatal in-loop error (already logged with context).
pub fn run(cloud: PointCloud) -> CtVolumeResult<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| CtVolumeError::ResourceInit(format!("event loop creation failed: {e}")))?;
    let mut app = ViewerApp::new(cloud);
    event_loop
        .run_app(&mut app)
        .map_err(|e| CtVolumeError::ResourceInit(format!("event loop failed: {e}")))?;

    if app.fatal {
        return Err(CtVolumeError::Backend("viewer aborted after a fatal error".to_string()));
    }
    engine_info!(LOG_SOURCE, "viewer shut down cleanly");
    Ok(())
}
