/// World — camera + point cloud + viewport + frame timing, driven by the
/// per-frame event queue.
///
/// `update` is a pure, bounded-time pass over at most `capacity` queued
/// events, applied strictly in FIFO order: applying move/look out of
/// order is observably incorrect.

use std::time::Instant;

use crate::camera::FlyCamera;
use crate::engine_info;
use crate::event::{Event, EventQueue};
use crate::point_cloud::PointCloud;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Width-over-height aspect ratio, guarding a zero-height viewport
    pub fn aspect(&self) -> f32 {
        self.width as f32 / (self.height.max(1)) as f32
    }
}

/// The simulation aggregate: everything the renderer reads each frame.
pub struct World {
    camera: FlyCamera,
    point_cloud: PointCloud,
    viewport: Viewport,
    last_frame: Instant,
    delta_time: f32,
    /// Unseeded until the first CameraLook sample arrives; seeding from
    /// the first real sample avoids a spurious startup camera jump
    last_cursor: Option<(f32, f32)>,
    running: bool,
}

impl World {
    /// Create a running World owning `camera` and `point_cloud`.
    ///
    /// The frame clock starts now; the cursor baseline stays unseeded
    /// until the first look sample.
    pub fn new(camera: FlyCamera, point_cloud: PointCloud, viewport: Viewport) -> Self {
        Self {
            camera,
            point_cloud,
            viewport,
            last_frame: Instant::now(),
            delta_time: 0.0,
            last_cursor: None,
            running: true,
        }
    }

    // ===== GETTERS =====

    /// The camera, as the renderer reads it
    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    /// The resident point cloud
    pub fn point_cloud(&self) -> &PointCloud {
        &self.point_cloud
    }

    /// Current viewport dimensions
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seconds between the two most recent updates
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// False once a Quit event has been applied; the outer loop checks
    /// this once per iteration
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ===== FRAME UPDATE =====

    /// Advance the frame clock and apply all queued events in FIFO order.
    pub fn update(&mut self, events: &EventQueue) {
        self.update_at(Instant::now(), events);
    }

    /// [`World::update`] with an injected clock, for deterministic tests.
    pub fn update_at(&mut self, now: Instant, events: &EventQueue) {
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        for event in events.iter() {
            match *event {
                Event::Quit => {
                    engine_info!("ctvolume::World", "Quit event observed, stopping loop");
                    self.running = false;
                }
                Event::WindowResize { width, height } => {
                    // Affects the next frame's projection aspect only
                    self.viewport = Viewport { width, height };
                }
                Event::CameraMove { direction } => {
                    self.camera.translate(self.delta_time, direction);
                }
                Event::CameraLook { x, y } => {
                    if let Some((last_x, last_y)) = self.last_cursor {
                        self.camera.look(x - last_x, y - last_y);
                    }
                    self.last_cursor = Some((x, y));
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
