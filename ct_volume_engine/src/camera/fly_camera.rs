/// FlyCamera — yaw/pitch free-fly camera.
///
/// Orientation is two independent angles in degrees; the orthonormal
/// forward/right/up basis is derived from them and recomputed after every
/// mutation, never persisted independently. Pitch is hard-clamped to
/// ±[`PITCH_LIMIT_DEGREES`] so the basis can never degenerate at ±90°.
///
/// All angles at the API boundary are degrees; trigonometry is done in
/// radians internally.

use glam::{Mat4, Vec3};

/// Movement speed in world units per second
pub const DEFAULT_SPEED: f32 = 50.0;

/// Look sensitivity in degrees per input unit
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Pitch never leaves [-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES]
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Vertical field of view in degrees
const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;

/// Near clipping plane
const DEFAULT_Z_NEAR: f32 = 0.1;

/// Far clipping plane — slice stacks use raw pixel coordinates, so the
/// visible range must cover volumes hundreds of units across
const DEFAULT_Z_FAR: f32 = 4096.0;

/// Direction of a camera movement step, relative to the current basis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along +forward
    Forward,
    /// Along -forward
    Backward,
    /// Along -(forward × up)
    Left,
    /// Along +(forward × up)
    Right,
}

/// Free-fly camera: position, yaw/pitch orientation, derived basis.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    /// Horizontal angle in degrees; 0 faces +X
    yaw: f32,
    /// Vertical angle in degrees, clamped to ±PITCH_LIMIT_DEGREES
    pitch: f32,
    world_up: Vec3,
    speed: f32,
    sensitivity: f32,
    fov_y_degrees: f32,
    z_near: f32,
    z_far: f32,
    // Derived basis, always consistent with yaw/pitch
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl FlyCamera {
    /// Create a camera at the origin, yaw 0, pitch 0, with the default
    /// speed and sensitivity. The basis is computed immediately.
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            world_up: Vec3::Y,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
            forward: Vec3::X,
            right: Vec3::ZERO,
            up: Vec3::ZERO,
        };
        camera.recompute_basis();
        camera
    }

    // ===== GETTERS =====

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within ±PITCH_LIMIT_DEGREES
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit forward vector derived from yaw/pitch
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit right vector
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Movement speed in units per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    // ===== MUTATIONS =====

    /// Move the camera along its own axes.
    ///
    /// The step length is `speed * delta_time`. Forward/Backward follow
    /// ±forward; Left/Right follow ∓/± `forward × up`, recomputed at move
    /// time rather than read from the cached right vector. Movement is
    /// unconstrained — no collision or bounds checking.
    pub fn translate(&mut self, delta_time: f32, direction: MoveDirection) {
        let step = self.speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.forward * step,
            MoveDirection::Backward => self.position -= self.forward * step,
            MoveDirection::Left => {
                let strafe = self.forward.cross(self.up).normalize();
                self.position -= strafe * step;
            }
            MoveDirection::Right => {
                let strafe = self.forward.cross(self.up).normalize();
                self.position += strafe * step;
            }
        }
        self.recompute_basis();
    }

    /// Turn the camera by cursor offsets.
    ///
    /// `delta_y` is inverted so that moving the pointer up tilts the view
    /// up. Pitch is clamped before the basis is recomputed.
    pub fn look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.sensitivity;
        self.pitch -= delta_y * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.recompute_basis();
    }

    // ===== DERIVED MATRICES =====

    /// View matrix: right-handed look-at from position toward
    /// `position + forward` with the derived up vector.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Projection matrix for the given viewport aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.z_near, self.z_far)
    }

    /// Rebuild forward/right/up from the current yaw/pitch.
    fn recompute_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.forward = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.forward.cross(self.world_up).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "fly_camera_tests.rs"]
mod tests;
