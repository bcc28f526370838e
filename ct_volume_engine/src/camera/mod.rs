//! Camera module — free-fly camera orientation and projection math.
//!
//! The engine does NOT store a global camera. One [`FlyCamera`] is owned
//! by the World and mutated exclusively through its `translate` and `look`
//! operations; renderers read the derived matrices each frame.

mod fly_camera;

pub use fly_camera::{
    FlyCamera, MoveDirection,
    DEFAULT_SPEED, DEFAULT_SENSITIVITY, PITCH_LIMIT_DEGREES,
};
