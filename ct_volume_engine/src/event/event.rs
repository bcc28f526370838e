/// Event — one discrete input occurrence, alive for a single frame.
///
/// A sum type so that application sites match exhaustively: adding a
/// variant is a compile error at every consumer until it is handled.
/// There is deliberately no catch-all "unknown" variant.

use crate::camera::MoveDirection;

/// A discrete input event consumed by [`crate::world::World::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Request to terminate the main loop
    Quit,

    /// The window surface changed size; affects the next frame's aspect
    /// ratio only
    WindowResize {
        /// New viewport width in pixels
        width: u32,
        /// New viewport height in pixels
        height: u32,
    },

    /// One movement step along a camera axis, scaled by the frame's
    /// delta-time when applied
    CameraMove {
        /// Axis and sign of the step
        direction: MoveDirection,
    },

    /// An absolute cursor position sample; the World turns consecutive
    /// samples into look offsets
    CameraLook {
        /// Cursor x in window coordinates
        x: f32,
        /// Cursor y in window coordinates
        y: f32,
    },
}
