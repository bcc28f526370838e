//! Error types for the CTVolume engine
//!
//! This module defines the error types used throughout the engine,
//! covering resource initialization, slice decoding, event-queue
//! invariants, and renderer backends.

use std::fmt;

/// Result type for CTVolume engine operations
pub type CtVolumeResult<T> = Result<T, CtVolumeError>;

/// CTVolume engine errors
#[derive(Debug, Clone)]
pub enum CtVolumeError {
    /// A required resource could not be opened or created
    /// (slice directory, export stream, graphics device/surface)
    ResourceInit(String),

    /// A slice raster could not be decoded
    Decode(String),

    /// EventQueue overflow — input sampling produced more events in one
    /// frame than the queue was sized for (programming-invariant violation)
    CapacityExceeded {
        /// The fixed capacity that was exceeded
        capacity: usize,
    },

    /// Renderer backend error past initialization (wgpu, etc.)
    Backend(String),
}

impl fmt::Display for CtVolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtVolumeError::ResourceInit(msg) => write!(f, "Resource initialization failed: {}", msg),
            CtVolumeError::Decode(msg) => write!(f, "Slice decode failed: {}", msg),
            CtVolumeError::CapacityExceeded { capacity } => {
                write!(f, "Event queue capacity exceeded ({} events)", capacity)
            }
            CtVolumeError::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for CtVolumeError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
