/*!
# CT Volume Engine

Core types for the CTVolume slice-stack viewer.

This crate turns an ordered stack of 2-D scan slices into a sparse 3-D point
cloud and runs the per-frame simulation that a free-fly camera viewer needs:
a bounded event queue, a world aggregate that applies queued input in FIFO
order, and the camera orientation/projection math the renderer consumes.

Rendering itself is behind the [`renderer::Renderer`] trait. Backend
implementations (wgpu, a test mock, etc.) live in separate crates and are
handed to the frame loop as explicit owned values — the engine keeps no
process-wide rendering state.

## Architecture

- **PointCloud**: growable, insertion-ordered container of 3-D coordinates
- **VolumeIngestor**: slice rasters in depth order → populated PointCloud
- **FlyCamera**: yaw/pitch orientation, derived basis, view/projection math
- **EventQueue**: bounded per-frame FIFO of input events
- **World**: camera + cloud + viewport + frame timing, mutated once per frame
- **Renderer**: contract the viewer drives once per frame
*/

// Internal modules
mod error;
pub mod camera;
pub mod event;
pub mod log;
pub mod point_cloud;
pub mod renderer;
pub mod volume;
pub mod world;

// Error types at the crate root
pub use error::{CtVolumeError, CtVolumeResult};

// Main ctvolume namespace module
pub mod ctvolume {
    // Error types
    pub use crate::error::{CtVolumeError, CtVolumeResult};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{ConsoleLogger, LogEntry, LogSeverity, Logger};
        // Note: engine_* macros are NOT re-exported here - they are crate-root exports
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Event sub-module
    pub mod event {
        pub use crate::event::*;
    }

    // Point cloud sub-module
    pub mod point_cloud {
        pub use crate::point_cloud::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Volume ingestion sub-module
    pub mod volume {
        pub use crate::volume::*;
    }

    // World sub-module
    pub mod world {
        pub use crate::world::*;
    }
}

// Re-export math library at crate root
pub use glam;
