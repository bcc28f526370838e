//! World module — the per-frame simulation aggregate.
//!
//! One World is created after ingestion and owns the camera, the point
//! cloud, the viewport dimensions, and frame timing. It is mutated once
//! per frame by draining the EventQueue and read once per frame by the
//! renderer, never concurrently.

mod world;

pub use world::{Viewport, World};
