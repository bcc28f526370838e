//! Renderer module — the contract backend implementations fulfill.
//!
//! The engine never creates a renderer: backends construct their own
//! concrete type (an explicit owned value — no plugin registry, no
//! global handle) and the frame loop drives it through the [`Renderer`]
//! trait once per frame. Teardown is `Drop`.

mod renderer;

pub use renderer::{Renderer, RendererConfig, RendererStats};
