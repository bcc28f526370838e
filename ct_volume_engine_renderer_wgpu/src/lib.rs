/*!
# CT Volume Engine - wgpu Renderer Backend

wgpu implementation of the CT Volume engine's rendering contract.

This crate draws the world's point cloud as a GPU point list: the cloud
is uploaded to a vertex buffer exactly once, lazily, on the first frame,
and the view-projection matrix is recomputed from the world's camera and
viewport on every frame.

The renderer is an explicit owned value: construct it with a window,
drive it through the [`ct_volume_engine::ctvolume::render::Renderer`]
trait, and drop it to release the GPU resources.
*/

// wgpu implementation modules
mod wgpu_renderer;

pub use wgpu_renderer::WgpuRenderer;
