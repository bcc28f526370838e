/// WgpuRenderer — wgpu implementation of the engine's Renderer contract.
///
/// Owns the surface, device, pipeline and the lazily created point-cloud
/// vertex buffer. One instance per window; teardown is Drop.

use std::sync::Arc;

use ct_volume_engine::ctvolume::render::{Renderer, RendererConfig, RendererStats};
use ct_volume_engine::ctvolume::world::World;
use ct_volume_engine::{engine_debug, engine_info, CtVolumeError, CtVolumeResult};
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Depth attachment format used by the point pipeline
const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const LOG_SOURCE: &str = "ctvolume::wgpu::Renderer";

/// Per-frame uniform data consumed by points.wgsl
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    point_color: [f32; 4],
}

/// GPU-resident point cloud storage.
///
/// Created on the first frame that sees a non-empty cloud and reused for
/// the rest of the session — an explicit owned lifecycle, not a sentinel
/// handle value.
struct CloudBuffers {
    vertex: wgpu::Buffer,
    count: u32,
}

/// wgpu renderer for one window.
pub struct WgpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    cloud: Option<CloudBuffers>,
    config: RendererConfig,
    stats: RendererStats,
}

impl WgpuRenderer {
    /// Create a renderer drawing to `window`.
    ///
    /// Blocks on adapter and device acquisition.
    ///
    /// # Errors
    ///
    /// [`CtVolumeError::ResourceInit`] when no surface, adapter or device
    /// can be established.
    pub fn new(window: Arc<Window>, config: RendererConfig) -> CtVolumeResult<Self> {
        pollster::block_on(Self::new_async(window, config))
    }

    async fn new_async(window: Arc<Window>, config: RendererConfig) -> CtVolumeResult<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| CtVolumeError::ResourceInit(format!("surface creation failed: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| CtVolumeError::ResourceInit("no compatible GPU adapter".to_string()))?;

        engine_info!(LOG_SOURCE, "using adapter '{}'", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("ctvolume_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| CtVolumeError::ResourceInit(format!("device request failed: {e}")))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        let depth_view = create_depth_view(&device, &surface_config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("points.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // One vertex slot: tightly packed world-space positions
        let vertex_buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            depth_view,
            pipeline,
            uniform_buffer,
            bind_group,
            cloud: None,
            config,
            stats: RendererStats::default(),
        })
    }

    /// Upload the world's point cloud on the first frame that has one.
    fn ensure_cloud_uploaded(&mut self, world: &World) {
        if self.cloud.is_some() || world.point_cloud().is_empty() {
            return;
        }
        let bytes = world.point_cloud().as_bytes();
        let vertex = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_cloud_vb"),
            contents: bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });
        let count = world.point_cloud().len() as u32;
        engine_info!(LOG_SOURCE, "uploaded {} points ({} bytes)", count, bytes.len());
        self.cloud = Some(CloudBuffers { vertex, count });
        self.stats.cloud_uploaded = true;
        self.stats.resident_points = count;
    }
}

impl Renderer for WgpuRenderer {
    fn update(&mut self, world: &World) -> CtVolumeResult<()> {
        self.ensure_cloud_uploaded(world);

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                // Reconfigure and skip this frame
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(CtVolumeError::Backend("out of GPU memory".to_string()));
            }
            Err(other) => {
                return Err(CtVolumeError::Backend(format!("surface error: {other}")));
            }
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

        // View-projection recomputed every frame from camera + viewport
        let camera = world.camera();
        let view_proj = camera.projection_matrix(world.viewport().aspect()) * camera.view_matrix();
        let [r, g, b] = self.config.point_color;
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
                point_color: [r, g, b, 1.0],
            }),
        );

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });
        {
            let [cr, cg, cb, ca] = self.config.clear_color;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r: cr, g: cg, b: cb, a: ca }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            if let Some(cloud) = &self.cloud {
                pass.set_vertex_buffer(0, cloud.vertex.slice(..));
                pass.draw(0..cloud.count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();

        self.stats.frames_rendered += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = create_depth_view(&self.device, &self.surface_config);
        engine_debug!(LOG_SOURCE, "surface resized to {}x{}", width, height);
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

/// Build a depth attachment matching the surface dimensions.
fn create_depth_view(
    device: &wgpu::Device,
    surface_config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d {
            width: surface_config.width,
            height: surface_config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "wgpu_renderer_tests.rs"]
mod tests;
