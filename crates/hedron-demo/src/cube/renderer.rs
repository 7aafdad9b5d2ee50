//! Cube renderer: GPU buffers, shader pipeline and the per-frame pass.

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use hedron_engine::device::Gpu;
use hedron_engine::render::RenderTarget;

use super::{camera, mesh};

/// Strip topology is what makes the restart sentinel work: wgpu enables
/// primitive restart exactly when a strip pipeline declares its index
/// format, and the cut value is the maximum index of that format, which is
/// [`mesh::RESTART_INDEX`].
const TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::TriangleStrip;
const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

/// Background clear color (opaque black).
const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// Projection uniform as it crosses to the shader (column-major mat4x4).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ProjectionUniform {
    view_proj: [[f32; 4]; 4],
}

impl ProjectionUniform {
    fn current() -> Self {
        Self {
            view_proj: camera::view_projection().into(),
        }
    }
}

/// Minimum binding size for the projection uniform.
///
/// `ProjectionUniform` is one mat4x4 (64 bytes), so the size is non-zero by
/// construction.
fn projection_ubo_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ProjectionUniform>() as u64)
        .expect("ProjectionUniform has non-zero size by construction")
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

/// Positions live in their own tightly packed buffer; nothing interleaved.
fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

/// Colors mirror the position buffer: same stride, separate binding.
fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

/// Renders one flat-shaded cube from a fixed viewpoint.
///
/// All GPU resources are created once in [`CubeRenderer::new`] and live for
/// the renderer's lifetime; dropping the renderer releases them. A frame is
/// one render pass with a single indexed draw.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    projection_ubo: wgpu::Buffer,
    position_vbo: wgpu::Buffer,
    color_vbo: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl CubeRenderer {
    /// Builds the cube's buffers, shader module and render pipeline.
    ///
    /// The whole construction runs inside a validation error scope: a WGSL
    /// compile error, or any mismatch between the vertex layouts / bind
    /// group layout and the shader interface, fails here with the backend's
    /// diagnostic before a single frame is drawn. There is no fallback
    /// shader and no retry.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        // The guard must stay bound until after the last creation call;
        // dropping it pops the scope and discards captured errors.
        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let position_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hedron cube position vbo"),
            contents: bytemuck::cast_slice(&mesh::POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hedron cube color vbo"),
            contents: bytemuck::cast_slice(&mesh::COLORS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hedron cube ibo"),
            contents: bytemuck::cast_slice(&mesh::INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("hedron cube shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("hedron cube bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(projection_ubo_size()),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("hedron cube pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("hedron cube pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: TOPOLOGY,
                strip_index_format: Some(INDEX_FORMAT),
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: Gpu::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        // Pre-filled so a frame drawn before any resize still has a valid
        // camera; resize rewrites the same 64 bytes.
        let initial = ProjectionUniform::current();
        let projection_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hedron cube projection ubo"),
            contents: bytemuck::bytes_of(&initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("hedron cube bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_ubo.as_entire_binding(),
            }],
        });

        if let Some(e) = pollster::block_on(error_scope.pop()) {
            anyhow::bail!("cube pipeline rejected by the GPU backend: {e}");
        }

        log::debug!("cube renderer ready ({} indices)", mesh::INDEX_COUNT);

        Ok(Self {
            pipeline,
            bind_group,
            projection_ubo,
            position_vbo,
            color_vbo,
            index_buffer,
        })
    }

    /// Recomputes the projection and re-uploads the uniform.
    ///
    /// `width`/`height` arrive from the window resize but do not feed the
    /// matrix (see [`camera`]); they only gate the upload, since a minimized
    /// window reports a zero-area size. Equal inputs upload bit-identical
    /// bytes.
    pub fn resize(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        log::trace!("projection refresh at {width}x{height}");
        let uniform = ProjectionUniform::current();
        queue.write_buffer(&self.projection_ubo, 0, bytemuck::bytes_of(&uniform));
    }

    /// Records the cube's render pass: clear color and depth, then one
    /// indexed draw over the whole strip stream.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hedron cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.position_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.color_vbo.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), INDEX_FORMAT);
        rpass.draw_indexed(0..mesh::INDEX_COUNT as u32, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pipeline constants ────────────────────────────────────────────────

    #[test]
    fn strip_topology_with_u32_restart() {
        assert_eq!(TOPOLOGY, wgpu::PrimitiveTopology::TriangleStrip);
        assert_eq!(INDEX_FORMAT, wgpu::IndexFormat::Uint32);
        // For a Uint32 strip the implicit cut value is the maximum index,
        // which is exactly the sentinel the index table uses.
        assert_eq!(mesh::RESTART_INDEX, u32::MAX);
    }

    #[test]
    fn draw_covers_the_whole_index_stream() {
        assert_eq!(mesh::INDEX_COUNT, mesh::INDICES.len());
        assert_eq!(mesh::INDEX_COUNT, 29);
    }

    // ── vertex layouts ────────────────────────────────────────────────────

    #[test]
    fn vertex_streams_are_tightly_packed_vec3() {
        let pos = position_layout();
        assert_eq!(pos.array_stride, 12);
        assert_eq!(pos.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(pos.attributes.len(), 1);
        assert_eq!(pos.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(pos.attributes[0].shader_location, 0);
        assert_eq!(pos.attributes[0].offset, 0);

        let col = color_layout();
        assert_eq!(col.array_stride, 12);
        assert_eq!(col.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(col.attributes[0].shader_location, 1);
        assert_eq!(col.attributes[0].offset, 0);
    }

    #[test]
    fn uniform_is_one_tightly_packed_mat4() {
        assert_eq!(std::mem::size_of::<ProjectionUniform>(), 64);
        assert_eq!(projection_ubo_size().get(), 64);
    }

    // ── error capture ─────────────────────────────────────────────────────

    #[test]
    fn validation_scope_is_guard_based() {
        // Scope push hands back a guard and the captured error comes from
        // the guard's consuming pop; new() holds the guard across every
        // creation call and awaits the pop at the end.
        let _push: fn(&wgpu::Device, wgpu::ErrorFilter) -> wgpu::ErrorScopeGuard =
            wgpu::Device::push_error_scope;

        fn resolves_to_error<F>(_: fn(wgpu::ErrorScopeGuard) -> F)
        where
            F: std::future::Future<Output = Option<wgpu::Error>>,
        {
        }
        resolves_to_error(wgpu::ErrorScopeGuard::pop);
    }

    // ── shader interface ──────────────────────────────────────────────────

    #[test]
    fn shader_declares_the_expected_interface() {
        // Locations and the binding slot are the CPU<->GPU contract; this
        // pins the shader side against the layouts above.
        let src = include_str!("shaders/cube.wgsl");
        assert!(src.contains("fn vs_main"));
        assert!(src.contains("fn fs_main"));
        assert!(src.contains("@location(0) position"));
        assert!(src.contains("@location(1) color"));
        assert!(src.contains("@group(0) @binding(0)"));
    }
}
