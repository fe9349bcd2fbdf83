//! GPU-side scene resources and the per-frame render pass.
//!
//! The packed scene buffer is uploaded once; every frame afterwards only
//! rewrites the small uniform buffers and walks the frozen draw-range
//! table, issuing one sub-range draw call per object. Draw starts and
//! counts come exclusively from that table.

use wgpu::util::DeviceExt;

use crate::{
    context::{Context, OBJECT_UNIFORM_STRIDE},
    controls::Controls,
    data_structures::{
        layout::{DrawRange, SceneBuffer},
        mesh::Topology,
        scene::Scene,
    },
};

/// Per-object matrices in shader-upload form, one 256-byte slot each.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub world: [[f32; 4]; 4],
}

/// The uploaded scene: the shared vertex buffer, its offset table and the
/// per-object uniform buffer.
#[derive(Debug)]
pub struct GpuScene {
    vertex_buffer: wgpu::Buffer,
    color_offset: wgpu::BufferAddress,
    ranges: Vec<DrawRange>,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
}

impl GpuScene {
    /// Upload a packed scene buffer once and set up the uniform plumbing.
    pub fn new(ctx: &Context, packed: &SceneBuffer) -> Self {
        let vertex_buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Vertex Buffer"),
                contents: bytemuck::cast_slice(&packed.data),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let object_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: packed.ranges.len() as u64 * OBJECT_UNIFORM_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let object_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &ctx.object_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &object_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ObjectUniform>() as u64),
                }),
            }],
            label: Some("object_bind_group"),
        });

        Self {
            vertex_buffer,
            color_offset: packed.color_offset,
            ranges: packed.ranges.clone(),
            object_buffer,
            object_bind_group,
        }
    }

    /// Render one frame: upload the current matrices, then draw every
    /// object's range under the pipeline matching its topology.
    pub fn render(
        &self,
        ctx: &mut Context,
        scene: &Scene,
        controls: &Controls,
    ) -> Result<(), wgpu::SurfaceError> {
        ctx.camera
            .uniform
            .update_view_proj(&controls.camera, &controls.projection);
        ctx.queue.write_buffer(
            &ctx.camera.buffer,
            0,
            bytemuck::cast_slice(&[ctx.camera.uniform]),
        );

        for (i, range) in self.ranges.iter().enumerate() {
            let uniform = ObjectUniform {
                model: scene.model_matrix(range.role).into(),
                world: scene.world_matrix(range.role).into(),
            };
            ctx.queue.write_buffer(
                &self.object_buffer,
                i as u64 * OBJECT_UNIFORM_STRIDE,
                bytemuck::cast_slice(&[uniform]),
            );
        }

        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // Both attribute streams come from the one shared buffer: the
            // position block starts at byte 0, the color block at the
            // offset the layout froze.
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..self.color_offset));
            render_pass.set_vertex_buffer(1, self.vertex_buffer.slice(self.color_offset..));
            render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);

            for (i, range) in self.ranges.iter().enumerate() {
                match range.topology {
                    Topology::TriangleList => render_pass.set_pipeline(&ctx.pipelines.triangles),
                    Topology::LineList => render_pass.set_pipeline(&ctx.pipelines.lines),
                }
                render_pass.set_bind_group(
                    1,
                    &self.object_bind_group,
                    &[(i as u64 * OBJECT_UNIFORM_STRIDE) as u32],
                );
                render_pass.draw(
                    range.start_vertex..range.start_vertex + range.vertex_count,
                    0..1,
                );
            }
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
