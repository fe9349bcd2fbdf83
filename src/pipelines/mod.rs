//! Render pipeline construction.
//!
//! The viewer needs exactly two pipelines, one per primitive topology:
//! triangle lists for the meshes and line lists for the grid.

pub mod scene;

/// The pipelines the render pass switches between.
#[derive(Debug)]
pub struct ScenePipelines {
    pub triangles: wgpu::RenderPipeline,
    pub lines: wgpu::RenderPipeline,
}

impl ScenePipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        object_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let triangles = scene::mk_scene_pipeline(
            device,
            config,
            camera_bind_group_layout,
            object_bind_group_layout,
            wgpu::PrimitiveTopology::TriangleList,
        );
        let lines = scene::mk_scene_pipeline(
            device,
            config,
            camera_bind_group_layout,
            object_bind_group_layout,
            wgpu::PrimitiveTopology::LineList,
        );
        Self { triangles, lines }
    }
}
