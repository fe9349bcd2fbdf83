//! Shared vertex buffer packing and the frozen draw-range table.
//!
//! All meshes of the scene live in one GPU buffer: every position list
//! concatenated in push order, followed by every color list in the same
//! order. Each mesh's draw call then addresses a sub-range of the shared
//! position block, and the color attribute stream binds at a single byte
//! offset past the position block.
//!
//! The offset table is computed once here and consumed everywhere; no
//! draw-call site recomputes offsets on its own.

use anyhow::{Result, ensure};

use crate::data_structures::mesh::{Mesh, MeshRole, Topology};

/// Size in bytes of one buffer component.
pub const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

/// Where one mesh lives inside the shared position block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub role: MeshRole,
    pub topology: Topology,
    /// First vertex of this mesh, counted from the start of the block.
    pub start_vertex: u32,
    pub vertex_count: u32,
}

/// Accumulates meshes before the buffer is frozen.
#[derive(Debug, Default)]
pub struct SceneBufferBuilder {
    positions: Vec<f32>,
    colors: Vec<f32>,
    ranges: Vec<DrawRange>,
}

impl SceneBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one mesh's positions and colors, recording its draw range.
    ///
    /// A mesh whose color list does not match its position list is a fatal
    /// configuration error; the color builders always produce equal-length
    /// lists, so hitting this means the mesh was assembled by hand wrongly.
    pub fn push(&mut self, mesh: &Mesh) -> Result<()> {
        ensure!(
            mesh.positions.len() == mesh.colors.len(),
            "{:?}: {} position components but {} color components",
            mesh.role,
            mesh.positions.len(),
            mesh.colors.len()
        );
        ensure!(
            mesh.positions.len() % 3 == 0,
            "{:?}: position list length {} is not a whole number of vertices",
            mesh.role,
            mesh.positions.len()
        );

        self.ranges.push(DrawRange {
            role: mesh.role,
            topology: mesh.topology,
            start_vertex: (self.positions.len() / 3) as u32,
            vertex_count: mesh.vertex_count(),
        });
        self.positions.extend_from_slice(&mesh.positions);
        self.colors.extend_from_slice(&mesh.colors);
        Ok(())
    }

    /// Freeze the buffer: positions first, then colors, plus the offsets
    /// the render pass needs to bind both attribute streams from it.
    pub fn finish(self) -> SceneBuffer {
        let color_offset = (self.positions.len() * FLOAT_SIZE) as u64;
        let mut data = self.positions;
        data.extend_from_slice(&self.colors);
        SceneBuffer {
            data,
            ranges: self.ranges,
            color_offset,
        }
    }
}

/// The packed scene: one upload-ready buffer plus its frozen offset table.
#[derive(Debug)]
pub struct SceneBuffer {
    /// Position block followed by color block, one contiguous upload.
    pub data: Vec<f32>,
    /// Draw ranges in push order; `start_vertex` of entry `k` equals the
    /// sum of the vertex counts of entries `0..k`.
    pub ranges: Vec<DrawRange>,
    /// Byte offset of the color block relative to the start of `data`.
    pub color_offset: u64,
}

impl SceneBuffer {
    /// Look up the draw range of one mesh role.
    pub fn range(&self, role: MeshRole) -> Option<&DrawRange> {
        self.ranges.iter().find(|r| r.role == role)
    }
}
