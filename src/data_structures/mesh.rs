//! Scene mesh model: a named geometry role, its flattened positions and
//! the parallel per-vertex color list.

use anyhow::{Result, ensure};

use crate::data_structures::color::{ColorPolicy, build_color_attributes};

/// Which scene object a mesh (or a packed copy of one) belongs to.
///
/// The cat mesh is loaded once but packed three times, one role per cat,
/// because each copy carries its own color list and draw range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshRole {
    Bottle,
    Cat1,
    Cat2,
    Cat3,
    Heart,
    WingLeft,
    WingRight,
    Grid,
}

/// Primitive interpretation of a mesh's vertex stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every 3 consecutive vertices form a triangle.
    TriangleList,
    /// Every 2 consecutive vertices form an independent line segment.
    LineList,
}

/// An immutable mesh: built once at load time, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub role: MeshRole,
    pub topology: Topology,
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl Mesh {
    /// Wrap already-colored geometry, checking the parallel-list invariant.
    pub fn new(
        role: MeshRole,
        topology: Topology,
        positions: Vec<f32>,
        colors: Vec<f32>,
    ) -> Result<Self> {
        ensure!(
            positions.len() % 3 == 0,
            "{:?}: position list length {} is not a whole number of vertices",
            role,
            positions.len()
        );
        ensure!(
            positions.len() == colors.len(),
            "{:?}: {} position components but {} color components",
            role,
            positions.len(),
            colors.len()
        );
        Ok(Self {
            role,
            topology,
            positions,
            colors,
        })
    }

    /// Build a triangle mesh from raw positions, coloring it with `policy`.
    pub fn triangles(role: MeshRole, positions: Vec<f32>, policy: &ColorPolicy) -> Result<Self> {
        let colors = build_color_attributes(positions.len() / 3, policy);
        Self::new(role, Topology::TriangleList, positions, colors)
    }

    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }
}
