//! Scene data models: meshes, colors, the packed vertex buffer and the
//! animated transform set.
//!
//! - `mesh` names the scene's geometry roles and holds position/color pairs
//! - `color` generates per-vertex colors from a closed policy enum
//! - `grid` procedurally builds the ground-plane line grid
//! - `layout` packs all meshes into one buffer and freezes the offset table
//! - `scene` owns per-object model matrices and the per-tick animation
//! - `texture` wraps the depth texture used by the render pass

pub mod color;
pub mod grid;
pub mod layout;
pub mod mesh;
pub mod scene;
pub mod texture;
