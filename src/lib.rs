//! menagerie
//!
//! A small interactive 3D scene viewer. A handful of OBJ meshes (a wine
//! bottle, three cats, a heart and its wings) are parsed into flat
//! triangle data, colored per role, packed into one shared vertex buffer
//! with a frozen offset table, and drawn each frame as one sub-range draw
//! call per object under a switchable orthographic or perspective
//! projection.
//!
//! High-level modules
//! - `camera`: camera translation, projection parameter sets and uniforms
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `controls`: the named scalar controls and toggles of the UI surface
//! - `data_structures`: meshes, coloring policies, buffer packing, scene
//! - `flow`: the winit application loop driving per-frame ticks
//! - `pipelines`: triangle-list and line-list render pipelines
//! - `render`: uploaded scene buffers and the ranged-draw render pass
//! - `resources`: OBJ parsing and sequential mesh loading
//!

pub mod camera;
pub mod context;
pub mod controls;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::WindowEvent;
