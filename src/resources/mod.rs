//! Loading and assembling the scene's meshes.
//!
//! Mesh files load sequentially ahead of the first frame; a failed load is
//! terminal for the session. Once loaded, `pack_scene` colors every mesh
//! by its role and freezes the shared vertex buffer.

use anyhow::{Context, Result};

use crate::data_structures::{
    color::{self, ColorPolicy, MonoVariant, build_color_attributes},
    grid::build_grid_attributes,
    layout::{SceneBuffer, SceneBufferBuilder},
    mesh::{Mesh, MeshRole, Topology},
};

pub mod obj;

/// Read one asset file to a string.
///
/// Assets resolve relative to `./assets`, overridable with the
/// `MENAGERIE_ASSETS` environment variable.
pub async fn load_string(file_name: &str) -> Result<String> {
    let base = std::env::var("MENAGERIE_ASSETS").unwrap_or_else(|_| "assets".to_string());
    let path = std::path::Path::new(&base).join(file_name);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read mesh file {}", path.display()))?;
    Ok(text)
}

/// The raw position lists of the scene, one per mesh file.
///
/// The cat and wing meshes are loaded once each; packing duplicates them
/// per object.
#[derive(Debug)]
pub struct SceneMeshes {
    pub bottle: Vec<f32>,
    pub cat: Vec<f32>,
    pub heart: Vec<f32>,
    pub wing: Vec<f32>,
}

/// Load all mesh files in sequence.
pub async fn load_scene_meshes() -> Result<SceneMeshes> {
    let mut bottle = Vec::new();
    obj::read_obj_file(&load_string("wine2.obj").await?, &mut bottle);

    let mut cat = Vec::new();
    obj::read_obj_file(&load_string("cat.obj").await?, &mut cat);

    let mut heart = Vec::new();
    obj::read_obj_file(&load_string("heart.obj").await?, &mut heart);

    let mut wing = Vec::new();
    obj::read_obj_file(&load_string("wing.obj").await?, &mut wing);

    log::info!(
        "loaded meshes: bottle {} verts, cat {} verts, heart {} verts, wing {} verts",
        bottle.len() / 3,
        cat.len() / 3,
        heart.len() / 3,
        wing.len() / 3
    );

    Ok(SceneMeshes {
        bottle,
        cat,
        heart,
        wing,
    })
}

/// Color every mesh by its role and pack the whole scene into one buffer.
pub fn pack_scene(meshes: &SceneMeshes) -> Result<SceneBuffer> {
    let mut builder = SceneBufferBuilder::new();

    builder.push(&Mesh::triangles(
        MeshRole::Bottle,
        meshes.bottle.clone(),
        &ColorPolicy::Solid([1.0, 0.0, 0.0]),
    )?)?;

    // All three cats share one geometry; each copy gets its own fur.
    builder.push(&Mesh::triangles(
        MeshRole::Cat1,
        meshes.cat.clone(),
        &ColorPolicy::GradientMono(MonoVariant::Gray),
    )?)?;
    builder.push(&Mesh::triangles(
        MeshRole::Cat2,
        meshes.cat.clone(),
        &ColorPolicy::RandomCategorical(color::calico_palette()),
    )?)?;
    builder.push(&Mesh::triangles(
        MeshRole::Cat3,
        meshes.cat.clone(),
        &ColorPolicy::GradientTinted {
            weights: [0.8, 0.6, 0.4],
            offsets: [0.3, 0.3, 0.2],
        },
    )?)?;

    builder.push(&Mesh::triangles(
        MeshRole::Heart,
        meshes.heart.clone(),
        &ColorPolicy::GradientTinted {
            weights: [0.0, -0.1, 0.3],
            offsets: [0.7, 0.15, 0.2],
        },
    )?)?;

    // The wings' shade ramp runs across both wings together, so the colors
    // are built for the doubled vertex count and split between the copies.
    let wing_verts = meshes.wing.len() / 3;
    let mut wing_colors = build_color_attributes(
        wing_verts * 2,
        &ColorPolicy::GradientMono(MonoVariant::Gray),
    );
    let right_colors = wing_colors.split_off(meshes.wing.len());
    builder.push(&Mesh::new(
        MeshRole::WingLeft,
        Topology::TriangleList,
        meshes.wing.clone(),
        wing_colors,
    )?)?;
    builder.push(&Mesh::new(
        MeshRole::WingRight,
        Topology::TriangleList,
        meshes.wing.clone(),
        right_colors,
    )?)?;

    let (grid_positions, grid_colors) = build_grid_attributes(1.0, 1.0, [0.0, 1.0, 0.0]);
    builder.push(&Mesh::new(
        MeshRole::Grid,
        Topology::LineList,
        grid_positions,
        grid_colors,
    )?)?;

    Ok(builder.finish())
}
