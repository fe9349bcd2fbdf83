use menagerie::data_structures::layout::FLOAT_SIZE;
use menagerie::data_structures::mesh::{MeshRole, Topology};
use menagerie::resources::{SceneMeshes, pack_scene};

fn triangles(count: usize) -> Vec<f32> {
    (0..count * 9).map(|i| i as f32).collect()
}

fn synthetic_meshes() -> SceneMeshes {
    SceneMeshes {
        bottle: triangles(4),
        cat: triangles(2),
        heart: triangles(3),
        wing: triangles(1),
    }
}

#[test]
fn packs_every_scene_object_in_draw_order() {
    let packed = pack_scene(&synthetic_meshes()).unwrap();

    let order: Vec<MeshRole> = packed.ranges.iter().map(|r| r.role).collect();
    assert_eq!(
        order,
        vec![
            MeshRole::Bottle,
            MeshRole::Cat1,
            MeshRole::Cat2,
            MeshRole::Cat3,
            MeshRole::Heart,
            MeshRole::WingLeft,
            MeshRole::WingRight,
            MeshRole::Grid,
        ]
    );
}

#[test]
fn duplicated_meshes_get_their_own_ranges() {
    let packed = pack_scene(&synthetic_meshes()).unwrap();

    // The cat mesh has 6 vertices; each cat owns a distinct range of 6.
    let cat1 = packed.range(MeshRole::Cat1).unwrap();
    let cat2 = packed.range(MeshRole::Cat2).unwrap();
    let cat3 = packed.range(MeshRole::Cat3).unwrap();
    assert_eq!(cat1.vertex_count, 6);
    assert_eq!(cat2.start_vertex, cat1.start_vertex + 6);
    assert_eq!(cat3.start_vertex, cat2.start_vertex + 6);
}

#[test]
fn color_block_offset_covers_all_positions() {
    let packed = pack_scene(&synthetic_meshes()).unwrap();
    let total_vertices: u32 = packed.ranges.iter().map(|r| r.vertex_count).sum();
    assert_eq!(
        packed.color_offset,
        (total_vertices as usize * 3 * FLOAT_SIZE) as u64
    );
    // Positions and colors are the same size, so the offset halves the data.
    assert_eq!(
        packed.data.len(),
        2 * packed.color_offset as usize / FLOAT_SIZE
    );
}

#[test]
fn only_the_grid_draws_as_lines() {
    let packed = pack_scene(&synthetic_meshes()).unwrap();
    for range in &packed.ranges {
        let expected = if range.role == MeshRole::Grid {
            Topology::LineList
        } else {
            Topology::TriangleList
        };
        assert_eq!(range.topology, expected, "{:?}", range.role);
    }
}

#[test]
fn wing_shade_ramp_spans_both_wings() {
    let packed = pack_scene(&synthetic_meshes()).unwrap();
    let left = packed.range(MeshRole::WingLeft).unwrap();
    let right = packed.range(MeshRole::WingRight).unwrap();

    let color_base = packed.color_offset as usize / FLOAT_SIZE;
    let left_first = packed.data[color_base + left.start_vertex as usize * 3];
    let right_first = packed.data[color_base + right.start_vertex as usize * 3];

    // One triangle per wing: the joint ramp gives shades 0/6 and 3/6.
    assert!((left_first - 0.0).abs() < 1e-6);
    assert!((right_first - 0.5).abs() < 1e-6);
}
