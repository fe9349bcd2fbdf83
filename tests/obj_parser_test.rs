use menagerie::resources::obj::read_obj_file;

const TRIANGLE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";

#[test]
fn expands_faces_into_flat_triples() {
    let mut buffer = Vec::new();
    read_obj_file(TRIANGLE, &mut buffer);
    assert_eq!(
        buffer,
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
}

#[test]
fn output_is_whole_triangles() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 2 4 3
";
    let mut buffer = Vec::new();
    read_obj_file(source, &mut buffer);
    assert_eq!(buffer.len() % 9, 0);
    assert_eq!(buffer.len(), 18);
}

#[test]
fn faces_may_reuse_vertices_in_any_order() {
    let source = "\
v 1 2 3
v 4 5 6
v 7 8 9
f 3 1 2
";
    let mut buffer = Vec::new();
    read_obj_file(source, &mut buffer);
    assert_eq!(buffer, vec![7.0, 8.0, 9.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn ignores_unknown_line_kinds() {
    let source = "\
# a comment
mtllib cat.mtl
vn 0 1 0
vt 0.5 0.5
v 0 0 0
v 1 0 0
v 0 1 0
s off
f 1 2 3
";
    let mut buffer = Vec::new();
    read_obj_file(source, &mut buffer);
    assert_eq!(buffer.len(), 9);
}

#[test]
fn slash_tokens_use_the_position_index() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1/1/1 2/2/2 3/3/3
";
    let mut with_slashes = Vec::new();
    read_obj_file(source, &mut with_slashes);

    let mut bare = Vec::new();
    read_obj_file(TRIANGLE, &mut bare);

    assert_eq!(with_slashes, bare);
}

#[test]
fn ngons_triangulate_as_a_fan() {
    let source = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
    let mut buffer = Vec::new();
    read_obj_file(source, &mut buffer);
    // A quad becomes two triangles sharing the first vertex.
    assert_eq!(buffer.len(), 18);
    assert_eq!(&buffer[0..3], &[0.0, 0.0, 0.0]);
    assert_eq!(&buffer[9..12], &[0.0, 0.0, 0.0]);
    assert_eq!(&buffer[3..6], &[1.0, 0.0, 0.0]);
    assert_eq!(&buffer[12..15], &[1.0, 1.0, 0.0]);
}

#[test]
fn out_of_range_face_is_skipped_deterministically() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 9
f 1 2 3
";
    // The bad face contributes nothing, the good face everything, on
    // every run.
    for _ in 0..3 {
        let mut buffer = Vec::new();
        read_obj_file(source, &mut buffer);
        assert_eq!(buffer.len(), 9);
        assert_eq!(&buffer[6..9], &[0.0, 1.0, 0.0]);
    }
}

#[test]
fn zero_index_face_is_skipped() {
    let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 0 1 2
";
    let mut buffer = Vec::new();
    read_obj_file(source, &mut buffer);
    assert!(buffer.is_empty());
}

#[test]
fn repeated_reads_append_into_the_same_container() {
    let mut buffer = Vec::new();
    read_obj_file(TRIANGLE, &mut buffer);
    read_obj_file(TRIANGLE, &mut buffer);
    assert_eq!(buffer.len(), 18);
    assert_eq!(buffer[0..9], buffer[9..18]);
}

#[test]
fn malformed_vertex_lines_are_skipped() {
    let source = "\
v 0 0
v one two three
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";
    let mut buffer = Vec::new();
    read_obj_file(source, &mut buffer);
    // Only the three well-formed vertices count; the face references them.
    assert_eq!(buffer, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}
