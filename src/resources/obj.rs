//! Line-oriented OBJ-subset reader.
//!
//! Only two line kinds are meaningful: `v x y z` (a vertex position) and
//! `f a b c ...` (a face referencing previously defined vertices, 1-based).
//! Faces are expanded into absolute position triples on the spot so that
//! downstream consumers always see flat, non-indexed triangle data.

/// Append the flattened triangle data of `source` into `buffer`.
///
/// The output container is caller-provided so repeated loads can
/// concatenate into one shared position list. Unknown or malformed lines
/// are skipped. Faces with more than 3 indices are triangulated as a fan
/// around the first vertex, so the output length stays a multiple of 9.
///
/// A face referencing a vertex index outside the range defined so far is
/// dropped as a whole face with a warning; nothing of the face is emitted.
pub fn read_obj_file(source: &str, buffer: &mut Vec<f32>) {
    // Positions seen so far in this call, indexed 1-based by face lines.
    let mut vertices: Vec<[f32; 3]> = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let coords: Vec<f32> = tokens
                    .take(3)
                    .filter_map(|t| t.parse::<f32>().ok())
                    .collect();
                if let [x, y, z] = coords[..] {
                    vertices.push([x, y, z]);
                }
            }
            Some("f") => {
                let indices: Vec<usize> =
                    tokens.filter_map(|t| parse_face_index(t)).collect();
                if indices.len() < 3 {
                    continue;
                }
                if let Some(&bad) = indices.iter().find(|&&i| i == 0 || i > vertices.len()) {
                    log::warn!(
                        "skipping face on line {}: vertex index {} out of range (1..={})",
                        line_no + 1,
                        bad,
                        vertices.len()
                    );
                    continue;
                }
                // Fan triangulation handles quads and larger n-gons too.
                for i in 1..indices.len() - 1 {
                    for &idx in &[indices[0], indices[i], indices[i + 1]] {
                        buffer.extend_from_slice(&vertices[idx - 1]);
                    }
                }
            }
            _ => continue,
        }
    }
}

/// Extract the position index of a face token.
///
/// OBJ face tokens may carry texture/normal references (`7/1/3`); only the
/// leading position index matters here.
fn parse_face_index(token: &str) -> Option<usize> {
    token.split('/').next()?.parse::<usize>().ok()
}
