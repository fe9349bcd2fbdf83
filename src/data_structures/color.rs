//! Per-vertex color generation.
//!
//! Colors are generated per triangle, never interpolated per vertex: all
//! 3 vertices of a triangle share one color so the mesh renders with flat
//! facets. The policy selecting the look is a closed enum, one case per
//! coloring scheme the scene uses.

use rand::Rng;

/// Sub-variant of [`ColorPolicy::GradientMono`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonoVariant {
    /// `(shade, shade, shade)`
    Gray,
    /// `(shade, shade, 1.0)`
    Blue,
}

/// How a mesh gets its per-vertex colors.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorPolicy {
    /// Every vertex gets the same color.
    Solid([f32; 3]),
    /// Triangle `i` of `n` gets shade `(i * 3) / vertex_count`.
    GradientMono(MonoVariant),
    /// Per-channel affine function of the shade, clamped into `[0, 1]`.
    GradientTinted {
        weights: [f32; 3],
        offsets: [f32; 3],
    },
    /// Each triangle draws one uniform sample and maps it to a palette
    /// entry. Not seeded by default; see
    /// [`build_color_attributes_with`] for a deterministic source.
    RandomCategorical(Vec<[f32; 3]>),
}

/// Build `vertex_count` RGB triples for `policy` using the thread rng.
pub fn build_color_attributes(vertex_count: usize, policy: &ColorPolicy) -> Vec<f32> {
    build_color_attributes_with(vertex_count, policy, &mut rand::rng())
}

/// Build `vertex_count` RGB triples for `policy` with an injected random
/// source.
///
/// Output length is always exactly `vertex_count` triples, every component
/// in `[0, 1]`, and every run of 3 consecutive triples identical. For a
/// vertex count that is not a whole number of triangles the trailing
/// partial run repeats the last triangle's color.
pub fn build_color_attributes_with<R: Rng>(
    vertex_count: usize,
    policy: &ColorPolicy,
    rng: &mut R,
) -> Vec<f32> {
    let mut colors = Vec::with_capacity(vertex_count * 3);
    let triangle_count = vertex_count.div_ceil(3);

    for i in 0..triangle_count {
        let shade = (i * 3) as f32 / vertex_count as f32;
        let color = match policy {
            ColorPolicy::Solid(color) => *color,
            ColorPolicy::GradientMono(MonoVariant::Gray) => [shade, shade, shade],
            ColorPolicy::GradientMono(MonoVariant::Blue) => [shade, shade, 1.0],
            ColorPolicy::GradientTinted { weights, offsets } => [
                (weights[0] * shade + offsets[0]).clamp(0.0, 1.0),
                (weights[1] * shade + offsets[1]).clamp(0.0, 1.0),
                (weights[2] * shade + offsets[2]).clamp(0.0, 1.0),
            ],
            ColorPolicy::RandomCategorical(palette) => {
                let sample: f32 = rng.random();
                let slot = ((sample * palette.len() as f32) as usize).min(palette.len() - 1);
                palette[slot]
            }
        };
        // Three vertices per triangle, capped so the output length matches
        // the requested vertex count exactly.
        let remaining = vertex_count - i * 3;
        for _ in 0..remaining.min(3) {
            colors.extend_from_slice(&color);
        }
    }

    colors
}

/// The calico fur palette of the randomized cat: white, near-black, orange.
pub fn calico_palette() -> Vec<[f32; 3]> {
    vec![[1.0, 1.0, 1.0], [0.1, 0.1, 0.1], [1.0, 0.5, 0.2]]
}
