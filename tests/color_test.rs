use menagerie::data_structures::color::{
    ColorPolicy, MonoVariant, build_color_attributes, build_color_attributes_with,
    calico_palette,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn all_policies() -> Vec<ColorPolicy> {
    vec![
        ColorPolicy::Solid([1.0, 0.0, 0.0]),
        ColorPolicy::GradientMono(MonoVariant::Gray),
        ColorPolicy::GradientMono(MonoVariant::Blue),
        ColorPolicy::GradientTinted {
            weights: [0.8, 0.6, 0.4],
            offsets: [0.3, 0.3, 0.2],
        },
        ColorPolicy::RandomCategorical(calico_palette()),
    ]
}

#[test]
fn output_length_matches_vertex_count() {
    for policy in all_policies() {
        for n in [0, 3, 9, 30, 300] {
            let colors = build_color_attributes(n, &policy);
            assert_eq!(colors.len(), n * 3, "policy {:?}, n {}", policy, n);
        }
    }
}

#[test]
fn components_stay_in_unit_range() {
    for policy in all_policies() {
        let colors = build_color_attributes(300, &policy);
        for c in colors {
            assert!((0.0..=1.0).contains(&c), "{} out of range for {:?}", c, policy);
        }
    }
}

#[test]
fn triangles_are_flat_shaded() {
    for policy in all_policies() {
        let colors = build_color_attributes(30, &policy);
        for tri in colors.chunks(9) {
            assert_eq!(tri[0..3], tri[3..6], "policy {:?}", policy);
            assert_eq!(tri[3..6], tri[6..9], "policy {:?}", policy);
        }
    }
}

#[test]
fn gradient_shades_ramp_per_triangle() {
    // 3 triangles: shades 0/9, 3/9 and 6/9.
    let colors = build_color_attributes(9, &ColorPolicy::GradientMono(MonoVariant::Gray));
    let expected = [0.0, 3.0 / 9.0, 6.0 / 9.0];
    for (i, shade) in expected.iter().enumerate() {
        for vert in 0..3 {
            let base = (i * 3 + vert) * 3;
            assert!((colors[base] - shade).abs() < 1e-6);
            assert!((colors[base + 1] - shade).abs() < 1e-6);
            assert!((colors[base + 2] - shade).abs() < 1e-6);
        }
    }
}

#[test]
fn blue_variant_pins_the_blue_channel() {
    let colors = build_color_attributes(9, &ColorPolicy::GradientMono(MonoVariant::Blue));
    for triple in colors.chunks(3) {
        assert_eq!(triple[2], 1.0);
        assert_eq!(triple[0], triple[1]);
    }
}

#[test]
fn tinted_channels_are_affine_in_the_shade() {
    let weights = [0.0, -0.1, 0.3];
    let offsets = [0.7, 0.15, 0.2];
    let colors = build_color_attributes(9, &ColorPolicy::GradientTinted { weights, offsets });
    for (i, triple) in colors.chunks(3).enumerate() {
        let shade = ((i / 3) * 3) as f32 / 9.0;
        for c in 0..3 {
            let expected = (weights[c] * shade + offsets[c]).clamp(0.0, 1.0);
            assert!((triple[c] - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn tinted_output_clamps_out_of_range_channels() {
    let colors = build_color_attributes(
        30,
        &ColorPolicy::GradientTinted {
            weights: [2.0, -2.0, 0.0],
            offsets: [0.5, 0.5, 1.5],
        },
    );
    for triple in colors.chunks(3) {
        assert!((0.0..=1.0).contains(&triple[0]));
        assert!((0.0..=1.0).contains(&triple[1]));
        assert_eq!(triple[2], 1.0);
    }
}

#[test]
fn categorical_colors_come_from_the_palette() {
    let palette = calico_palette();
    let colors = build_color_attributes(300, &ColorPolicy::RandomCategorical(palette.clone()));
    for triple in colors.chunks(3) {
        let color = [triple[0], triple[1], triple[2]];
        assert!(palette.contains(&color), "{:?} not in palette", color);
    }
}

#[test]
fn categorical_draws_are_reproducible_with_a_seeded_rng() {
    let policy = ColorPolicy::RandomCategorical(calico_palette());
    let a = build_color_attributes_with(90, &policy, &mut StdRng::seed_from_u64(7));
    let b = build_color_attributes_with(90, &policy, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn partial_trailing_triangle_repeats_the_last_color() {
    let colors = build_color_attributes(4, &ColorPolicy::Solid([0.2, 0.4, 0.6]));
    assert_eq!(colors.len(), 12);
    assert_eq!(&colors[9..12], &[0.2, 0.4, 0.6]);
}
