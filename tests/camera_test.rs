use menagerie::camera::{Camera, Projection, ProjectionMode};
use menagerie::controls::{ControlId, Controls};

#[test]
fn default_projection_matches_the_startup_sliders() {
    let p = Projection::new();
    assert_eq!(p.mode, ProjectionMode::Orthographic);
    assert_eq!((p.near, p.far), (0.8, 4.0));
    assert_eq!((p.left, p.right, p.bottom, p.top), (-1.0, 1.0, -1.0, 1.0));
    assert_eq!((p.fovy, p.aspect), (90.0, 1.0));
}

#[test]
fn mode_toggle_switches_the_matrix_family() {
    let mut p = Projection::new();
    let ortho: [[f32; 4]; 4] = p.matrix().into();
    // An orthographic matrix has no perspective divide.
    assert_eq!(ortho[3][3], 1.0);

    p.mode = p.mode.toggled();
    assert_eq!(p.mode, ProjectionMode::Perspective);
    let persp: [[f32; 4]; 4] = p.matrix().into();
    assert_eq!(persp[3][3], 0.0);

    assert_eq!(p.mode.toggled(), ProjectionMode::Orthographic);
}

#[test]
fn camera_translates_the_world_opposite_to_its_x() {
    let camera = Camera { x: 2.5 };
    let view: [[f32; 4]; 4] = camera.view_matrix().into();
    assert_eq!(view[3][0], -2.5);
    assert_eq!(view[3][1], 0.0);
    assert_eq!(view[3][2], 0.0);
}

#[test]
fn controls_start_at_the_original_defaults() {
    let controls = Controls::new();
    assert_eq!(controls.heart_y, 50.0);
    assert!(controls.spin);
    assert_eq!(controls.camera.x, 0.0);
    assert_eq!(controls.value(ControlId::Near), 0.8);
    assert_eq!(controls.value(ControlId::HeartY), 50.0);
}

#[test]
fn adjusting_nudges_the_selected_scalar() {
    let mut controls = Controls::new();
    // Near is selected by default.
    controls.adjust(1.0);
    assert!((controls.value(ControlId::Near) - 0.9).abs() < 1e-6);
    controls.adjust(-1.0);
    assert!((controls.value(ControlId::Near) - 0.8).abs() < 1e-6);
}
