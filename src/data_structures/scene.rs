//! Scene objects, their model matrices and the per-tick animation step.
//!
//! Matrices compose in the original placement order, scale then translate
//! then rotate, applied left to right to each vertex. Animated objects
//! other than the bottle are rebuilt from their base parameters every
//! tick; the bottle instead composes a small incremental rotation onto its
//! existing matrix, which accumulates floating-point drift over a long
//! session. That drift is accepted, not corrected.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};
use instant::Duration;

use crate::data_structures::grid::GRID_Y_OFFSET;
use crate::data_structures::mesh::MeshRole;

/// Bottle spin speed in degrees per millisecond.
pub const ROTATION_SPEED: f32 = 0.15;

/// Wing flap increment per tick, in degrees.
pub const FLAP_STEP: f32 = 0.5;
/// The flap angle reflects when its magnitude reaches this bound.
pub const FLAP_MAX_ANGLE: f32 = 25.0;

const SOLID_SCALE: f32 = 0.012;
const WING_SCALE: f32 = 0.01;

/// Bounded oscillation state for the wing flap.
///
/// The angle and direction persist across ticks; the direction is negated
/// whenever the angle reaches the bound, so the angle sweeps back and
/// forth within `[-FLAP_MAX_ANGLE, FLAP_MAX_ANGLE]`.
#[derive(Debug, Clone, Copy)]
pub struct FlapState {
    pub angle: f32,
    pub direction: f32,
}

impl FlapState {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            direction: 1.0,
        }
    }

    /// Advance one tick and return the current angle.
    pub fn advance(&mut self) -> f32 {
        self.angle += self.direction * FLAP_STEP;
        if self.angle.abs() >= FLAP_MAX_ANGLE {
            self.direction = -self.direction;
        }
        self.angle
    }
}

impl Default for FlapState {
    fn default() -> Self {
        Self::new()
    }
}

/// All per-object transforms plus the shared world matrix.
///
/// Mutated once per tick by [`Scene::tick`], read-only during the render
/// pass. There is no global state; the render pass receives `&Scene`.
#[derive(Debug)]
pub struct Scene {
    pub bottle: Matrix4<f32>,
    pub cats: [Matrix4<f32>; 3],
    pub heart: Matrix4<f32>,
    pub wings: [Matrix4<f32>; 2],
    pub world: Matrix4<f32>,
    /// Mirrors the spin toggle; while false the bottle matrix is frozen.
    pub spin_enabled: bool,
    pub flap: FlapState,
}

impl Scene {
    pub fn new() -> Self {
        let solid_scale = Matrix4::from_scale(SOLID_SCALE);

        let bottle = solid_scale * Matrix4::from_translation(Vector3::new(0.0, -20.0, -110.0));

        // The cats ring the spinning bottle, each turned to face its spot.
        let cats = [
            solid_scale
                * Matrix4::from_translation(Vector3::new(0.0, -20.0, -140.0))
                * Matrix4::from_angle_y(Deg(0.0)),
            solid_scale
                * Matrix4::from_translation(Vector3::new(-55.0, -20.0, -90.0))
                * Matrix4::from_angle_y(Deg(90.0)),
            solid_scale
                * Matrix4::from_translation(Vector3::new(55.0, -20.0, -90.0))
                * Matrix4::from_angle_y(Deg(-90.0)),
        ];

        let mut scene = Self {
            bottle,
            cats,
            heart: Matrix4::identity(),
            wings: [Matrix4::identity(); 2],
            world: Matrix4::identity(),
            spin_enabled: true,
            flap: FlapState::new(),
        };
        // The heart and wings start at the default slider height.
        scene.rebuild_animated(50.0, 0.0);
        scene
    }

    /// Advance the animation by one frame tick.
    ///
    /// `dt` is the wall-clock time since the previous tick and `heart_y`
    /// the current height control value. The bottle rotation is scaled by
    /// elapsed time; the flap advances one fixed step per tick.
    pub fn tick(&mut self, dt: Duration, heart_y: f32) {
        if self.spin_enabled {
            let angle = ROTATION_SPEED * dt.as_secs_f32() * 1000.0;
            self.bottle = self.bottle * Matrix4::from_angle_y(Deg(angle));
        }

        let flap_angle = self.flap.advance();
        self.rebuild_animated(heart_y, flap_angle);
    }

    /// Recompute the height- and flap-driven matrices from base parameters.
    fn rebuild_animated(&mut self, heart_y: f32, flap_angle: f32) {
        self.heart = Matrix4::from_scale(SOLID_SCALE)
            * Matrix4::from_translation(Vector3::new(0.0, heart_y - 20.0, -90.0))
            * Matrix4::from_angle_x(Deg(-90.0));

        let wing_scale = Matrix4::from_scale(WING_SCALE);
        self.wings = [
            wing_scale
                * Matrix4::from_translation(Vector3::new(17.0, heart_y, -105.0))
                * Matrix4::from_angle_y(Deg(-20.0 - flap_angle)),
            wing_scale
                * Matrix4::from_translation(Vector3::new(-17.0, heart_y, -105.0))
                * Matrix4::from_angle_y(Deg(-(160.0 - flap_angle))),
        ];
    }

    /// The model matrix to upload before drawing `role`'s range.
    pub fn model_matrix(&self, role: MeshRole) -> Matrix4<f32> {
        match role {
            MeshRole::Bottle => self.bottle,
            MeshRole::Cat1 => self.cats[0],
            MeshRole::Cat2 => self.cats[1],
            MeshRole::Cat3 => self.cats[2],
            MeshRole::Heart => self.heart,
            MeshRole::WingLeft => self.wings[0],
            MeshRole::WingRight => self.wings[1],
            MeshRole::Grid => Matrix4::identity(),
        }
    }

    /// The world matrix to upload before drawing `role`'s range.
    ///
    /// Only the grid deviates from the shared world matrix: it carries its
    /// fixed Y offset so the meshes rest on it.
    pub fn world_matrix(&self, role: MeshRole) -> Matrix4<f32> {
        match role {
            MeshRole::Grid => Matrix4::from_translation(Vector3::new(0.0, GRID_Y_OFFSET, 0.0)),
            _ => self.world,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
