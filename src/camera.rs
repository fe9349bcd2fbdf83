//! Camera placement and the switchable projection.
//!
//! The camera itself only translates along X (slider-driven); the
//! projection is either orthographic or perspective, each fed by its own
//! parameter set, with a mode flag selecting which one produces the active
//! matrix each frame.

use cgmath::{Deg, Matrix4, Vector3, ortho, perspective};

/// cgmath produces OpenGL clip space (z in -1..1); wgpu expects z in 0..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Which parameter set produces the active projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Orthographic => Self::Perspective,
            Self::Perspective => Self::Orthographic,
        }
    }
}

/// The full projection parameter state.
///
/// Near and far are shared between the modes; left/right/bottom/top feed
/// the orthographic frustum, fovy/aspect the perspective one. Each scalar
/// is owned by exactly one UI control.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub mode: ProjectionMode,
    pub near: f32,
    pub far: f32,
    pub fovy: f32,
    pub aspect: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Projection {
    pub fn new() -> Self {
        Self {
            mode: ProjectionMode::Orthographic,
            near: 0.8,
            far: 4.0,
            fovy: 90.0,
            aspect: 1.0,
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
        }
    }

    /// The active projection matrix in wgpu clip space.
    pub fn matrix(&self) -> Matrix4<f32> {
        let projection = match self.mode {
            ProjectionMode::Orthographic => ortho(
                self.left,
                self.right,
                self.bottom,
                self.top,
                self.near,
                self.far,
            ),
            ProjectionMode::Perspective => {
                perspective(Deg(self.fovy), self.aspect, self.near, self.far)
            }
        };
        OPENGL_TO_WGPU_MATRIX * projection
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new()
    }
}

/// The viewer camera: a slider-driven translation along X.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self { x: 0.0 }
    }

    /// Moving the camera right moves the world left.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(-self.x, 0.0, 0.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera and projection matrices in shader-upload form.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    camera: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            camera: Matrix4::identity().into(),
            projection: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.camera = camera.view_matrix().into();
        self.projection = projection.matrix().into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}
