//! The viewer's control surface.
//!
//! A fixed set of named scalar controls (projection parameters, camera X,
//! heart height) plus two toggles (projection mode, bottle spin). Each
//! scalar is owned by exactly one control. Everything is written from
//! window-event handling and read once per frame by the render pass on the
//! same thread, so a control change is visible by the next tick at the
//! latest.
//!
//! Keyboard mapping: digits select the active scalar, arrow up/down nudge
//! it, `C` switches the projection, `Space` toggles the spin.

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::{Camera, Projection};

/// The scalar currently targeted by the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Near,
    Far,
    Fovy,
    Aspect,
    Left,
    Right,
    Top,
    Bottom,
    CameraX,
    HeartY,
}

impl ControlId {
    /// Step size for one arrow-key nudge.
    fn step(self) -> f32 {
        match self {
            Self::Near | Self::Far => 0.1,
            Self::Fovy => 1.0,
            Self::Aspect => 0.05,
            Self::Left | Self::Right | Self::Top | Self::Bottom => 0.05,
            Self::CameraX => 0.05,
            Self::HeartY => 1.0,
        }
    }
}

/// Shared control state: projection parameters, camera and scene scalars.
#[derive(Debug)]
pub struct Controls {
    pub projection: Projection,
    pub camera: Camera,
    pub heart_y: f32,
    pub spin: bool,
    selected: ControlId,
}

impl Controls {
    pub fn new() -> Self {
        Self {
            projection: Projection::new(),
            camera: Camera::new(),
            heart_y: 50.0,
            spin: true,
            selected: ControlId::Near,
        }
    }

    /// Apply one window event to the control state.
    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } = event
        else {
            return;
        };

        match code {
            KeyCode::Digit1 => self.select(ControlId::Near),
            KeyCode::Digit2 => self.select(ControlId::Far),
            KeyCode::Digit3 => self.select(ControlId::Fovy),
            KeyCode::Digit4 => self.select(ControlId::Aspect),
            KeyCode::Digit5 => self.select(ControlId::Left),
            KeyCode::Digit6 => self.select(ControlId::Right),
            KeyCode::Digit7 => self.select(ControlId::Top),
            KeyCode::Digit8 => self.select(ControlId::Bottom),
            KeyCode::Digit9 => self.select(ControlId::CameraX),
            KeyCode::Digit0 => self.select(ControlId::HeartY),
            KeyCode::ArrowUp => self.adjust(1.0),
            KeyCode::ArrowDown => self.adjust(-1.0),
            KeyCode::KeyC => {
                self.projection.mode = self.projection.mode.toggled();
                log::info!("projection: {:?}", self.projection.mode);
            }
            KeyCode::Space => {
                self.spin = !self.spin;
                log::info!("bottle spin: {}", self.spin);
            }
            _ => {}
        }
    }

    fn select(&mut self, id: ControlId) {
        self.selected = id;
        log::info!("selected control {:?}: {:.2}", id, self.value(id));
    }

    /// Nudge the selected scalar by `sign` steps.
    pub fn adjust(&mut self, sign: f32) {
        let id = self.selected;
        let delta = sign * id.step();
        *self.value_mut(id) += delta;
        log::info!("{:?}: {:.2}", id, self.value(id));
    }

    pub fn value(&self, id: ControlId) -> f32 {
        match id {
            ControlId::Near => self.projection.near,
            ControlId::Far => self.projection.far,
            ControlId::Fovy => self.projection.fovy,
            ControlId::Aspect => self.projection.aspect,
            ControlId::Left => self.projection.left,
            ControlId::Right => self.projection.right,
            ControlId::Top => self.projection.top,
            ControlId::Bottom => self.projection.bottom,
            ControlId::CameraX => self.camera.x,
            ControlId::HeartY => self.heart_y,
        }
    }

    fn value_mut(&mut self, id: ControlId) -> &mut f32 {
        match id {
            ControlId::Near => &mut self.projection.near,
            ControlId::Far => &mut self.projection.far,
            ControlId::Fovy => &mut self.projection.fovy,
            ControlId::Aspect => &mut self.projection.aspect,
            ControlId::Left => &mut self.projection.left,
            ControlId::Right => &mut self.projection.right,
            ControlId::Top => &mut self.projection.top,
            ControlId::Bottom => &mut self.projection.bottom,
            ControlId::CameraX => &mut self.camera.x,
            ControlId::HeartY => &mut self.heart_y,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}
