use super::uniform::CameraUniforms;
use crate::math::{Matrix4D, Vector3D};

/// Clip planes of an off-axis perspective projection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Frustum {
    // Left and right are swapped on purpose: the walkthrough renders mirrored.
    fn default() -> Self {
        Self {
            left: 1.0,
            right: -1.0,
            top: 1.0,
            bottom: -1.0,
            near: 1.0,
            far: 50.0,
        }
    }
}

impl Frustum {
    /// Shrinks the shorter side of the near plane so pixels stay square for
    /// a viewport of the given width / height ratio.
    pub fn fit_aspect(&self, aspect: f32) -> Self {
        if aspect > 1.0 {
            Self {
                top: self.top / aspect,
                bottom: self.bottom / aspect,
                ..*self
            }
        } else if aspect < 1.0 {
            Self {
                left: self.left * aspect,
                right: self.right * aspect,
                ..*self
            }
        } else {
            *self
        }
    }

    pub fn projection_matrix(&self) -> Matrix4D<f32> {
        let Self {
            left,
            right,
            top,
            bottom,
            near,
            far,
        } = *self;

        Matrix4D::from_rows([
            [2.0 * near / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 * near / (top - bottom), 0.0, 0.0],
            [
                (right + left) / (right - left),
                (top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                -1.0,
            ],
            [0.0, 0.0, -2.0 * far * near / (far - near), 0.0],
        ])
    }
}

/// Starting state and step sizes of a walkthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    pub eye: Vector3D<f32>,
    pub view_dir: Vector3D<f32>,
    pub up: Vector3D<f32>,
    pub frustum: Frustum,
    /// Distance covered by one movement key press.
    pub move_step: f32,
    /// Radians turned by one turn key press.
    pub turn_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vector3D::new(-10.0, -13.0, 0.0),
            view_dir: Vector3D::new(1.0, 0.0, 0.0),
            up: Vector3D::new(0.0, 1.0, 0.0),
            frustum: Frustum::default(),
            move_step: 0.2,
            turn_step: std::f32::consts::PI / 110.0,
        }
    }
}

/// Orthonormal camera axes: `n` points backwards from the view direction,
/// `u` is `up x n` and `v` completes the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub u: Vector3D<f32>,
    pub v: Vector3D<f32>,
    pub n: Vector3D<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vector3D<f32>,
    pub view_dir: Vector3D<f32>,
    pub up: Vector3D<f32>,
    pub frustum: Frustum,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            eye: config.eye,
            view_dir: config.view_dir,
            up: config.up,
            frustum: config.frustum,
        }
    }

    pub fn basis(&self) -> ViewBasis {
        let n = -self.view_dir.normalize();
        let u = self.up.cross(&n).normalize();
        let v = n.cross(&u).normalize();
        ViewBasis { u, v, n }
    }

    /// World-to-camera matrix in the row-vector layout: the basis vectors
    /// fill the columns and the eye offset fills the last row.
    pub fn view_matrix(&self) -> Matrix4D<f32> {
        let ViewBasis { u, v, n } = self.basis();
        let mut view = Matrix4D::from_rows([
            [u.dx, v.dx, n.dx, 0.0],
            [u.dy, v.dy, n.dy, 0.0],
            [u.dz, v.dz, n.dz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        self.refresh_view_translation(&mut view);
        view
    }

    /// Rewrites only the eye offset of a view matrix. Enough after the eye
    /// moves while the orientation stays fixed.
    pub fn refresh_view_translation(&self, view: &mut Matrix4D<f32>) {
        let ViewBasis { u, v, n } = self.basis();
        view[12] = -self.eye.dot(&u);
        view[13] = -self.eye.dot(&v);
        view[14] = -self.eye.dot(&n);
    }

    pub fn projection_matrix(&self) -> Matrix4D<f32> {
        self.frustum.projection_matrix()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Down,
    Up,
    TurnLeft,
    TurnRight,
}

impl Key {
    /// Maps the walkthrough keyboard layout (`w s a d [ ]` plus `<` and `>`
    /// for the arrow keys) to keys.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Self::Forward),
            's' => Some(Self::Backward),
            'a' => Some(Self::StrafeLeft),
            'd' => Some(Self::StrafeRight),
            '[' => Some(Self::Down),
            ']' => Some(Self::Up),
            '<' => Some(Self::TurnLeft),
            '>' => Some(Self::TurnRight),
            _ => None,
        }
    }
}

/// Keyboard-driven first-person camera with cached view and projection
/// matrices.
#[derive(Debug, Clone)]
pub struct WalkthroughController {
    camera: Camera,
    config: CameraConfig,
    view: Matrix4D<f32>,
    projection: Matrix4D<f32>,
}

impl Default for WalkthroughController {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl WalkthroughController {
    pub fn new(config: CameraConfig) -> Self {
        let camera = Camera::new(&config);
        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            camera,
            config,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn view(&self) -> &Matrix4D<f32> {
        &self.view
    }

    pub fn projection(&self) -> &Matrix4D<f32> {
        &self.projection
    }

    pub fn on_key(&mut self, key: Key) {
        log::debug!("walkthrough key {:?}", key);
        let step = self.config.move_step;
        let turn = self.config.turn_step;
        match key {
            Key::Forward => self.move_forward(step),
            Key::Backward => self.move_forward(-step),
            // The default frustum is mirrored, so +u shows up on screen left.
            Key::StrafeLeft => self.strafe(step),
            Key::StrafeRight => self.strafe(-step),
            Key::Down => self.rise(-step),
            Key::Up => self.rise(step),
            Key::TurnLeft => self.turn(turn),
            Key::TurnRight => self.turn(-turn),
        }
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.camera.eye += self.camera.view_dir * distance;
        self.eye_moved();
    }

    pub fn strafe(&mut self, distance: f32) {
        let u = self.camera.basis().u;
        self.camera.eye += u * distance;
        self.eye_moved();
    }

    pub fn rise(&mut self, distance: f32) {
        self.camera.eye += self.camera.up * distance;
        self.eye_moved();
    }

    /// Turns the view direction about the world Y axis.
    pub fn turn(&mut self, radians: f32) {
        let mut rotation = Matrix4D::new();
        rotation.rotate_around_y_by(radians);
        self.camera.view_dir = rotation.transform_vector(&self.camera.view_dir);
        self.view = self.camera.view_matrix();
        log::debug!("view direction now {}", self.camera.view_dir);
    }

    /// Refits the frustum to a new framebuffer size and rebuilds the
    /// projection. Degenerate sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        let aspect = width as f32 / height as f32;
        self.camera.frustum = self.config.frustum.fit_aspect(aspect);
        self.projection = self.camera.projection_matrix();
        log::debug!(
            "refit frustum for {}x{} (aspect {:.3}): {:?}",
            width,
            height,
            aspect,
            self.camera.frustum
        );
    }

    pub fn uniforms(&self, model: &Matrix4D<f32>) -> CameraUniforms {
        CameraUniforms::new(model, &self.view, &self.projection)
    }

    fn eye_moved(&mut self) {
        self.camera.refresh_view_translation(&mut self.view);
        log::debug!("eye moved to {}", self.camera.eye);
    }
}
