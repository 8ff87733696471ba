/// Camera state and input-driven movement.
/// Rays leave from `position`; only the vertical rotation component bends
/// them (pitch-only view, no yaw or roll).
use glam::Vec3;
use std::f32::consts::PI;

pub struct Camera {
    pub position: Vec3,
    /// Accumulated rotation in radians. Ray generation reads only the y
    /// component (pitch).
    pub rotation: Vec3,
    /// Field of view in degrees.
    pub fov: f32,

    aspect_ratio: f32,
    inv_width: f32,
    inv_height: f32,
}

impl Camera {
    pub fn new(position: Vec3, width: usize, height: usize, fov: f32) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            fov,
            aspect_ratio: width as f32 / height as f32,
            inv_width: 1.0 / width as f32,
            inv_height: 1.0 / height as f32,
        }
    }

    /// Accumulate a translation delta. Called once per frame, before any
    /// sampling starts.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Accumulate a rotation delta (radians). Same single-writer timing
    /// as `translate`.
    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    /// Tangent of the half field of view. Constant across a frame, so the
    /// renderer hoists it out of the pixel loop.
    #[inline]
    pub fn fov_tangent(&self) -> f32 {
        (PI * 0.5 * self.fov / 180.0).tan()
    }

    /// Normalized ray through the center of pixel (x, y). `angle` is
    /// `fov_tangent()` computed once per frame.
    #[inline]
    pub fn primary_ray(&self, x: usize, y: usize, angle: f32) -> Vec3 {
        let xx = (2.0 * ((x as f32 + 0.5) * self.inv_width) - 1.0) * angle * self.aspect_ratio;
        let yy = (1.0 - 2.0 * ((y as f32 + 0.5) * self.inv_height)) * angle;

        // Pitch only: rotate the (y, z = 1) pair.
        let (sin_p, cos_p) = self.rotation.y.sin_cos();

        Vec3::new(xx, yy * cos_p - sin_p, yy * sin_p + cos_p).normalize()
    }
}

/// Held-key state mapped to constant per-frame movement deltas.
/// The scene only ever sees the two vectors this produces; how they were
/// generated is input-layer detail it has no knowledge of.
pub struct CameraController {
    pub forward_pressed: bool,
    pub backward_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub up_pressed: bool,
    pub down_pressed: bool,
    pub turn_left_pressed: bool,
    pub turn_right_pressed: bool,
    pub pitch_up_pressed: bool,
    pub pitch_down_pressed: bool,

    pub move_speed: f32,
    pub rotate_speed: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            forward_pressed: false,
            backward_pressed: false,
            left_pressed: false,
            right_pressed: false,
            up_pressed: false,
            down_pressed: false,
            turn_left_pressed: false,
            turn_right_pressed: false,
            pitch_up_pressed: false,
            pitch_down_pressed: false,
            move_speed: 0.5,
            rotate_speed: 0.1,
        }
    }

    /// Translation delta for this frame: constant while a key is held,
    /// zero otherwise.
    pub fn translation(&self) -> Vec3 {
        let mut delta = Vec3::ZERO;

        if self.forward_pressed {
            delta.z += self.move_speed;
        }
        if self.backward_pressed {
            delta.z -= self.move_speed;
        }
        if self.right_pressed {
            delta.x += self.move_speed;
        }
        if self.left_pressed {
            delta.x -= self.move_speed;
        }
        if self.up_pressed {
            delta.y += self.move_speed;
        }
        if self.down_pressed {
            delta.y -= self.move_speed;
        }

        delta
    }

    /// Rotation delta for this frame (radians).
    pub fn rotation(&self) -> Vec3 {
        let mut delta = Vec3::ZERO;

        if self.turn_right_pressed {
            delta.x += self.rotate_speed;
        }
        if self.turn_left_pressed {
            delta.x -= self.rotate_speed;
        }
        if self.pitch_up_pressed {
            delta.y += self.rotate_speed;
        }
        if self.pitch_down_pressed {
            delta.y -= self.rotate_speed;
        }

        delta
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}
