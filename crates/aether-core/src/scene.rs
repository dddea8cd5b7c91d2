//! Scene assembly shared by the web and native frontends.
//!
//! The decor table is fixed for the life of the scene; only the per-frame
//! model matrices and the centerpiece's colors change. The camera is a plain
//! right-handed perspective camera whose eye and target are fed from the
//! interpolated animator state every frame.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::animate::{FloatMotion, SceneAnimator};
use crate::color::rgb;
use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, CRYSTAL_FLOAT_INTENSITY, CRYSTAL_FLOAT_ROTATION,
    CRYSTAL_FLOAT_SPEED, CRYSTAL_SCALE, SHAPE_FLOAT_INTENSITY, SHAPE_FLOAT_ROTATION, SHAPE_SPIN_X,
    SHAPE_SPIN_Y,
};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 8.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Re-point the camera from the animator's interpolated pose. Orientation
    /// is derived from the interpolated look-at point, never snapped to the
    /// target configuration.
    pub fn follow(&mut self, animator: &SceneAnimator) {
        self.eye = animator.camera_eye;
        self.target = animator.camera_look_at;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// One decorative icosahedron placement, fixed at startup.
#[derive(Clone, Copy, Debug)]
pub struct FloatingShape {
    pub position: Vec3,
    pub color: Vec3,
    pub speed: f32,
    pub distortion: f32,
}

pub const FLOATING_SHAPE_COUNT: usize = 2;

/// The two background icosahedra flanking the centerpiece.
pub fn floating_shapes() -> [FloatingShape; FLOATING_SHAPE_COUNT] {
    [
        FloatingShape {
            position: Vec3::new(3.0, 1.0, -2.0),
            color: rgb(0xa855f7),
            speed: 1.5,
            distortion: 0.4,
        },
        FloatingShape {
            position: Vec3::new(-3.0, 2.0, -4.0),
            color: rgb(0x3b82f6),
            speed: 1.2,
            distortion: 0.3,
        },
    ]
}

/// Per-frame data for one mesh instance, in renderer-agnostic form.
#[derive(Clone, Copy, Debug)]
pub struct MeshInstance {
    pub model: Mat4,
    pub color: Vec3,
    pub emissive: Vec3,
    pub distortion: f32,
}

/// Assemble the frame's mesh instances: centerpiece first, then the floating
/// shapes, so renderers can draw instance 0 with the knot mesh and the rest
/// with the icosahedron.
pub fn build_instances(animator: &SceneAnimator) -> Vec<MeshInstance> {
    let t = animator.elapsed;
    let mut instances = Vec::with_capacity(1 + FLOATING_SHAPE_COUNT);

    let float = FloatMotion {
        speed: CRYSTAL_FLOAT_SPEED,
        rotation_intensity: CRYSTAL_FLOAT_ROTATION,
        float_intensity: CRYSTAL_FLOAT_INTENSITY,
    };
    let sway = float.sway(t);
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        sway.x,
        animator.crystal_yaw + sway.y,
        animator.crystal_roll + sway.z,
    );
    instances.push(MeshInstance {
        model: Mat4::from_scale_rotation_translation(
            Vec3::splat(CRYSTAL_SCALE),
            rotation,
            Vec3::new(0.0, float.offset_y(t), 0.0),
        ),
        color: animator.crystal_color,
        emissive: animator.crystal_emissive,
        distortion: animator.crystal_distortion,
    });

    for shape in floating_shapes() {
        let float = FloatMotion {
            speed: shape.speed * 0.5,
            rotation_intensity: SHAPE_FLOAT_ROTATION,
            float_intensity: SHAPE_FLOAT_INTENSITY,
        };
        let sway = float.sway(t);
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            t * shape.speed * SHAPE_SPIN_X + sway.x,
            t * shape.speed * SHAPE_SPIN_Y + sway.y,
            sway.z,
        );
        instances.push(MeshInstance {
            model: Mat4::from_scale_rotation_translation(
                Vec3::ONE,
                rotation,
                shape.position + Vec3::new(0.0, float.offset_y(t), 0.0),
            ),
            color: shape.color,
            emissive: Vec3::ZERO,
            distortion: shape.distortion,
        });
    }

    instances
}
