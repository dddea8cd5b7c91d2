//! Per-frame animation state.
//!
//! Two independent update passes run every frame:
//!
//! - a target-seeking pass ([`SceneAnimator::seek_targets`]) that moves each
//!   live channel a fixed fraction of its remaining distance toward the
//!   active section's configuration, and
//! - a decorative pass ([`SceneAnimator::advance`]) of unconditional motion
//!   (centerpiece spin, elapsed-time accumulation) that ignores sections
//!   entirely.
//!
//! The geometric step never overshoots and tolerates the target changing
//! mid-transition: the next step is simply taken toward the new target from
//! wherever the value currently is.

use glam::Vec3;

use crate::color::{darken, rgb};
use crate::config::SectionConfig;
use crate::constants::{
    CRYSTAL_EMISSIVE_FACTOR, CRYSTAL_INITIAL_EMISSIVE, CRYSTAL_ROLL_PER_FRAME,
    CRYSTAL_YAW_PER_FRAME, SEEK_FACTOR,
};

/// Move `current` a fixed fraction of the remaining distance toward `target`.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Componentwise [`approach`] for points and colors.
#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current.lerp(target, factor)
}

/// Slow autonomous bob and sway applied to decorative shapes, independent of
/// the section-driven state. Stateless in elapsed time.
#[derive(Clone, Copy, Debug)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatMotion {
    /// Vertical bob offset at elapsed time `t`.
    #[inline]
    pub fn offset_y(&self, t: f32) -> f32 {
        (t * self.speed / 4.0).sin() / 10.0 * self.float_intensity
    }

    /// Gentle sway angles (radians) at elapsed time `t`.
    #[inline]
    pub fn sway(&self, t: f32) -> Vec3 {
        let phase = t * self.speed / 4.0;
        Vec3::new(
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        )
    }
}

/// Live interpolated scene state.
///
/// Each channel owns its current value; nothing is shared between channels,
/// and the index is re-read by the caller every frame rather than cached here.
#[derive(Clone, Debug)]
pub struct SceneAnimator {
    pub camera_eye: Vec3,
    pub camera_look_at: Vec3,
    pub key_light_color: Vec3,
    pub crystal_color: Vec3,
    pub crystal_emissive: Vec3,
    pub crystal_distortion: f32,
    pub crystal_yaw: f32,
    pub crystal_roll: f32,
    pub elapsed: f32,
}

impl SceneAnimator {
    /// Start from the given section's pose so the first frames don't sweep in
    /// from an arbitrary origin. The emissive starts from the original deep
    /// indigo and converges from there.
    pub fn new(initial: &SectionConfig) -> Self {
        Self {
            camera_eye: initial.camera_position,
            camera_look_at: initial.camera_look_at,
            key_light_color: initial.secondary_color,
            crystal_color: initial.primary_color,
            crystal_emissive: rgb(CRYSTAL_INITIAL_EMISSIVE),
            crystal_distortion: initial.distortion,
            crystal_yaw: 0.0,
            crystal_roll: 0.0,
            elapsed: 0.0,
        }
    }

    /// Target-seeking pass: one geometric step per channel toward the active
    /// section's targets.
    pub fn seek_targets(&mut self, config: &SectionConfig) {
        self.camera_eye = approach_vec3(self.camera_eye, config.camera_position, SEEK_FACTOR);
        self.camera_look_at = approach_vec3(self.camera_look_at, config.camera_look_at, SEEK_FACTOR);
        self.key_light_color =
            approach_vec3(self.key_light_color, config.secondary_color, SEEK_FACTOR);
        self.crystal_color = approach_vec3(self.crystal_color, config.primary_color, SEEK_FACTOR);
        self.crystal_emissive = approach_vec3(
            self.crystal_emissive,
            darken(config.primary_color, CRYSTAL_EMISSIVE_FACTOR),
            SEEK_FACTOR,
        );
        self.crystal_distortion = approach(self.crystal_distortion, config.distortion, SEEK_FACTOR);
    }

    /// Decorative pass: unconditional motion that runs regardless of section.
    pub fn advance(&mut self, dt_sec: f32) {
        self.elapsed += dt_sec;
        self.crystal_yaw += CRYSTAL_YAW_PER_FRAME;
        self.crystal_roll += CRYSTAL_ROLL_PER_FRAME;
    }
}
