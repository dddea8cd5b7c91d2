// Host-side tests for the geometric interpolation core.

use aether_core::{
    approach, approach_vec3, darken, section_configs, SceneAnimator, SectionConfig,
    CRYSTAL_EMISSIVE_FACTOR, CRYSTAL_ROLL_PER_FRAME, CRYSTAL_YAW_PER_FRAME, SEEK_FACTOR,
};
use glam::Vec3;

#[test]
fn approach_converges_without_overshoot() {
    let target = 3.0_f32;
    let mut x = -10.0_f32;
    let mut prev_err = (x - target).abs();
    // Strictly decreasing while the error is far above f32 resolution...
    for step in 0..600 {
        x = approach(x, target, SEEK_FACTOR);
        let err = (x - target).abs();
        assert!(x <= target, "overshot at step {step}: {x}");
        assert!(err < prev_err, "error not strictly decreasing at step {step}");
        prev_err = err;
    }
    assert!(prev_err < 1e-3, "did not converge: residual {prev_err}");
    // ...and at worst a plateau near the target after that, never a bounce.
    for step in 0..1400 {
        x = approach(x, target, SEEK_FACTOR);
        let err = (x - target).abs();
        assert!(x <= target, "overshot at step {step}: {x}");
        assert!(err <= prev_err, "error grew at step {step}");
        prev_err = err;
    }
}

#[test]
fn approach_is_stable_when_the_target_moves_mid_transition() {
    let mut x = 0.0_f32;
    for _ in 0..50 {
        x = approach(x, 10.0, SEEK_FACTOR);
    }
    // Switch targets before convergence; the next step must be bounded by
    // f * |new_target - current| with no discontinuity.
    let before = x;
    x = approach(x, -10.0, SEEK_FACTOR);
    let jump = (x - before).abs();
    assert!(jump <= SEEK_FACTOR * (before - -10.0).abs() + 1e-6);
}

#[test]
fn approach_vec3_matches_componentwise_approach() {
    let current = Vec3::new(1.0, -2.0, 0.5);
    let target = Vec3::new(-4.0, 8.0, 0.5);
    let stepped = approach_vec3(current, target, SEEK_FACTOR);
    for i in 0..3 {
        let expected = approach(current[i], target[i], SEEK_FACTOR);
        assert!((stepped[i] - expected).abs() < 1e-6);
    }
}

fn animator() -> (SceneAnimator, [SectionConfig; 4]) {
    let configs = section_configs();
    (SceneAnimator::new(&configs[0]), configs)
}

#[test]
fn seek_targets_leaves_channels_already_at_target_untouched() {
    let (mut anim, configs) = animator();
    // A config that differs from the start pose only in camera position.
    let mut moved = configs[0].clone();
    moved.camera_position = Vec3::new(5.0, 5.0, 5.0);

    let color_before = anim.crystal_color;
    let light_before = anim.key_light_color;
    let look_before = anim.camera_look_at;
    anim.seek_targets(&moved);

    assert_ne!(anim.camera_eye, configs[0].camera_position);
    assert_eq!(anim.crystal_color, color_before);
    assert_eq!(anim.key_light_color, light_before);
    assert_eq!(anim.camera_look_at, look_before);
}

#[test]
fn seek_targets_converges_every_channel_to_the_section_config() {
    let (mut anim, configs) = animator();
    let target = &configs[2];
    for _ in 0..3000 {
        anim.seek_targets(target);
    }
    assert!((anim.camera_eye - target.camera_position).length() < 1e-3);
    assert!((anim.camera_look_at - target.camera_look_at).length() < 1e-3);
    assert!((anim.key_light_color - target.secondary_color).length() < 1e-3);
    assert!((anim.crystal_color - target.primary_color).length() < 1e-3);
    let emissive_target = darken(target.primary_color, CRYSTAL_EMISSIVE_FACTOR);
    assert!((anim.crystal_emissive - emissive_target).length() < 1e-3);
    assert!((anim.crystal_distortion - target.distortion).abs() < 1e-3);
}

#[test]
fn decorative_pass_does_not_disturb_seek_state() {
    let (mut anim, _configs) = animator();
    let eye = anim.camera_eye;
    let color = anim.crystal_color;
    for _ in 0..120 {
        anim.advance(1.0 / 60.0);
    }
    assert_eq!(anim.camera_eye, eye);
    assert_eq!(anim.crystal_color, color);
    assert!((anim.elapsed - 2.0).abs() < 1e-4);
    assert!((anim.crystal_yaw - 120.0 * CRYSTAL_YAW_PER_FRAME).abs() < 1e-6);
    assert!((anim.crystal_roll - 120.0 * CRYSTAL_ROLL_PER_FRAME).abs() < 1e-6);
}

#[test]
fn seek_pass_does_not_advance_decorative_state() {
    let (mut anim, configs) = animator();
    for _ in 0..60 {
        anim.seek_targets(&configs[3]);
    }
    assert_eq!(anim.elapsed, 0.0);
    assert_eq!(anim.crystal_yaw, 0.0);
    assert_eq!(anim.crystal_roll, 0.0);
}
