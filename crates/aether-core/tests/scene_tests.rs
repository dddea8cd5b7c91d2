// Host-side tests for per-frame scene assembly.

use aether_core::{
    build_instances, floating_shapes, rgb, section_configs, Camera, SceneAnimator,
    CRYSTAL_SCALE, FLOATING_SHAPE_COUNT,
};
use glam::{Vec3, Vec4};

fn animator() -> SceneAnimator {
    SceneAnimator::new(&section_configs()[0])
}

#[test]
fn instances_are_centerpiece_then_floating_shapes() {
    let anim = animator();
    let instances = build_instances(&anim);
    assert_eq!(instances.len(), 1 + FLOATING_SHAPE_COUNT);

    // Centerpiece carries the animator's live colors.
    assert_eq!(instances[0].color, anim.crystal_color);
    assert_eq!(instances[0].emissive, anim.crystal_emissive);
    assert_eq!(instances[0].distortion, anim.crystal_distortion);

    // Shapes keep their fixed palette and no emissive.
    for (instance, shape) in instances[1..].iter().zip(floating_shapes()) {
        assert_eq!(instance.color, shape.color);
        assert_eq!(instance.emissive, Vec3::ZERO);
        assert_eq!(instance.distortion, shape.distortion);
    }
}

#[test]
fn centerpiece_model_applies_the_uniform_scale() {
    let instances = build_instances(&animator());
    // Basis columns of a scale+rotation matrix keep the scale as length.
    let model = instances[0].model;
    for col in [model.x_axis, model.y_axis, model.z_axis] {
        assert!((col.truncate().length() - CRYSTAL_SCALE).abs() < 1e-4);
    }
}

#[test]
fn floating_shapes_sit_at_their_designed_positions() {
    let shapes = floating_shapes();
    assert_eq!(shapes[0].position, Vec3::new(3.0, 1.0, -2.0));
    assert_eq!(shapes[1].position, Vec3::new(-3.0, 2.0, -4.0));
    assert_eq!(shapes[0].color, rgb(0xa855f7));
    assert_eq!(shapes[1].color, rgb(0x3b82f6));
    assert!(shapes[0].speed > shapes[1].speed);
}

#[test]
fn shapes_drift_but_stay_anchored_near_their_placements() {
    let mut anim = animator();
    for _ in 0..600 {
        anim.advance(1.0 / 60.0);
    }
    let instances = build_instances(&anim);
    for (instance, shape) in instances[1..].iter().zip(floating_shapes()) {
        let translation = instance.model.w_axis.truncate();
        // Bob moves the shape vertically by a fraction of a unit, never
        // relocating it.
        assert!((translation - shape.position).length() < 0.25);
    }
}

#[test]
fn camera_follows_the_interpolated_pose() {
    let mut anim = animator();
    let configs = section_configs();
    for _ in 0..100 {
        anim.seek_targets(&configs[2]);
    }
    let mut camera = Camera::new(16.0 / 9.0);
    camera.follow(&anim);
    assert_eq!(camera.eye, anim.camera_eye);
    assert_eq!(camera.target, anim.camera_look_at);

    // The derived matrices stay finite and invertible.
    let vp = camera.view_proj();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    assert!(vp.determinant().abs() > 0.0);
}

#[test]
fn view_matrix_points_at_the_interpolated_look_at() {
    let mut anim = animator();
    anim.camera_eye = Vec3::new(0.0, 0.0, 8.0);
    anim.camera_look_at = Vec3::new(0.0, 0.0, 0.0);
    let mut camera = Camera::new(1.0);
    camera.follow(&anim);
    let view = camera.view_matrix();
    // The look-at point lands on the view-space -Z axis.
    let target_view = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(target_view.x.abs() < 1e-5);
    assert!(target_view.y.abs() < 1e-5);
    assert!(target_view.z < 0.0);
}
