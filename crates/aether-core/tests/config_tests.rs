// Host-side tests for the section table and its startup validation.

use aether_core::{
    rgb, section_configs, validate_configs, ConfigError, Section, SectionConfig, SECTION_COUNT,
};
use glam::Vec3;

#[test]
fn table_has_one_entry_per_section() {
    let configs = section_configs();
    assert_eq!(configs.len(), SECTION_COUNT);
    assert_eq!(Section::ALL.len(), SECTION_COUNT);
}

#[test]
fn table_passes_its_own_validation() {
    assert!(validate_configs(&section_configs()).is_ok());
}

#[test]
fn section_labels_are_in_scroll_order() {
    let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Home", "Services", "Work", "Contact"]);
}

#[test]
fn hex_decoding_matches_known_components() {
    let indigo = rgb(0x6366f1);
    assert!((indigo.x - 99.0 / 255.0).abs() < 1e-6);
    assert!((indigo.y - 102.0 / 255.0).abs() < 1e-6);
    assert!((indigo.z - 241.0 / 255.0).abs() < 1e-6);
    assert_eq!(rgb(0x000000), Vec3::ZERO);
    assert_eq!(rgb(0xffffff), Vec3::ONE);
}

#[test]
fn validation_rejects_an_empty_table() {
    assert!(matches!(validate_configs(&[]), Err(ConfigError::EmptyTable)));
}

#[test]
fn validation_rejects_out_of_range_colors() {
    let mut configs = section_configs().to_vec();
    configs[1].secondary_color = Vec3::new(0.2, 1.4, 0.2);
    assert!(matches!(
        validate_configs(&configs),
        Err(ConfigError::ColorOutOfRange(1))
    ));
}

#[test]
fn validation_rejects_non_finite_distortion() {
    let mut configs = section_configs().to_vec();
    configs[2].distortion = f32::NAN;
    assert!(matches!(
        validate_configs(&configs),
        Err(ConfigError::BadDistortion(2))
    ));

    let mut configs: Vec<SectionConfig> = section_configs().to_vec();
    configs[0].distortion = -0.1;
    assert!(matches!(
        validate_configs(&configs),
        Err(ConfigError::BadDistortion(0))
    ));
}

#[test]
fn camera_poses_match_the_designed_shots() {
    let configs = section_configs();
    // Hero looks dead-on, services from the right, work from the left and
    // above, contact from below.
    assert_eq!(configs[0].camera_position, Vec3::new(0.0, 0.0, 8.0));
    assert!(configs[1].camera_position.x > 0.0);
    assert!(configs[2].camera_position.x < 0.0 && configs[2].camera_position.y > 0.0);
    assert!(configs[3].camera_position.y < 0.0);
}
