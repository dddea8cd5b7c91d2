//! Per-section visual configuration.
//!
//! The page is a fixed, ordered sequence of full-viewport sections. Each entry
//! pairs a camera pose with the colors and warp magnitude the scene should
//! settle into while that section is active. The table is built once at
//! startup, validated, and never mutated afterwards.

use glam::Vec3;
use thiserror::Error;

use crate::color::rgb;

pub const SECTION_COUNT: usize = 4;

/// The page's sections, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    Work,
    Contact,
}

impl Section {
    pub const ALL: [Section; SECTION_COUNT] =
        [Section::Hero, Section::Services, Section::Work, Section::Contact];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Services => "Services",
            Section::Work => "Work",
            Section::Contact => "Contact",
        }
    }
}

/// Target visual state for one section.
#[derive(Clone, Debug)]
pub struct SectionConfig {
    pub camera_position: Vec3,
    pub camera_look_at: Vec3,
    /// Centerpiece material color.
    pub primary_color: Vec3,
    /// Accent (key light) color.
    pub secondary_color: Vec3,
    /// Magnitude of the decorative geometry warp on the centerpiece.
    pub distortion: f32,
}

/// Build the fixed section table.
pub fn section_configs() -> [SectionConfig; SECTION_COUNT] {
    [
        // Hero
        SectionConfig {
            camera_position: Vec3::new(0.0, 0.0, 8.0),
            camera_look_at: Vec3::new(0.0, 0.0, 0.0),
            primary_color: rgb(0x6366f1),   // indigo
            secondary_color: rgb(0xa855f7), // purple
            distortion: 0.3,
        },
        // Services: side view
        SectionConfig {
            camera_position: Vec3::new(4.0, 0.0, 4.0),
            camera_look_at: Vec3::new(-1.0, 0.0, 0.0),
            primary_color: rgb(0x3b82f6), // blue
            secondary_color: rgb(0x60a5fa),
            distortion: 0.5,
        },
        // Work: other side, high angle
        SectionConfig {
            camera_position: Vec3::new(-4.0, 2.0, 5.0),
            camera_look_at: Vec3::new(1.0, -0.5, 0.0),
            primary_color: rgb(0xec4899), // pink
            secondary_color: rgb(0xf472b6),
            distortion: 0.8,
        },
        // Contact: close up, low angle
        SectionConfig {
            camera_position: Vec3::new(0.0, -1.0, 4.0),
            camera_look_at: Vec3::new(0.0, 1.0, 0.0),
            primary_color: rgb(0x10b981), // emerald
            secondary_color: rgb(0x34d399),
            distortion: 0.2,
        },
    ]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("section table is empty")]
    EmptyTable,
    #[error("section {0}: color component outside [0, 1]")]
    ColorOutOfRange(usize),
    #[error("section {0}: distortion must be finite and non-negative")]
    BadDistortion(usize),
}

/// Startup precondition check for a section table. Runtime code assumes a
/// validated table and clamps indices instead of re-checking entries.
pub fn validate_configs(configs: &[SectionConfig]) -> Result<(), ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::EmptyTable);
    }
    for (i, c) in configs.iter().enumerate() {
        let in_range = |v: Vec3| v.cmpge(Vec3::ZERO).all() && v.cmple(Vec3::ONE).all();
        if !in_range(c.primary_color) || !in_range(c.secondary_color) {
            return Err(ConfigError::ColorOutOfRange(i));
        }
        if !c.distortion.is_finite() || c.distortion < 0.0 {
            return Err(ConfigError::BadDistortion(i));
        }
    }
    Ok(())
}
