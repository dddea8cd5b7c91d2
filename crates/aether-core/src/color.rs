use glam::Vec3;

/// Decode a `0xRRGGBB` literal into rgb components in \[0, 1\].
#[inline]
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Uniformly scale a color toward black.
#[inline]
pub fn darken(color: Vec3, factor: f32) -> Vec3 {
    color * factor
}
