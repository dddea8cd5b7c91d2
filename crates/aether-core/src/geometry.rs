//! Mesh and starfield generation.
//!
//! Geometry is built once at startup on the CPU and uploaded to vertex
//! buffers; nothing here runs per frame. Shapes use the same parameters as
//! the site's original scene (icosahedra for the floating shapes, a (2,3)
//! torus knot for the centerpiece).

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::prelude::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    /// Per-star phase for the twinkle term in the shader.
    pub twinkle: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

const GOLDEN: f32 = 1.618_034; // (1 + sqrt 5) / 2

#[rustfmt::skip]
const ICO_POSITIONS: [[f32; 3]; 12] = [
    [-1.0, GOLDEN, 0.0], [1.0, GOLDEN, 0.0], [-1.0, -GOLDEN, 0.0], [1.0, -GOLDEN, 0.0],
    [0.0, -1.0, GOLDEN], [0.0, 1.0, GOLDEN], [0.0, -1.0, -GOLDEN], [0.0, 1.0, -GOLDEN],
    [GOLDEN, 0.0, -1.0], [GOLDEN, 0.0, 1.0], [-GOLDEN, 0.0, -1.0], [-GOLDEN, 0.0, 1.0],
];

#[rustfmt::skip]
const ICO_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

/// Flat-shaded unit icosahedron: 20 faces, vertices duplicated per face so
/// every face carries its own normal.
pub fn icosahedron() -> Mesh {
    let mut vertices = Vec::with_capacity(ICO_FACES.len() * 3);
    let mut indices = Vec::with_capacity(ICO_FACES.len() * 3);
    for face in ICO_FACES {
        let [a, b, c] = face.map(|i| Vec3::from(ICO_POSITIONS[i]).normalize());
        let normal = (b - a).cross(c - a).normalize();
        for p in [a, b, c] {
            indices.push(vertices.len() as u32);
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    Mesh { vertices, indices }
}

/// Point on the (p, q) torus-knot center curve at parameter `u`.
fn knot_curve_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let quotient = q / p * u;
    Vec3::new(
        radius * (2.0 + quotient.cos()) * 0.5 * u.cos(),
        radius * (2.0 + quotient.cos()) * 0.5 * u.sin(),
        radius * quotient.sin() * 0.5,
    )
}

/// Tube swept along a (p, q) torus-knot curve.
///
/// The frame at each ring comes from the curve tangent and a bitangent built
/// against the (always non-parallel) chord sum, so the tube never twists
/// through a degenerate frame. Normals point out of the tube surface.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> Mesh {
    let (pf, qf) = (p as f32, q as f32);
    let mut vertices = Vec::with_capacity((tubular_segments + 1) * (radial_segments + 1));
    let mut indices = Vec::with_capacity(tubular_segments * radial_segments * 6);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * pf * std::f32::consts::TAU;
        let p1 = knot_curve_point(u, pf, qf, radius);
        let p2 = knot_curve_point(u + 0.01, pf, qf, radius);

        let tangent = p2 - p1;
        let bitangent = tangent.cross(p2 + p1).normalize();
        let normal = bitangent.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();

            let position = p1 + normal * cx + bitangent * cy;
            vertices.push(Vertex {
                position: position.to_array(),
                normal: (position - p1).normalize().to_array(),
            });
        }
    }

    let ring = (radial_segments + 1) as u32;
    for i in 1..=tubular_segments as u32 {
        for j in 1..=radial_segments as u32 {
            let a = ring * (i - 1) + (j - 1);
            let b = ring * i + (j - 1);
            let c = ring * i + j;
            let d = ring * (i - 1) + j;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Mesh { vertices, indices }
}

/// Deterministic starfield in a spherical shell: `count` points with radii in
/// `[radius, radius + depth)`, uniformly distributed in direction.
pub fn starfield(count: usize, radius: f32, depth: f32, seed: u64) -> Vec<StarVertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let z: f32 = rng.gen_range(-1.0..1.0);
        let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let planar = (1.0 - z * z).sqrt();
        let dir = Vec3::new(planar * theta.cos(), planar * theta.sin(), z);
        let r = radius + depth * rng.gen::<f32>();
        stars.push(StarVertex {
            position: (dir * r).to_array(),
            twinkle: rng.gen_range(0.0..std::f32::consts::TAU),
        });
    }
    stars
}
