// Host-side tests for mesh and starfield generation.

use aether_core::{icosahedron, starfield, torus_knot, StarVertex, Vertex};
use glam::Vec3;

#[test]
fn vertex_layouts_are_tightly_packed() {
    // The renderers' vertex buffer layouts assume these strides.
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    assert_eq!(std::mem::size_of::<StarVertex>(), 16);
}

#[test]
fn icosahedron_is_twenty_flat_faces() {
    let mesh = icosahedron();
    assert_eq!(mesh.vertices.len(), 60);
    assert_eq!(mesh.indices.len(), 60);

    for v in &mesh.vertices {
        // Unit sphere positions, unit normals.
        assert!((Vec3::from(v.position).length() - 1.0).abs() < 1e-4);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-4);
    }
    for face in mesh.vertices.chunks_exact(3) {
        // Flat shading: one normal per face, pointing away from the center.
        assert_eq!(face[0].normal, face[1].normal);
        assert_eq!(face[1].normal, face[2].normal);
        let centroid = face.iter().map(|v| Vec3::from(v.position)).sum::<Vec3>() / 3.0;
        assert!(Vec3::from(face[0].normal).dot(centroid) > 0.0);
    }
}

#[test]
fn torus_knot_counts_follow_segment_parameters() {
    let mesh = torus_knot(1.0, 0.3, 64, 8, 2, 3);
    assert_eq!(mesh.vertices.len(), 65 * 9);
    assert_eq!(mesh.indices.len(), 64 * 8 * 6);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn torus_knot_stays_inside_its_bounding_radius() {
    let mesh = torus_knot(1.0, 0.3, 128, 16, 2, 3);
    for v in &mesh.vertices {
        // Curve radius tops out at radius * 1.5; the tube adds at most 0.3.
        assert!(Vec3::from(v.position).length() <= 1.5 + 0.3 + 1e-3);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-3);
    }
}

#[test]
fn starfield_fills_the_requested_shell() {
    let stars = starfield(512, 100.0, 50.0, 7);
    assert_eq!(stars.len(), 512);
    for s in &stars {
        let r = Vec3::from(s.position).length();
        assert!(r >= 100.0 - 1e-2 && r <= 150.0 + 1e-2, "radius {r}");
        assert!(s.twinkle >= 0.0 && s.twinkle < std::f32::consts::TAU + 1e-4);
    }
}

#[test]
fn starfield_is_deterministic_per_seed() {
    let a = starfield(16, 100.0, 50.0, 7);
    let b = starfield(16, 100.0, 50.0, 7);
    let c = starfield(16, 100.0, 50.0, 8);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.twinkle, y.twinkle);
    }
    assert!(a.iter().zip(&c).any(|(x, y)| x.position != y.position));
}
