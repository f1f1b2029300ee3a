//! Mesh generators for the scene primitives.
//!
//! Vertex layout matches the shaders: `positions` is `xyz` per vertex, `uvs`
//! is `uv` per vertex, `indices` are triangle lists.

use std::f32::consts::{PI, TAU};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// UV sphere centred on the origin with `width` × `height` segments.
pub fn uv_sphere(radius: f32, width: u16, height: u16) -> Mesh {
    let mut mesh = Mesh::default();
    let row = width + 1;

    for iy in 0..=height {
        let v = f32::from(iy) / f32::from(height);
        for ix in 0..=width {
            let u = f32::from(ix) / f32::from(width);
            mesh.positions.extend_from_slice(&[
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            ]);
            mesh.uvs.extend_from_slice(&[u, 1.0 - v]);
        }
    }

    for iy in 0..height {
        for ix in 0..width {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // The pole rows collapse to a point; skip their degenerate half.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Flat annulus in the XY plane. UVs span the outer radius's bounding
/// square, so `(0.5, 0.5)` is the centre.
pub fn ring(inner: f32, outer: f32, theta_segments: u16, phi_segments: u16) -> Mesh {
    let mut mesh = Mesh::default();
    let step = (outer - inner) / f32::from(phi_segments);

    for j in 0..=phi_segments {
        let radius = inner + step * f32::from(j);
        for i in 0..=theta_segments {
            let segment = f32::from(i) / f32::from(theta_segments) * TAU;
            let x = radius * segment.cos();
            let y = radius * segment.sin();
            mesh.positions.extend_from_slice(&[x, y, 0.0]);
            mesh.uvs.extend_from_slice(&[(x / outer + 1.0) / 2.0, (y / outer + 1.0) / 2.0]);
        }
    }

    let row = theta_segments + 1;
    for j in 0..phi_segments {
        for i in 0..theta_segments {
            let a = j * row + i;
            let b = a + row;
            let c = a + row + 1;
            let d = a + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Axis-aligned quad in the XY plane.
pub fn plane(width: f32, height: f32) -> Mesh {
    let (w, h) = (width / 2.0, height / 2.0);
    Mesh {
        positions: vec![-w, h, 0.0, w, h, 0.0, -w, -h, 0.0, w, -h, 0.0],
        uvs: vec![0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}

/// Evenly spaced points on a circle of `radius` in the XY plane, each
/// nudged off the plane by up to ±0.05.
pub fn photon_ring(count: usize, radius: f32, random: &mut impl FnMut() -> f32) -> Vec<f32> {
    (0..count)
        .flat_map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            [angle.cos() * radius, angle.sin() * radius, (random() - 0.5) * 0.1]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_in_range(mesh: &Mesh) -> bool {
        let n = mesh.vertex_count();
        mesh.indices.iter().all(|&i| usize::from(i) < n)
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = uv_sphere(0.15, 32, 32);
        assert_eq!(mesh.vertex_count(), 33 * 33);
        assert_eq!(mesh.uvs.len(), mesh.vertex_count() * 2);
        assert!(indices_in_range(&mesh));
        for p in mesh.positions.chunks_exact(3) {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((r - 0.15).abs() < 1e-5);
        }
        // Two pole rows contribute one triangle per segment, the rest two.
        assert_eq!(mesh.indices.len(), (32 * 30 * 2 + 32 * 2) * 3);
    }

    #[test]
    fn ring_spans_inner_to_outer() {
        let mesh = ring(0.2, 1.5, 64, 32);
        assert_eq!(mesh.vertex_count(), 65 * 33);
        assert_eq!(mesh.indices.len(), 64 * 32 * 6);
        assert!(indices_in_range(&mesh));
        for p in mesh.positions.chunks_exact(3) {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!(r >= 0.2 - 1e-5 && r <= 1.5 + 1e-5);
            assert_eq!(p[2], 0.0);
        }
        for uv in mesh.uvs.chunks_exact(2) {
            assert!((0.0..=1.0).contains(&uv[0]) && (0.0..=1.0).contains(&uv[1]));
        }
    }

    #[test]
    fn plane_is_two_triangles() {
        let mesh = plane(4.0, 4.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.positions[3], 2.0);
    }

    #[test]
    fn photons_are_evenly_spaced() {
        let mut zero = || 0.5;
        let ring = photon_ring(20, 0.25, &mut zero);
        assert_eq!(ring.len(), 60);
        assert!((ring[0] - 0.25).abs() < 1e-6);
        let quarter = &ring[15..18];
        assert!(quarter[0].abs() < 1e-6 && (quarter[1] - 0.25).abs() < 1e-6);
        assert!(ring.chunks_exact(3).all(|p| p[2] == 0.0));
    }
}
