//! # Primitive Shape Generation
//!
//! Generates the unit sphere mesh shared by all particle instances.
//! The sphere is generated with proper outward normals.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a sphere of radius 1.0 centered at the origin. Per-particle
/// radius is applied in the vertex shader, so one mesh serves every sphere
/// in the scene.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    // Generate vertices
    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            // Spherical to Cartesian coordinates
            let x = sin_theta * cos_phi;
            let y = cos_theta; // Y-up
            let z = sin_theta * sin_phi;

            data.vertices.push([x, y, z]);
            data.normals.push([x, y, z]); // Normal is same as position for unit sphere
        }
    }

    // Generate indices
    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            // First triangle
            data.indices.push(first);
            data.indices.push(second);
            data.indices.push(first + 1);

            // Second triangle
            data.indices.push(second);
            data.indices.push(second + 1);
            data.indices.push(first + 1);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert!(sphere.vertices.len() > 0);
        assert!(sphere.indices.len() > 0);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), (6 + 1) as usize * (8 + 1) as usize);
        assert_eq!(sphere.triangle_count(), (8 * 6 * 2) as usize);
    }

    #[test]
    fn test_sphere_vertices_unit_length() {
        let sphere = generate_sphere(12, 8);
        for v in &sphere.vertices {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_clamps_degenerate_resolution() {
        let sphere = generate_sphere(1, 1);
        // Clamped to the 3x2 minimum
        assert_eq!(sphere.vertices.len(), (2 + 1) as usize * (3 + 1) as usize);
    }

    #[test]
    fn test_sphere_indices_in_range() {
        let sphere = generate_sphere(8, 6);
        let count = sphere.vertices.len() as u32;
        assert!(sphere.indices.iter().all(|&i| i < count));
    }
}
