//! The fluid tank scene: one ball, a block of particles, and the eight line
//! segments outlining the tank domain.
//!
//! Every value here is a constant and every constructor is deterministic;
//! calling them twice yields identical scenes.

use cgmath::Vector3;

use super::scene::{LineSegment, Particle, PointLight, Scene};
use crate::gfx::camera::rig::CameraRig;

pub const WINDOW_TITLE: &str = "Fluid Simulator";
pub const WINDOW_SIZE: (u32, u32) = (1024, 1024);

pub const CAMERA_EYE: Vector3<f32> = Vector3::new(-5.0, 2.0, 2.0);
pub const CAMERA_TARGET: Vector3<f32> = Vector3::new(0.0, 2.0, 0.0);

pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_LIGHT: [f32; 3] = [0.5, 0.5, 0.5];

pub const BALL_RADIUS: f32 = 0.03;
/// The ball is drawn slightly inside its nominal radius.
pub const BALL_DRAW_SCALE: f32 = 0.95;
pub const BALL_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_RADIUS: f32 = 0.02;
pub const PARTICLE_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
/// Particle positions derive from `PARTICLE_COUNT / ROW_DIVISOR` with
/// integer division, which fixes the y and z coordinates at 4.
const ROW_DIVISOR: usize = 250;
const ROW_SPACING: f32 = 0.02;

pub const OUTLINE_COLOR: [f32; 3] = [0.28, 0.68, 0.99];
pub const OUTLINE_WIDTH: f32 = 5.0;

/// The tank footprint on the x axis and its depth on the z axis
const TANK_X: (f32, f32) = (5.0, 10.0);
const TANK_Z: (f32, f32) = (-5.0, 0.0);
const TANK_HEIGHT: f32 = 100.0;

/// The single ball resting at the origin
pub fn ball() -> Particle {
    Particle::new(
        Vector3::new(0.0, 0.0, 0.0),
        BALL_RADIUS * BALL_DRAW_SCALE,
        BALL_COLOR,
    )
}

/// A row of `count` particles along the x axis
///
/// Index `i` lands at `(ROW_SPACING * (i * count / ROW_DIVISOR), k, k)`
/// where `k = count / ROW_DIVISOR`, both with integer division. For the
/// default count of 1000 this reduces to `(0.08 * i, 4, 4)`.
pub fn particle_row(count: usize) -> Vec<Particle> {
    let k = (count / ROW_DIVISOR) as f32;
    (0..count)
        .map(|i| {
            let x = ROW_SPACING * ((i * count / ROW_DIVISOR) as f32);
            Particle::new(Vector3::new(x, k, k), PARTICLE_RADIUS, PARTICLE_COLOR)
        })
        .collect()
}

/// A diagonal of `count` particles, one fiftieth of a unit apart
pub fn particle_diagonal(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let t = i as f32 / 50.0;
            Particle::new(Vector3::new(t, t, t), PARTICLE_RADIUS, PARTICLE_COLOR)
        })
        .collect()
}

/// The eight segments outlining the tank domain
///
/// Four verticals rise from the corners of the footprint; four horizontals
/// close the bottom rectangle.
pub fn outline() -> Vec<LineSegment> {
    let (x0, x1) = TANK_X;
    let (z0, z1) = TANK_Z;
    let corners = [
        Vector3::new(x1, 0.0, z1),
        Vector3::new(x0, 0.0, z1),
        Vector3::new(x0, 0.0, z0),
        Vector3::new(x1, 0.0, z0),
    ];

    let mut segments = Vec::with_capacity(8);
    for corner in corners {
        segments.push(LineSegment::new(
            corner,
            corner + Vector3::new(0.0, TANK_HEIGHT, 0.0),
            OUTLINE_COLOR,
            OUTLINE_WIDTH,
        ));
    }
    for i in 0..corners.len() {
        segments.push(LineSegment::new(
            corners[i],
            corners[(i + 1) % corners.len()],
            OUTLINE_COLOR,
            OUTLINE_WIDTH,
        ));
    }
    segments
}

/// The fixed camera rig viewing the tank
pub fn camera(aspect: f32) -> CameraRig {
    CameraRig::new(CAMERA_EYE, CAMERA_TARGET, aspect)
}

/// Assembles the complete tank scene: ball, particle row, outline, lights
pub fn scene(aspect: f32) -> Scene {
    let mut scene = Scene::new(camera(aspect));
    scene.point_light = PointLight {
        position: LIGHT_POSITION,
        color: LIGHT_COLOR,
    };
    scene.ambient = AMBIENT_LIGHT;
    scene.add_particle(ball());
    scene.add_particles(particle_row(PARTICLE_COUNT));
    scene.add_lines(outline());
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_is_drawn_inside_nominal_radius() {
        let ball = ball();
        assert_eq!(ball.position, Vector3::new(0.0, 0.0, 0.0));
        assert!((ball.radius - 0.0285).abs() < 1e-6);
        assert_eq!(ball.color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_particle_row_formula() {
        let particles = particle_row(PARTICLE_COUNT);
        assert_eq!(particles.len(), 1000);
        // count / 250 = 4, so x advances by 0.08 per index and y = z = 4
        assert_eq!(particles[0].position, Vector3::new(0.0, 4.0, 4.0));
        assert_eq!(particles[1].position, Vector3::new(0.08, 4.0, 4.0));
        assert_eq!(particles[10].position, Vector3::new(0.8, 4.0, 4.0));
        assert!(particles.iter().all(|p| p.radius == PARTICLE_RADIUS));
        assert!(particles.iter().all(|p| p.color == PARTICLE_COLOR));
    }

    #[test]
    fn test_particle_diagonal_formula() {
        let particles = particle_diagonal(100);
        assert_eq!(particles[0].position, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(particles[50].position, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_outline_has_eight_segments() {
        let segments = outline();
        assert_eq!(segments.len(), 8);
        assert!(segments.iter().all(|s| s.color == OUTLINE_COLOR));
        assert!(segments.iter().all(|s| s.width == OUTLINE_WIDTH));
    }

    #[test]
    fn test_outline_verticals_rise_from_the_floor() {
        let segments = outline();
        for segment in &segments[..4] {
            assert_eq!(segment.start.y, 0.0);
            assert_eq!(segment.end.y, TANK_HEIGHT);
            assert_eq!(segment.start.x, segment.end.x);
            assert_eq!(segment.start.z, segment.end.z);
        }
    }

    #[test]
    fn test_outline_bottom_rectangle_is_closed() {
        let segments = outline();
        let bottom = &segments[4..];
        for i in 0..bottom.len() {
            let next = &bottom[(i + 1) % bottom.len()];
            assert_eq!(bottom[i].end, next.start);
        }
    }

    #[test]
    fn test_scene_is_deterministic() {
        let a = scene(1.0);
        let b = scene(1.0);
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.point_light, b.point_light);
        assert_eq!(a.ambient, b.ambient);
        assert_eq!(a.camera.uniform, b.camera.uniform);
    }

    #[test]
    fn test_scene_counts() {
        let scene = scene(1.0);
        let stats = scene.statistics();
        assert_eq!(stats.particle_count, PARTICLE_COUNT + 1);
        assert_eq!(stats.segment_count, 8);
    }
}
