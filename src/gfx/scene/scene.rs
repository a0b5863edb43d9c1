use cgmath::Vector3;

use crate::gfx::camera::rig::CameraRig;

/// A drawn sphere with fixed position, radius, and color
///
/// Created once at startup and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector3<f32>,
    pub radius: f32,
    pub color: [f32; 3],
}

impl Particle {
    pub fn new(position: Vector3<f32>, radius: f32, color: [f32; 3]) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }
}

/// A colored line segment between two points
///
/// `width` is carried as scene data to describe the segment as the source
/// scene does; core wgpu rasterizes line lists at one pixel regardless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vector3<f32>,
    pub end: Vector3<f32>,
    pub color: [f32; 3],
    pub width: f32,
}

impl LineSegment {
    pub fn new(start: Vector3<f32>, end: Vector3<f32>, color: [f32; 3], width: f32) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }
}

/// A point light with a position and color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: [1.0, 1.0, 1.0],
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Main scene containing the camera rig, lights, particles, and lines
pub struct Scene {
    pub camera: CameraRig,
    pub point_light: PointLight,
    pub ambient: [f32; 3],
    pub particles: Vec<Particle>,
    pub lines: Vec<LineSegment>,
}

impl Scene {
    /// Creates an empty scene viewed by the given camera
    pub fn new(camera: CameraRig) -> Self {
        Self {
            camera,
            point_light: PointLight::default(),
            ambient: [0.0, 0.0, 0.0],
            particles: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Updates the scene (camera matrices, etc.)
    ///
    /// The pose is constant, so after the first call this recomputes the
    /// same uniform every frame.
    pub fn update(&mut self) {
        self.camera.update_view_proj();
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn add_particles<I>(&mut self, particles: I)
    where
        I: IntoIterator<Item = Particle>,
    {
        self.particles.extend(particles);
    }

    pub fn add_line(&mut self, line: LineSegment) {
        self.lines.push(line);
    }

    pub fn add_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = LineSegment>,
    {
        self.lines.extend(lines);
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        SceneStatistics {
            particle_count: self.particles.len(),
            segment_count: self.lines.len(),
        }
    }
}

/// Scene statistics for logging and debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub particle_count: usize,
    pub segment_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraRig {
        CameraRig::new(Vector3::new(-5.0, 2.0, 2.0), Vector3::new(0.0, 2.0, 0.0), 1.0)
    }

    #[test]
    fn test_empty_scene_statistics() {
        let scene = Scene::new(camera());
        assert_eq!(
            scene.statistics(),
            SceneStatistics {
                particle_count: 0,
                segment_count: 0,
            }
        );
    }

    #[test]
    fn test_update_does_not_touch_geometry() {
        let mut scene = Scene::new(camera());
        scene.add_particle(Particle::new(Vector3::new(0.0, 0.0, 0.0), 0.03, [0.0, 0.0, 1.0]));
        scene.add_line(LineSegment::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            [0.28, 0.68, 0.99],
            5.0,
        ));

        let particles = scene.particles.clone();
        let lines = scene.lines.clone();
        for _ in 0..3 {
            scene.update();
        }
        assert_eq!(scene.particles, particles);
        assert_eq!(scene.lines, lines);
    }
}
