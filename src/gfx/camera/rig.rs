use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// A camera with a fixed pose.
///
/// Eye and target are set at construction and never move; the only thing
/// that follows the window is the aspect ratio of the projection. Up is +Y,
/// matching the vertical axis of the tank.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl Camera for CameraRig {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl CameraRig {
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: cgmath::Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update_view_proj();
        camera
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        // Minimized windows report zero dimensions; keep the last aspect
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(Vector3::new(-5.0, 2.0, 2.0), Vector3::new(0.0, 2.0, 0.0), 1.0)
    }

    #[test]
    fn test_uniform_holds_eye_position() {
        let camera = rig();
        assert_eq!(camera.uniform.view_position, [-5.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_view_proj_identical_across_frames() {
        let mut camera = rig();
        let first = camera.uniform;
        for _ in 0..3 {
            camera.update_view_proj();
            assert_eq!(camera.uniform, first);
        }
    }

    #[test]
    fn test_resize_to_zero_keeps_last_aspect() {
        let mut camera = rig();
        camera.resize_projection(1920, 1080);
        camera.resize_projection(0, 0);
        camera.update_view_proj();
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < f32::EPSILON);
        assert!(camera.uniform.view_proj.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_resize_only_changes_aspect() {
        let mut camera = rig();
        camera.resize_projection(1920, 1080);
        camera.update_view_proj();
        assert_eq!(camera.eye, Vector3::new(-5.0, 2.0, 2.0));
        assert_eq!(camera.target, Vector3::new(0.0, 2.0, 0.0));
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < f32::EPSILON);
    }
}
