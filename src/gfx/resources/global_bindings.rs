//! Global uniform bindings for camera and scene data
//!
//! Manages the GPU uniform buffer and bind group for global rendering state
//! shared by every draw call: the camera matrices, the point light, and the
//! ambient term.

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    gfx::scene::scene::PointLight,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Global uniform buffer content structure
///
/// Contains all per-frame global data that needs to be accessible to
/// shaders. MUST match the GlobalUniform struct in the shaders exactly,
/// including the 16-byte alignment padding after each vec3.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GlobalUBOContent {
    // Camera data (matches CameraUniform)
    view_position: [f32; 4],  // Camera position (homogeneous coordinates)
    view_proj: [[f32; 4]; 4], // Camera view-projection matrix

    // Light data
    light_position: [f32; 3],
    _padding0: f32,
    light_color: [f32; 3],
    _padding1: f32,
    ambient_color: [f32; 3],
    _padding2: f32,
}
// Total: 16 + 64 + 3*16 = 128 bytes

unsafe impl bytemuck::Pod for GlobalUBOContent {}
unsafe impl bytemuck::Zeroable for GlobalUBOContent {}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called each frame; the scene is static so the underlying buffer write is
/// skipped whenever the content is unchanged.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    light: PointLight,
    ambient: [f32; 3],
) {
    let content = GlobalUBOContent {
        view_position: camera.view_position,
        view_proj: camera.view_proj,
        light_position: light.position,
        _padding0: 0.0,
        light_color: light.color,
        _padding1: 0.0,
        ambient_color: ambient,
        _padding2: 0.0,
    };

    ubo.update_content(queue, content);
}

/// Manages the bind group layout and bind group for global uniforms
///
/// Bound to slot 0 in both render pipelines.
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    /// Creates a new global bindings manager
    ///
    /// Sets up the bind group layout for global uniforms but doesn't
    /// create the actual bind group until `create_bind_group()` is called.
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform()) // Global uniforms (camera + lights)
            .create(device, "Globals Bind Group Layout");

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group with the provided uniform buffer
    ///
    /// Must be called after the uniform buffer is created and before any
    /// rendering operations that need global uniforms.
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Global Bind Group"),
        );
    }

    /// Returns the bind group layout
    ///
    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layouts(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// Returns the bind group for rendering
    ///
    /// # Panics
    /// Panics if `create_bind_group()` hasn't been called yet
    pub fn bind_groups(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ubo_content_matches_shader_layout() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 128);
        assert_eq!(std::mem::offset_of!(GlobalUBOContent, view_proj), 16);
        assert_eq!(std::mem::offset_of!(GlobalUBOContent, light_position), 80);
        assert_eq!(std::mem::offset_of!(GlobalUBOContent, light_color), 96);
        assert_eq!(std::mem::offset_of!(GlobalUBOContent, ambient_color), 112);
    }
}
