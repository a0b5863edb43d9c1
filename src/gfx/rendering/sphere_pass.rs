//! Instanced sphere rendering for the ball and the particle block
//!
//! Every sphere in the scene shares one unit-sphere mesh; per-sphere
//! position, radius, and color travel in an instance buffer so the whole
//! set draws in a single call. The scene is static, so the instance buffer
//! is uploaded once at startup.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device, RenderPass};

use crate::gfx::geometry::primitives::generate_sphere;
use crate::gfx::scene::scene::Particle;

/// Longitude and latitude subdivision of the shared sphere mesh
const SPHERE_SEGMENTS: (u32, u32) = (24, 16);

/// Instance data for a single rendered sphere
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    /// xyz = world position, w = radius
    pub position_radius: [f32; 4],
    /// Color multiplier (RGBA)
    pub color: [f32; 4],
}

impl SphereInstance {
    pub fn from_particle(particle: &Particle) -> Self {
        Self {
            position_radius: [
                particle.position.x,
                particle.position.y,
                particle.position.z,
                particle.radius,
            ],
            color: [
                particle.color[0],
                particle.color[1],
                particle.color[2],
                1.0,
            ],
        }
    }

    /// Vertex buffer layout for instance data
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // Position and radius, after position(0) and normal(1)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                // Color (vec4)
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Renders all scene spheres with one instanced draw call
pub struct SpherePass {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
    instance_buffer: Option<Buffer>,
    instance_count: u32,
}

impl SpherePass {
    /// Creates the shared unit-sphere mesh
    pub fn new(device: &Device) -> Self {
        let (longitude, latitude) = SPHERE_SEGMENTS;
        let (vertices, indices) = generate_sphere(longitude, latitude).to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance_buffer: None,
            instance_count: 0,
        }
    }

    /// Uploads the instance buffer from the scene's particles
    ///
    /// Called once after scene setup; the buffer never changes afterwards.
    pub fn upload(&mut self, device: &Device, particles: &[Particle]) {
        self.instance_count = particles.len() as u32;
        if particles.is_empty() {
            self.instance_buffer = None;
            return;
        }

        let instances: Vec<SphereInstance> =
            particles.iter().map(SphereInstance::from_particle).collect();

        self.instance_buffer = Some(device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Sphere Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        log::debug!("uploaded {} sphere instances", self.instance_count);
    }

    /// Renders all spheres in a single draw call
    pub fn draw(&self, render_pass: &mut RenderPass<'_>) {
        let Some(instance_buffer) = &self.instance_buffer else {
            return;
        };

        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instance_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }

    /// Number of instances currently uploaded
    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }
}

// Instanced sphere shader
pub const SPHERE_SHADER: &str = r#"
struct GlobalUniform {
    view_position: vec4<f32>,
    view_proj: mat4x4<f32>,
    light_position: vec3<f32>,
    _padding0: f32,
    light_color: vec3<f32>,
    _padding1: f32,
    ambient_color: vec3<f32>,
    _padding2: f32,
}

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
}

struct InstanceInput {
    @location(2) position_radius: vec4<f32>, // xyz = position, w = radius
    @location(3) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> global: GlobalUniform;

@vertex
fn vs_main(
    vertex: VertexInput,
    instance: InstanceInput,
) -> VertexOutput {
    // Uniform scale by radius plus translation
    let world_position = vertex.position * instance.position_radius.w
        + instance.position_radius.xyz;

    // Unit sphere normals survive uniform scaling unchanged
    let world_normal = normalize(vertex.normal);

    return VertexOutput(
        global.view_proj * vec4<f32>(world_position, 1.0),
        world_position,
        world_normal,
        instance.color,
    );
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_dir = normalize(global.light_position - in.world_position);
    let normal = normalize(in.world_normal);

    let diffuse = max(dot(normal, light_dir), 0.0);
    let lit_color = in.color.rgb * (global.ambient_color + diffuse * global.light_color);

    return vec4<f32>(lit_color, in.color.a);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_instance_matches_vertex_layout() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), 32);
        assert_eq!(std::mem::offset_of!(SphereInstance, color), 16);
        let layout = SphereInstance::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes.len(), 2);
    }

    #[test]
    fn test_instance_from_particle() {
        let particle = Particle::new(Vector3::new(1.0, 2.0, 3.0), 0.02, [0.0, 0.0, 1.0]);
        let instance = SphereInstance::from_particle(&particle);
        assert_eq!(instance.position_radius, [1.0, 2.0, 3.0, 0.02]);
        assert_eq!(instance.color, [0.0, 0.0, 1.0, 1.0]);
    }
}
