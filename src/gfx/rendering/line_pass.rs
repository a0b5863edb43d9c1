//! Line-list rendering for the tank outline
//!
//! Segments are expanded to vertex pairs and drawn with a LineList
//! pipeline. The outline is static, so the vertex buffer is uploaded once
//! at startup.

use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device, RenderPass};

use super::vertex::LineVertex;
use crate::gfx::scene::scene::LineSegment;

/// Expands segments into a flat vertex list, two vertices per segment
fn line_vertices(lines: &[LineSegment]) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(lines.len() * 2);
    for line in lines {
        vertices.push(LineVertex {
            position: line.start.into(),
            color: line.color,
        });
        vertices.push(LineVertex {
            position: line.end.into(),
            color: line.color,
        });
    }
    vertices
}

/// Renders all scene line segments with one draw call
pub struct LinePass {
    vertex_buffer: Option<Buffer>,
    vertex_count: u32,
}

impl LinePass {
    pub fn new() -> Self {
        Self {
            vertex_buffer: None,
            vertex_count: 0,
        }
    }

    /// Uploads the vertex buffer from the scene's line segments
    ///
    /// Called once after scene setup; the buffer never changes afterwards.
    pub fn upload(&mut self, device: &Device, lines: &[LineSegment]) {
        let vertices = line_vertices(lines);
        self.vertex_count = vertices.len() as u32;
        if vertices.is_empty() {
            self.vertex_buffer = None;
            return;
        }

        self.vertex_buffer = Some(device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Line Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        log::debug!("uploaded {} line vertices", self.vertex_count);
    }

    /// Renders all segments in a single draw call
    pub fn draw(&self, render_pass: &mut RenderPass<'_>) {
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return;
        };

        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }

    /// Number of vertices currently uploaded
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

impl Default for LinePass {
    fn default() -> Self {
        Self::new()
    }
}

// Line shader; shares the global uniform layout with the sphere shader
pub const LINE_SHADER: &str = r#"
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
    @location(1) color: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
}

@group(0) @binding(0)
var<uniform> global: GlobalUniform;

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    return VertexOutput(
        global.view_proj * vec4<f32>(vertex.position, 1.0),
        vertex.color,
    );
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Lines are drawn unlit at full saturation
    return vec4<f32>(in.color, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_line_vertices_pair_per_segment() {
        let lines = vec![
            LineSegment::new(
                Vector3::new(10.0, 0.0, 0.0),
                Vector3::new(10.0, 100.0, 0.0),
                [0.28, 0.68, 0.99],
                5.0,
            ),
            LineSegment::new(
                Vector3::new(10.0, 0.0, 0.0),
                Vector3::new(5.0, 0.0, 0.0),
                [0.28, 0.68, 0.99],
                5.0,
            ),
        ];

        let vertices = line_vertices(&lines);
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0].position, [10.0, 0.0, 0.0]);
        assert_eq!(vertices[1].position, [10.0, 100.0, 0.0]);
        assert_eq!(vertices[2].position, [10.0, 0.0, 0.0]);
        assert_eq!(vertices[3].position, [5.0, 0.0, 0.0]);
        assert!(vertices.iter().all(|v| v.color == [0.28, 0.68, 0.99]));
    }

    #[test]
    fn test_line_vertices_empty() {
        assert!(line_vertices(&[]).is_empty());
    }
}
