use wgpu::util::DeviceExt;

use crate::data_structures::vertex::Vertex;

/// Static geometry in GPU buffers: the vertex array object of a lesson.
///
/// Uploaded once, never modified afterwards.
#[derive(Debug)]
pub struct Mesh {
    pub label: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    /// Indices to draw when indexed, vertices otherwise.
    pub num_elements: u32,
}

impl Mesh {
    /// Non-indexed geometry, drawn as a plain vertex range.
    pub fn new<V: Vertex>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Self {
        let vertex_buffer = Self::vertex_buffer(device, label, vertices);
        Self {
            label: label.to_string(),
            vertex_buffer,
            index_buffer: None,
            num_elements: vertices.len() as u32,
        }
    }

    /// Geometry drawn through an element buffer of `u32` indices.
    pub fn indexed<V: Vertex>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        let vertex_buffer = Self::vertex_buffer(device, label, vertices);
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            label: label.to_string(),
            vertex_buffer,
            index_buffer: Some(index_buffer),
            num_elements: indices.len() as u32,
        }
    }

    fn vertex_buffer<V: Vertex>(device: &wgpu::Device, label: &str, vertices: &[V]) -> wgpu::Buffer {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        })
    }

    /// Bind the buffers and issue one draw call for the whole mesh.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(index_buffer) => {
                render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..self.num_elements, 0, 0..1);
            }
            None => render_pass.draw(0..self.num_elements, 0..1),
        }
    }
}
