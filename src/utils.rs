use wgpu::util::DeviceExt;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const fn new(pos: [f32; 3], color: [f32; 3], uv: [f32; 2]) -> Self {
        Self { pos, color, uv }
    }
}

pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Half the width and height of the mesh's bounding box in the XY plane.
    pub fn half_extents(&self) -> Vec2 {
        let Some(first) = self.vertices.first() else {
            return Vec2::ZERO;
        };
        let start = Vec2::new(first.pos[0], first.pos[1]);
        let (min, max) = self.vertices.iter().fold((start, start), |(min, max), v| {
            let p = Vec2::new(v.pos[0], v.pos[1]);
            (min.min(p), max.max(p))
        });
        (max - min) / 2.0
    }

    pub fn upload(&self, device: &wgpu::Device) -> MeshBuffer {

        let vertices = bytemuck::cast_slice(&self.vertices);
        let indices = bytemuck::cast_slice(&self.indices);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: vertices,
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: indices,
            usage: wgpu::BufferUsages::INDEX,
        });

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: self.indices.len() as u32,
        }
    }
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Textured 0.2 x 0.2 quad centred on the origin
pub fn create_quad_mesh() -> Mesh {
    let verts = vec![
        Vertex::new([0.1, 0.1, 0.0], WHITE, [1.0, 1.0]),   // top right
        Vertex::new([0.1, -0.1, 0.0], WHITE, [1.0, 0.0]),  // bottom right
        Vertex::new([-0.1, -0.1, 0.0], WHITE, [0.0, 0.0]), // bottom left
        Vertex::new([-0.1, 0.1, 0.0], WHITE, [0.0, 1.0]),  // top left
    ];
    let indices = vec![
        0, 1, 3,
        1, 2, 3,
    ];

    Mesh { vertices: verts, indices }
}

/// Brick-breaker paddle resting on the bottom edge of the viewport
pub fn create_paddle_mesh() -> Mesh {
    let color = [0.9, 0.9, 0.9];
    let verts = vec![
        Vertex::new([0.15, -0.9, 0.0], color, [1.0, 1.0]),
        Vertex::new([0.15, -1.0, 0.0], color, [1.0, 0.0]),
        Vertex::new([-0.15, -1.0, 0.0], color, [0.0, 0.0]),
        Vertex::new([-0.15, -0.9, 0.0], color, [0.0, 1.0]),
    ];
    let indices = vec![
        0, 1, 3,
        1, 2, 3,
    ];

    Mesh { vertices: verts, indices }
}

/// Textured quad wound as two triangles sharing the 0-2 diagonal
pub fn create_model_mesh() -> Mesh {
    let mut mesh = create_quad_mesh();
    mesh.indices = vec![
        0, 1, 2,
        2, 3, 0,
    ];
    mesh
}

/// Red/green/blue triangle, colours interpolated across the face
pub fn create_triangle_mesh() -> Mesh {
    let verts = vec![
        Vertex::new([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
        Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
        Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0]),
    ];

    Mesh { vertices: verts, indices: vec![0, 1, 2] }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    #[test]
    fn test_quad_half_extents() {
        assert!(close(create_quad_mesh().half_extents(), Vec2::new(0.1, 0.1)));
    }

    #[test]
    fn test_paddle_half_extents() {
        // off-centre in y, but the extent only depends on the span
        assert!(close(create_paddle_mesh().half_extents(), Vec2::new(0.15, 0.05)));
    }

    #[test]
    fn test_empty_mesh_has_no_extent() {
        let mesh = Mesh { vertices: Vec::new(), indices: Vec::new() };
        assert_eq!(mesh.half_extents(), Vec2::ZERO);
    }

    #[test]
    fn test_indices_in_range() {
        for mesh in [create_quad_mesh(), create_paddle_mesh(), create_model_mesh(), create_triangle_mesh()] {
            assert_eq!(mesh.indices.len() % 3, 0);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        }
    }
}
