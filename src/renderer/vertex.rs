use std::mem::{offset_of, size_of};

/// Interleaved vertex shared by the plane and cube meshes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
    pub normal: [f32; 3],
}

/// One `glVertexAttribPointer` entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub offset: i32,
}

impl Vertex {
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;

    /// Matches `layout (location = N)` in the vertex shader.
    pub const ATTRIBUTES: [VertexAttribute; 3] = [
        VertexAttribute {
            location: 0,
            components: 3,
            offset: offset_of!(Vertex, position) as i32,
        },
        VertexAttribute {
            location: 1,
            components: 2,
            offset: offset_of!(Vertex, tex_coord) as i32,
        },
        VertexAttribute {
            location: 2,
            components: 3,
            offset: offset_of!(Vertex, normal) as i32,
        },
    ];

    pub const fn new(position: [f32; 3], tex_coord: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}
