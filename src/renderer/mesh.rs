use glow::HasContext;

use super::vertex::Vertex;
use crate::error::SceneError;

/// A VAO/VBO pair holding one static mesh.
pub struct GpuMesh {
    pub vao: glow::VertexArray,
    vbo: glow::Buffer,
}

impl GpuMesh {
    pub fn upload(gl: &glow::Context, vertices: &[Vertex]) -> Result<Self, SceneError> {
        unsafe {
            let vao = gl.create_vertex_array().map_err(SceneError::GlObject)?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer().map_err(SceneError::GlObject)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            for attribute in Vertex::ATTRIBUTES {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    Vertex::STRIDE,
                    attribute.offset,
                );
                gl.enable_vertex_attrib_array(attribute.location);
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self { vao, vbo })
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}
