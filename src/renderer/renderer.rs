use glow::HasContext;

use crate::error::SceneError;
use crate::renderer::frame::{FramePlan, MeshId};
use crate::renderer::geometry::{CUBE_VERTICES, PLANE_VERTICES};
use crate::renderer::mesh::GpuMesh;
use crate::renderer::shader::SceneShader;
use crate::texture::TextureImage;

const TEXTURE_UNIT: i32 = 0;

/// Owns every GL object the scene uses. Created once after the context is
/// current and released once through [`Renderer::destroy`].
pub struct Renderer {
    shader: SceneShader,
    plane: GpuMesh,
    cube: GpuMesh,
    texture: glow::Texture,
}

impl Renderer {
    pub fn new(gl: &glow::Context, image: &TextureImage) -> Result<Self, SceneError> {
        unsafe {
            log::info!("GL version: {}", gl.get_parameter_string(glow::VERSION));
        }

        let shader = SceneShader::new(gl)?;
        let plane = GpuMesh::upload(gl, &PLANE_VERTICES)?;
        let cube = GpuMesh::upload(gl, &CUBE_VERTICES)?;
        let texture = upload_texture(gl, image)?;

        Ok(Self {
            shader,
            plane,
            cube,
            texture,
        })
    }

    fn mesh(&self, id: MeshId) -> &GpuMesh {
        match id {
            MeshId::Plane => &self.plane,
            MeshId::Cube => &self.cube,
        }
    }

    /// Clear and issue every draw in `plan`, in order.
    pub fn render(&self, gl: &glow::Context, plan: &FramePlan) {
        let uniforms = &self.shader.uniforms;

        unsafe {
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.use_program(Some(self.shader.program));
            gl.uniform_matrix_4_f32_slice(
                uniforms.projection.as_ref(),
                false,
                plan.projection.as_slice(),
            );
            gl.uniform_matrix_4_f32_slice(uniforms.view.as_ref(), false, plan.view.as_slice());
            gl.uniform_3_f32_slice(uniforms.light_pos.as_ref(), plan.light_position.as_slice());
            gl.uniform_3_f32_slice(uniforms.view_pos.as_ref(), plan.view_position.as_slice());

            gl.active_texture(glow::TEXTURE0 + TEXTURE_UNIT as u32);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
            gl.uniform_1_i32(uniforms.texture.as_ref(), TEXTURE_UNIT);

            for draw in &plan.draws {
                gl.uniform_matrix_4_f32_slice(uniforms.model.as_ref(), false, draw.model.as_slice());
                gl.bind_vertex_array(Some(self.mesh(draw.mesh).vao));
                gl.draw_arrays(glow::TRIANGLES, 0, draw.vertex_count);
            }

            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        self.plane.destroy(gl);
        self.cube.destroy(gl);
        self.shader.destroy(gl);
        unsafe {
            gl.delete_texture(self.texture);
        }
    }
}

/// Upload RGB8 pixels with repeat wrapping, linear filtering and mipmaps.
fn upload_texture(gl: &glow::Context, image: &TextureImage) -> Result<glow::Texture, SceneError> {
    unsafe {
        let texture = gl.create_texture().map_err(SceneError::GlObject)?;
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);

        // RGB rows are not 4-byte aligned for arbitrary widths
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGB as i32,
            image.width as i32,
            image.height as i32,
            0,
            glow::RGB,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(&image.pixels)),
        );
        gl.generate_mipmap(glow::TEXTURE_2D);

        log::info!("Loaded texture ({}x{})", image.width, image.height);
        Ok(texture)
    }
}
