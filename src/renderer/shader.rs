use glow::HasContext;

use crate::error::SceneError;

pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;
layout (location = 2) in vec3 aNormal;

out vec2 TexCoord;
out vec3 FragPos;
out vec3 Normal;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

void main()
{
    gl_Position = projection * view * model * vec4(aPos, 1.0);
    TexCoord = aTexCoord;
    FragPos = vec3(model * vec4(aPos, 1.0));
    Normal = mat3(transpose(inverse(model))) * aNormal;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 330 core
in vec2 TexCoord;
in vec3 FragPos;
in vec3 Normal;
out vec4 FragColor;

uniform sampler2D ourTexture;
uniform vec3 lightPos;
uniform vec3 viewPos;

void main()
{
    vec3 objectColor = texture(ourTexture, TexCoord).rgb;
    vec3 lightDir = normalize(lightPos - FragPos);
    float diff = max(dot(normalize(Normal), lightDir), 0.0);
    FragColor = vec4(diff * objectColor, 1.0);
}
"#;

/// Uniform locations resolved once after linking. A `None` entry means the
/// driver optimised the uniform away or linking failed; setting it is a no-op.
#[derive(Debug, Default)]
pub struct UniformLocations {
    pub model: Option<glow::UniformLocation>,
    pub view: Option<glow::UniformLocation>,
    pub projection: Option<glow::UniformLocation>,
    pub light_pos: Option<glow::UniformLocation>,
    pub view_pos: Option<glow::UniformLocation>,
    pub texture: Option<glow::UniformLocation>,
}

impl UniformLocations {
    fn lookup(gl: &glow::Context, program: glow::Program) -> Self {
        let find = |name: &str| {
            let location = unsafe { gl.get_uniform_location(program, name) };
            if location.is_none() {
                log::debug!("uniform `{name}` not active in scene program");
            }
            location
        };

        Self {
            model: find("model"),
            view: find("view"),
            projection: find("projection"),
            light_pos: find("lightPos"),
            view_pos: find("viewPos"),
            texture: find("ourTexture"),
        }
    }
}

/// The single program shared by the plane and cube draws.
pub struct SceneShader {
    pub program: glow::Program,
    pub uniforms: UniformLocations,
}

impl SceneShader {
    /// Compile and link the embedded sources. Compile and link failures are
    /// logged and rendering carries on with whatever the driver produced.
    pub fn new(gl: &glow::Context) -> Result<Self, SceneError> {
        unsafe {
            let vert = compile_stage(gl, glow::VERTEX_SHADER, VERTEX_SHADER, "vertex")?;
            let frag = compile_stage(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER, "fragment")?;

            let program = gl.create_program().map_err(SceneError::GlObject)?;
            gl.attach_shader(program, vert);
            gl.attach_shader(program, frag);
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                log::error!(
                    "scene program failed to link: {}",
                    gl.get_program_info_log(program)
                );
            }

            gl.detach_shader(program, vert);
            gl.detach_shader(program, frag);
            gl.delete_shader(vert);
            gl.delete_shader(frag);

            let uniforms = UniformLocations::lookup(gl, program);

            Ok(Self { program, uniforms })
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    source: &str,
    label: &str,
) -> Result<glow::Shader, SceneError> {
    unsafe {
        let shader = gl.create_shader(stage).map_err(SceneError::GlObject)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            log::error!(
                "{label} shader failed to compile: {}",
                gl.get_shader_info_log(shader)
            );
        }
        Ok(shader)
    }
}
