//! Two blended textures on a quad that spins around the bottom right corner.
//!
//! Up and down arrows shift the blend between the textures.

use cgmath::{Matrix4, Rad, SquareMatrix, vec3};
use instant::Duration;
use winit::keyboard::KeyCode;

use crate::{
    config::LessonConfig,
    context::{Context, InitContext},
    data_structures::{
        mesh::Mesh,
        texture::Texture,
        vertex::{TexVertex, Vertex},
    },
    flow::{Input, Lesson},
    lessons::{CONTAINER_TEXTURE, FACE_TEXTURE, QUAD_INDICES, QUAD_VERTICES, TITLE},
    render::{DrawCall, Render},
    resources::{shader_path, texture::load_texture},
    shader::{Program, ProgramOptions, UniformKind, UniformLayout},
};

pub const VERTEX_SHADER_FILE: &str = "5.1.transform.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "5.1.transform.frag.wgsl";

pub const INITIAL_MIX: f32 = 0.2;
/// Change of the blend factor per frame while an arrow key is held.
pub const MIX_STEP: f32 = 0.01;

pub fn uniforms() -> UniformLayout {
    UniformLayout::new()
        .with("transform", UniformKind::Mat4)
        .with("mix_value", UniformKind::Float)
}

/// Move to the bottom right, then rotate `seconds` radians around z.
pub fn transform(seconds: f32) -> Matrix4<f32> {
    Matrix4::from_translation(vec3(0.5, -0.5, 0.0)) * Matrix4::from_angle_z(Rad(seconds))
}

/// Next blend factor for the keys held this frame, clamped to `[0, 1]`.
pub fn step_mix(mix_value: f32, input: &Input) -> f32 {
    let mut next = mix_value;
    if input.is_pressed(KeyCode::ArrowUp) {
        next += MIX_STEP;
    }
    if input.is_pressed(KeyCode::ArrowDown) {
        next -= MIX_STEP;
    }
    next.clamp(0.0, 1.0)
}

#[derive(Debug)]
pub struct RotateTexture {
    pub program: Program,
    pub quad: Mesh,
    pub container: Texture,
    pub face: Texture,
    pub mix_value: f32,
}

impl RotateTexture {
    pub fn config() -> LessonConfig {
        LessonConfig::new(TITLE)
    }

    pub async fn new(init: InitContext) -> anyhow::Result<Self> {
        let device = &init.device;
        let queue = &init.queue;
        let layouts = [TexVertex::desc()];
        let options = ProgramOptions::new("rotate_texture", &layouts)
            .with_uniforms(uniforms())
            .with_textures(2);
        let mut program = Program::from_files(
            device,
            init.format,
            shader_path(VERTEX_SHADER_FILE),
            shader_path(FRAGMENT_SHADER_FILE),
            &options,
        )
        .await?;

        let container = load_texture(CONTAINER_TEXTURE, true, device, queue).await;
        let face = load_texture(FACE_TEXTURE, true, device, queue).await;
        program.bind_textures(device, &[&container, &face])?;

        program.set_mat4(queue, "transform", Matrix4::identity());
        program.set_float(queue, "mix_value", INITIAL_MIX);

        Ok(Self {
            program,
            quad: Mesh::indexed(device, "quad", &QUAD_VERTICES, &QUAD_INDICES),
            container,
            face,
            mix_value: INITIAL_MIX,
        })
    }
}

impl Lesson for RotateTexture {
    fn on_update(&mut self, ctx: &Context, input: &Input, _dt: Duration) {
        self.mix_value = step_mix(self.mix_value, input);
        self.program
            .set_float(&ctx.queue, "mix_value", self.mix_value);
        self.program.set_mat4(
            &ctx.queue,
            "transform",
            transform(ctx.elapsed().as_secs_f32()),
        );
    }

    fn on_render(&self) -> Render<'_> {
        DrawCall::new(&self.program, &self.quad).into()
    }
}
