//! The textured quad tilted back into 3D with model, view and projection
//! matrices.

use cgmath::{Deg, Matrix4, perspective, vec3};
use instant::Duration;

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

pub const VERTEX_SHADER_FILE: &str = "6.1.coordinate_systems.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "6.1.coordinate_systems.frag.wgsl";

/// Maps GL clip space depth (`-1..1`) onto wgpu's (`0..1`).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub const FOV_Y: Deg<f32> = Deg(45.0);
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

pub fn uniforms() -> UniformLayout {
    UniformLayout::new()
        .with("model", UniformKind::Mat4)
        .with("view", UniformKind::Mat4)
        .with("projection", UniformKind::Mat4)
}

/// Lay the quad back by 55 degrees around the x axis.
pub fn model() -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(-55.0))
}

/// Move the scene 3 units away from the camera.
pub fn view() -> Matrix4<f32> {
    Matrix4::from_translation(vec3(0.0, 0.0, -3.0))
}

pub fn projection(aspect_ratio: f32) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX * perspective(FOV_Y, aspect_ratio, Z_NEAR, Z_FAR)
}

#[derive(Debug)]
pub struct CoordinateSystems {
    pub program: Program,
    pub quad: Mesh,
    pub container: Texture,
    pub face: Texture,
}

impl CoordinateSystems {
    pub fn config() -> LessonConfig {
        LessonConfig::new(TITLE)
    }

    pub async fn new(init: InitContext) -> anyhow::Result<Self> {
        let device = &init.device;
        let queue = &init.queue;
        let layouts = [TexVertex::desc()];
        let options = ProgramOptions::new("coordinate_systems", &layouts)
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

        program.set_mat4(queue, "model", model());
        program.set_mat4(queue, "view", view());
        program.set_mat4(
            queue,
            "projection",
            projection(init.viewport.aspect_ratio()),
        );

        Ok(Self {
            program,
            quad: Mesh::indexed(device, "quad", &QUAD_VERTICES, &QUAD_INDICES),
            container,
            face,
        })
    }
}

impl Lesson for CoordinateSystems {
    fn on_update(&mut self, ctx: &Context, _input: &Input, _dt: Duration) {
        // follows the window's aspect ratio after a resize
        self.program.set_mat4(
            &ctx.queue,
            "projection",
            projection(ctx.viewport.aspect_ratio()),
        );
    }

    fn on_render(&self) -> Render<'_> {
        DrawCall::new(&self.program, &self.quad).into()
    }
}
