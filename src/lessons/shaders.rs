//! Per-vertex colours with shaders loaded from files.

use crate::{
    config::LessonConfig,
    context::InitContext,
    data_structures::{
        mesh::Mesh,
        vertex::{ColorVertex, Vertex},
    },
    flow::Lesson,
    lessons::TITLE,
    render::{DrawCall, Render},
    resources::shader_path,
    shader::{Program, ProgramOptions},
};

pub const VERTEX_SHADER_FILE: &str = "3.3.shader.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "3.3.shader.frag.wgsl";

pub const VERTICES: [ColorVertex; 3] = [
    // bottom right
    ColorVertex {
        position: [0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    // bottom left
    ColorVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    // top
    ColorVertex {
        position: [0.0, 0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
];

#[derive(Debug)]
pub struct Shaders {
    pub program: Program,
    pub triangle: Mesh,
}

impl Shaders {
    pub fn config() -> LessonConfig {
        LessonConfig::new(TITLE)
    }

    pub async fn new(init: InitContext) -> anyhow::Result<Self> {
        let layouts = [ColorVertex::desc()];
        let program = Program::from_files(
            &init.device,
            init.format,
            shader_path(VERTEX_SHADER_FILE),
            shader_path(FRAGMENT_SHADER_FILE),
            &ProgramOptions::new("shaders", &layouts),
        )
        .await?;
        let triangle = Mesh::new(&init.device, "colored triangle", &VERTICES);
        Ok(Self { program, triangle })
    }
}

impl Lesson for Shaders {
    fn on_render(&self) -> Render<'_> {
        DrawCall::new(&self.program, &self.triangle).into()
    }
}
