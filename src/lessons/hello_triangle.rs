//! One orange triangle from inline shader sources.

use crate::{
    config::LessonConfig,
    context::InitContext,
    data_structures::{
        mesh::Mesh,
        vertex::{PositionVertex, Vertex},
    },
    flow::Lesson,
    lessons::TITLE,
    render::{DrawCall, Render},
    shader::{Program, ProgramOptions},
};

pub const VERTEX_SHADER: &str = r#"
@vertex
fn vs_main(@location(0) a_pos: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(a_pos.x, a_pos.y, a_pos.z, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.5, 0.2, 1.0);
}
"#;

pub const VERTICES: [PositionVertex; 3] = [
    PositionVertex {
        position: [-0.5, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.5, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.0, 0.5, 0.0],
    },
];

#[derive(Debug)]
pub struct HelloTriangle {
    pub program: Program,
    pub triangle: Mesh,
}

impl HelloTriangle {
    pub fn config() -> LessonConfig {
        LessonConfig::new(TITLE)
    }

    pub async fn new(init: InitContext) -> anyhow::Result<Self> {
        let layouts = [PositionVertex::desc()];
        let options = ProgramOptions::new("hello_triangle", &layouts);
        let program = Program::from_sources(
            &init.device,
            init.format,
            VERTEX_SHADER,
            FRAGMENT_SHADER,
            &options,
        )
        .await;
        let triangle = Mesh::new(&init.device, "triangle", &VERTICES);
        Ok(Self { program, triangle })
    }
}

impl Lesson for HelloTriangle {
    fn on_render(&self) -> Render<'_> {
        DrawCall::new(&self.program, &self.triangle).into()
    }
}
