//! Two triangles, each drawn with its own program.
//!
//! Both programs share one compiled vertex shader and differ only in the
//! fragment shader, which emits orange for the left and yellow for the right
//! triangle.

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
    shader::{Program, ProgramOptions, Shader, ShaderStage},
};

pub const VERTEX_SHADER: &str = r#"
@vertex
fn vs_main(@location(0) a_pos: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(a_pos.x, a_pos.y, a_pos.z, 1.0);
}
"#;

pub const ORANGE_FRAGMENT_SHADER: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.5, 0.2, 1.0);
}
"#;

pub const YELLOW_FRAGMENT_SHADER: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 0.0, 1.0);
}
"#;

pub const FIRST_TRIANGLE: [PositionVertex; 3] = [
    PositionVertex {
        position: [-0.9, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.0, -0.5, 0.0],
    },
    PositionVertex {
        position: [-0.45, 0.5, 0.0],
    },
];

pub const SECOND_TRIANGLE: [PositionVertex; 3] = [
    PositionVertex {
        position: [0.0, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.9, -0.5, 0.0],
    },
    PositionVertex {
        position: [0.45, 0.5, 0.0],
    },
];

#[derive(Debug)]
pub struct TwoTriangles {
    pub orange: Program,
    pub yellow: Program,
    pub first: Mesh,
    pub second: Mesh,
}

impl TwoTriangles {
    pub fn config() -> LessonConfig {
        LessonConfig::new(TITLE)
    }

    pub async fn new(init: InitContext) -> anyhow::Result<Self> {
        let device = &init.device;
        let vertex =
            Shader::compile(device, ShaderStage::Vertex, "shared vertex", VERTEX_SHADER).await;
        let orange_fragment = Shader::compile(
            device,
            ShaderStage::Fragment,
            "orange fragment",
            ORANGE_FRAGMENT_SHADER,
        )
        .await;
        let yellow_fragment = Shader::compile(
            device,
            ShaderStage::Fragment,
            "yellow fragment",
            YELLOW_FRAGMENT_SHADER,
        )
        .await;

        let layouts = [PositionVertex::desc()];
        let orange = Program::link(
            device,
            init.format,
            &vertex,
            &orange_fragment,
            &ProgramOptions::new("orange", &layouts),
        )
        .await;
        let yellow = Program::link(
            device,
            init.format,
            &vertex,
            &yellow_fragment,
            &ProgramOptions::new("yellow", &layouts),
        )
        .await;

        Ok(Self {
            orange,
            yellow,
            first: Mesh::new(device, "first triangle", &FIRST_TRIANGLE),
            second: Mesh::new(device, "second triangle", &SECOND_TRIANGLE),
        })
    }
}

impl Lesson for TwoTriangles {
    fn on_render(&self) -> Render<'_> {
        Render::Draws(vec![
            DrawCall::new(&self.orange, &self.first),
            DrawCall::new(&self.yellow, &self.second),
        ])
    }
}
