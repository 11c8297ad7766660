#[cfg(feature = "integration-tests")]
mod common;

#[cfg(feature = "integration-tests")]
const BROKEN_VERTEX_SHADER: &str = r#"
@vertex
fn vs_main(@location(0) a_pos: vec3<f32> -> @builtin(position) vec4<f32> {
    return vec4<f32>(a_pos, 1.0)
}
"#;

#[test]
#[cfg(feature = "integration-tests")]
fn should_link_valid_sources() {
    use lesson_ngin::{
        data_structures::vertex::{PositionVertex, Vertex},
        lessons::hello_triangle::{FRAGMENT_SHADER, VERTEX_SHADER},
        shader::{Program, ProgramOptions},
    };

    use crate::common::test_utils::{block_on, headless_context};

    block_on(async {
        let init = headless_context().await;
        let layouts = [PositionVertex::desc()];
        let program = Program::from_sources(
            &init.device,
            init.format,
            VERTEX_SHADER,
            FRAGMENT_SHADER,
            &ProgramOptions::new("valid", &layouts),
        )
        .await;
        assert!(program.is_linked());
        assert!(program.is_drawable());
        assert!(program.info_log().is_empty());
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_report_compile_error_without_panic() {
    use lesson_ngin::{
        data_structures::vertex::{PositionVertex, Vertex},
        lessons::hello_triangle::FRAGMENT_SHADER,
        shader::{INFO_LOG_CAPACITY, Program, ProgramOptions, Shader, ShaderStage},
    };

    use crate::common::test_utils::{block_on, headless_context};

    block_on(async {
        let init = headless_context().await;
        let vertex = Shader::compile(
            &init.device,
            ShaderStage::Vertex,
            "broken vertex",
            BROKEN_VERTEX_SHADER,
        )
        .await;
        assert!(!vertex.is_compiled());
        assert!(!vertex.info_log().is_empty());
        assert!(vertex.info_log().len() <= INFO_LOG_CAPACITY);

        let fragment = Shader::compile(
            &init.device,
            ShaderStage::Fragment,
            "fragment",
            FRAGMENT_SHADER,
        )
        .await;
        assert!(fragment.is_compiled());

        // linking still happens and reports the failure
        let layouts = [PositionVertex::desc()];
        let program = Program::link(
            &init.device,
            init.format,
            &vertex,
            &fragment,
            &ProgramOptions::new("broken", &layouts),
        )
        .await;
        assert!(!program.is_linked());
        assert!(!program.info_log().is_empty());
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_resolve_only_declared_uniforms() {
    use lesson_ngin::{
        data_structures::vertex::{TexVertex, Vertex},
        lessons::rotate_texture::{FRAGMENT_SHADER_FILE, VERTEX_SHADER_FILE, uniforms},
        resources::shader_path,
        shader::{Program, ProgramOptions, UniformKind},
    };

    use crate::common::test_utils::{block_on, headless_context};

    block_on(async {
        let init = headless_context().await;
        let layouts = [TexVertex::desc()];
        let program = Program::from_files(
            &init.device,
            init.format,
            shader_path(VERTEX_SHADER_FILE),
            shader_path(FRAGMENT_SHADER_FILE),
            &ProgramOptions::new("uniforms", &layouts)
                .with_uniforms(uniforms())
                .with_textures(2),
        )
        .await
        .expect("shader files are part of the crate");
        assert!(program.is_linked());

        assert_eq!(program.uniform_location("doesNotExist"), None);
        let mix_value = program
            .uniform_location("mix_value")
            .expect("mix_value is declared");
        assert_eq!(mix_value.kind, UniformKind::Float);
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_fail_to_read_missing_shader_file() {
    use lesson_ngin::{
        data_structures::vertex::{PositionVertex, Vertex},
        shader::{Program, ProgramOptions, ShaderError, ShaderStage},
    };

    use crate::common::test_utils::{block_on, headless_context};

    block_on(async {
        let init = headless_context().await;
        let layouts = [PositionVertex::desc()];
        let result = Program::from_files(
            &init.device,
            init.format,
            "assets/shaders/missing.vert.wgsl",
            "assets/shaders/missing.frag.wgsl",
            &ProgramOptions::new("missing", &layouts),
        )
        .await;
        match result {
            Err(ShaderError::Read { stage, .. }) => assert_eq!(stage, ShaderStage::Vertex),
            Ok(_) => panic!("a missing shader file must not produce a program"),
        }
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_not_draw_program_with_unbound_textures() {
    use lesson_ngin::{
        data_structures::vertex::{TexVertex, Vertex},
        lessons::rotate_texture::{FRAGMENT_SHADER_FILE, VERTEX_SHADER_FILE, uniforms},
        resources::shader_path,
        shader::{Program, ProgramOptions},
    };

    use crate::common::test_utils::{block_on, headless_context};

    block_on(async {
        let init = headless_context().await;
        let layouts = [TexVertex::desc()];
        let mut program = Program::from_files(
            &init.device,
            init.format,
            shader_path(VERTEX_SHADER_FILE),
            shader_path(FRAGMENT_SHADER_FILE),
            &ProgramOptions::new("textures", &layouts)
                .with_uniforms(uniforms())
                .with_textures(2),
        )
        .await
        .expect("shader files are part of the crate");
        assert!(program.is_linked());
        assert!(!program.is_drawable());

        assert!(program.bind_textures(&init.device, &[]).is_err());
        assert!(!program.is_drawable());
    });
}
