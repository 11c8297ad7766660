use lesson_ngin::{
    resources::shader_path,
    shader::{
        FRAGMENT_ENTRY, INFO_LOG_CAPACITY, ShaderError, ShaderStage, VERTEX_ENTRY, read_source,
        truncate_info_log,
    },
};

#[test]
fn should_read_shader_source_from_assets() {
    let source = read_source(ShaderStage::Vertex, shader_path("3.3.shader.vert.wgsl"))
        .expect("shader is part of the crate");
    assert!(source.contains(VERTEX_ENTRY));

    let source = read_source(ShaderStage::Fragment, shader_path("3.3.shader.frag.wgsl"))
        .expect("shader is part of the crate");
    assert!(source.contains(FRAGMENT_ENTRY));
}

#[test]
fn should_return_typed_error_for_missing_file() {
    let path = shader_path("does_not_exist.vert.wgsl");
    let err = read_source(ShaderStage::Fragment, &path).unwrap_err();
    let ShaderError::Read {
        stage,
        path: err_path,
        source,
    } = &err;
    assert_eq!(*stage, ShaderStage::Fragment);
    assert_eq!(err_path, &path);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);

    let message = err.to_string();
    assert!(message.contains("FRAGMENT"));
    assert!(message.contains("does_not_exist.vert.wgsl"));
}

#[test]
fn should_keep_short_logs_untouched() {
    let log = "error: expected ';'";
    assert_eq!(truncate_info_log(log, INFO_LOG_CAPACITY), log);
}

#[test]
fn should_cap_logs_at_capacity() {
    let log = "x".repeat(INFO_LOG_CAPACITY + 100);
    assert_eq!(
        truncate_info_log(&log, INFO_LOG_CAPACITY).len(),
        INFO_LOG_CAPACITY
    );
}

#[test]
fn should_not_split_multibyte_characters() {
    // 3 bytes each, 1024 is not a multiple of 3
    let log = "€".repeat(400);
    let truncated = truncate_info_log(&log, INFO_LOG_CAPACITY);
    assert_eq!(truncated.len(), 1023);
    assert!(truncated.chars().all(|c| c == '€'));
}

#[test]
fn should_name_stages_and_entry_points() {
    assert_eq!(ShaderStage::Vertex.to_string(), "VERTEX");
    assert_eq!(ShaderStage::Fragment.to_string(), "FRAGMENT");
    assert_eq!(ShaderStage::Vertex.entry_point(), "vs_main");
    assert_eq!(ShaderStage::Fragment.entry_point(), "fs_main");
}
