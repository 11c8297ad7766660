use lesson_ngin::{
    lessons::rotate_texture::VERTEX_SHADER_FILE,
    resources::{shader_path, texture::load_binary},
};

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Runtime::new()
        .expect("Failed to start the tokio runtime.")
        .block_on(future)
}

#[test]
fn should_load_asset_bytes_through_the_asset_dir() {
    let bytes = block_on(load_binary(&format!("shaders/{VERTEX_SHADER_FILE}")))
        .expect("shader files are part of the crate");
    let on_disk = std::fs::read(shader_path(VERTEX_SHADER_FILE)).expect("reading the shader");
    assert_eq!(bytes, on_disk);
}

#[test]
fn should_fail_on_missing_asset() {
    assert!(block_on(load_binary("textures/does_not_exist.png")).is_err());
}
