use std::path::PathBuf;

/**
 * This module contains all logic for loading shaders/textures from the assets directory.
 */
pub mod texture;

/// Directory every lesson reads its files from, relative to the working directory.
pub const ASSET_DIR: &str = "assets";

/// Path of `file_name` inside the assets directory.
pub fn asset_path(file_name: &str) -> PathBuf {
    std::path::Path::new("./").join(ASSET_DIR).join(file_name)
}

/// Path of a shader source file, stored under `assets/shaders`.
pub fn shader_path(file_name: &str) -> PathBuf {
    asset_path(&format!("shaders/{file_name}"))
}
