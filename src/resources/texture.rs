use crate::{data_structures::texture::Texture, resources::asset_path};

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    let path = asset_path(file_name);
    let data = tokio::fs::read(&path).await?;
    Ok(data)
}

/// Load and decode an image from the assets directory into a texture.
pub async fn try_load_texture(
    file_name: &str,
    flip_vertically: bool,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let data = load_binary(file_name).await?;
    Texture::from_bytes(device, queue, &data, file_name, flip_vertically)
}

/// Like [`try_load_texture`], but a missing or broken image is logged and
/// replaced by a checkerboard so the lesson keeps running.
pub async fn load_texture(
    file_name: &str,
    flip_vertically: bool,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> Texture {
    match try_load_texture(file_name, flip_vertically, device, queue).await {
        Ok(texture) => texture,
        Err(e) => {
            log::error!("failed to load texture {file_name}: {e:#}");
            Texture::checkerboard(device, queue, file_name)
        }
    }
}
