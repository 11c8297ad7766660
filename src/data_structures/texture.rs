//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around a WGPU texture with its
//! view and sampler, and helpers to decode image bytes into it. Decoding is
//! kept separate from the upload ([`decode`]) so it can run without a device.

use anyhow::*;
use image::RgbaImage;

/// A GPU texture with a view and a sampler.
///
/// Created once from decoded image data via [`from_bytes`](Self::from_bytes)
/// or as a generated [`checkerboard`](Self::checkerboard) stand-in.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Texels are uploaded as they are stored in the file, without any colour
    /// space conversion.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// Edge length of the generated checkerboard in texels.
    pub const CHECKERBOARD_SIZE: u32 = 64;

    /// Load a texture from raw byte data (image file contents).
    ///
    /// # Arguments
    ///
    /// * `bytes` represent raw image file data (PNG, JPEG)
    /// * `label` is used as a debug name for the GPU resource
    /// * `flip_vertically` puts the first row of the file at the bottom, so
    ///   texture coordinate `v = 0` addresses the bottom of the image
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
        flip_vertically: bool,
    ) -> Result<Self> {
        let rgba = decode(bytes, flip_vertically).with_context(|| format!("decoding {label}"))?;
        Ok(Self::from_image(device, queue, &rgba, Some(label)))
    }

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &RgbaImage,
        label: Option<&str>,
    ) -> Self {
        let dimensions = rgba.dimensions();
        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// A black and magenta checkerboard, bound in place of a texture that
    /// could not be loaded.
    pub fn checkerboard(device: &wgpu::Device, queue: &wgpu::Queue, label: &str) -> Self {
        let rgba = checkerboard_image(Self::CHECKERBOARD_SIZE, Self::CHECKERBOARD_SIZE / 8);
        Self::from_image(device, queue, &rgba, Some(label))
    }
}

/// Decode image file bytes into RGBA8 texels.
pub fn decode(bytes: &[u8], flip_vertically: bool) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    let img = if flip_vertically { img.flipv() } else { img };
    Ok(img.to_rgba8())
}

/// A `size` x `size` checkerboard made of `cell` x `cell` squares.
pub fn checkerboard_image(size: u32, cell: u32) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            image::Rgba([255, 0, 255, 255])
        } else {
            image::Rgba([0, 0, 0, 255])
        }
    })
}

/// Repeat wrapping and linear filtering, the setup every textured lesson uses.
pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}
