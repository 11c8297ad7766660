//! Draw call composition and frame encoding.
//!
//! Lessons describe what to draw each frame through the [`Render`] enum. The
//! runner flattens it into [`DrawCall`]s and encodes them into one render
//! pass that clears the target first.
//!
//! # Key types
//!
//! - [`Render<'a>`] is the enum a lesson returns from `on_render`
//! - [`DrawCall<'a>`] pairs a program with the mesh it draws
//!

use crate::{data_structures::mesh::Mesh, shader::Program, viewport::Viewport};

/// One program activation followed by one draw of a mesh.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    pub program: &'a Program,
    pub mesh: &'a Mesh,
}

impl<'a> DrawCall<'a> {
    pub fn new(program: &'a Program, mesh: &'a Mesh) -> Self {
        Self { program, mesh }
    }
}

/// What a lesson draws in the current frame, in draw order.
///
/// # Variants
///
/// - `None` only clears the frame
/// - `Draw(DrawCall)` issues a single draw call
/// - `Draws(Vec<DrawCall>)` issues several draw calls in order
/// - `Composed(Vec<Render>)` recursively renders a composition of renders
///
#[derive(Debug)]
pub enum Render<'a> {
    None,
    Draw(DrawCall<'a>),
    Draws(Vec<DrawCall<'a>>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    fn flatten(self, calls: &mut Vec<DrawCall<'a>>) {
        match self {
            Render::None => (),
            Render::Draw(call) => calls.push(call),
            Render::Draws(mut vec) => calls.append(&mut vec),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.flatten(calls)),
        }
    }

    /// All draw calls in the order they are issued.
    pub fn draw_calls(self) -> Vec<DrawCall<'a>> {
        let mut calls = Vec::new();
        self.flatten(&mut calls);
        calls
    }
}

impl<'a> From<DrawCall<'a>> for Render<'a> {
    fn from(call: DrawCall<'a>) -> Self {
        Render::Draw(call)
    }
}

/// Clear `view`, then issue every draw call of `render` inside `viewport`.
///
/// Draw calls whose program did not link, or still lacks its textures, are
/// skipped with a warning. Returns the number of draw calls issued.
pub fn encode_frame(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    clear_colour: wgpu::Color,
    viewport: &Viewport,
    render: Render<'_>,
) -> usize {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Render Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear_colour),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        occlusion_query_set: None,
        timestamp_writes: None,
    });
    viewport.apply(&mut render_pass);

    let mut issued = 0;
    for call in render.draw_calls() {
        if !call.program.is_drawable() {
            log::warn!(
                "skipping draw of {}: program {} is not linked or has unbound textures",
                call.mesh.label,
                call.program.label()
            );
            continue;
        }
        call.program.use_program(&mut render_pass);
        call.mesh.draw(&mut render_pass);
        issued += 1;
    }
    issued
}

/// Render one frame into an offscreen texture and read it back.
///
/// `size` is the target size in pixels; rows are unpadded in the returned
/// image.
#[cfg(feature = "integration-tests")]
pub async fn render_to_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    format: wgpu::TextureFormat,
    size: (u32, u32),
    clear_colour: wgpu::Color,
    render: Render<'_>,
) -> anyhow::Result<(usize, image::RgbaImage)> {
    use std::iter;

    use anyhow::Context as _;
    use instant::Duration;

    let (width, height) = size;
    let extent3d = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Golden Image Test Output Texture"),
        size: extent3d,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });
    let issued = encode_frame(
        &mut encoder,
        &view,
        clear_colour,
        &Viewport::from_size(width, height),
        render,
    );

    let u32_size = std::mem::size_of::<u32>() as u32;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let padded_row = (u32_size * width).div_ceil(align) * align;
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        size: (padded_row * height) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        label: None,
        mapped_at_creation: false,
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &output_buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(padded_row),
                rows_per_image: Some(height),
            },
        },
        extent3d,
    );
    queue.submit(iter::once(encoder.finish()));

    let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
    let buffer_slice = output_buffer.slice(..);
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        tx.send(result).ok();
    });
    device
        .poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: Some(Duration::from_secs(3)),
        })
        .context("waiting for the frame readback")?;
    rx.receive()
        .await
        .context("readback channel closed")?
        .context("mapping the readback buffer")?;

    let data = buffer_slice.get_mapped_range();
    let row = (u32_size * width) as usize;
    let pixels: Vec<u8> = data
        .chunks(padded_row as usize)
        .flat_map(|padded| &padded[..row])
        .copied()
        .collect();
    drop(data);
    output_buffer.unmap();

    let img = image::RgbaImage::from_raw(width, height, pixels)
        .context("readback has the wrong number of bytes")?;
    Ok((issued, img))
}
