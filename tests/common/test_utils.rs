#![allow(dead_code)]

use lesson_ngin::{
    config::LessonConfig,
    context::{InitContext, request_device},
    viewport::Viewport,
};

/// Size of the offscreen target the GPU tests render into.
pub(crate) const TARGET_SIZE: (u32, u32) = (256, 256);

/// Linear target format, so shader outputs are read back unchanged.
pub(crate) const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Runtime::new()
        .expect("Failed to start the tokio runtime for an integration test.")
        .block_on(future)
}

/// A headless device and the context a lesson is built from.
pub(crate) async fn headless_context() -> InitContext {
    init_logger();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });
    let (_adapter, device, queue) = request_device(&instance, None)
        .await
        .expect("Integration tests need a GPU adapter.");
    InitContext {
        device,
        queue,
        format: TARGET_FORMAT,
        viewport: Viewport::from_size(TARGET_SIZE.0, TARGET_SIZE.1),
    }
}

pub(crate) fn f_to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn clear_pixel() -> image::Rgba<u8> {
    let colour = LessonConfig::DEFAULT_CLEAR_COLOUR;
    image::Rgba([
        f_to_u8(colour.r),
        f_to_u8(colour.g),
        f_to_u8(colour.b),
        f_to_u8(colour.a),
    ])
}

/// Compare two pixels allowing one step of rounding per channel.
pub(crate) fn assert_pixel_near(actual: image::Rgba<u8>, expected: image::Rgba<u8>) {
    let near = actual
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, e)| a.abs_diff(*e) <= 1);
    assert!(near, "pixel {:?} is not close to {:?}", actual, expected);
}

/// Pixel of the target that NDC coordinate `(x, y)` lands on.
pub(crate) fn ndc_to_pixel(x: f32, y: f32) -> (u32, u32) {
    let (width, height) = TARGET_SIZE;
    let px = (x + 1.0) / 2.0 * width as f32;
    let py = (1.0 - y) / 2.0 * height as f32;
    (px as u32, py as u32)
}
