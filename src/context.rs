//! Window and GPU context.
//!
//! [`Context`] owns the window, the surface it presents to and the
//! device/queue pair every driver call goes through. Nothing in this crate
//! reaches for global graphics state: whoever needs the driver is handed a
//! `&wgpu::Device` or `&wgpu::Queue` explicitly.

use std::sync::Arc;

use anyhow::Context as _;
use instant::{Duration, Instant};
use winit::window::Window;

use crate::{config::LessonConfig, viewport::Viewport};

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub viewport: Viewport,
    pub clear_colour: wgpu::Color,
    start: Instant,
}

impl Context {
    pub async fn new(window: Arc<Window>, lesson: &LessonConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create a surface for the window")?;

        let (adapter, device, queue) = request_device(&instance, Some(&surface)).await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&surface_caps.formats, lesson.srgb)
            .context("the surface reports no supported formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "surface configured: {}x{} {:?}",
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            viewport: Viewport::from_size(config.width, config.height),
            config,
            clear_colour: lesson.clear_colour,
            start: Instant::now(),
        })
    }

    /// Reconfigure the surface and reset the viewport to the new size.
    ///
    /// Zero-sized windows are ignored, the surface cannot be configured with
    /// them.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.viewport.resize(width, height) {
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        true
    }

    /// Re-apply the current configuration, used after the surface got lost.
    pub(crate) fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Time since the context was created, the `glfwGetTime` of a lesson.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// The part of the [`Context`] a lesson needs to build its GPU resources.
///
/// `wgpu::Device` and `wgpu::Queue` are reference counted, so this is a cheap
/// copy of the handles rather than of the resources.
#[derive(Debug, Clone)]
pub struct InitContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub format: wgpu::TextureFormat,
    pub viewport: Viewport,
}

impl From<&Context> for InitContext {
    fn from(ctx: &Context) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            format: ctx.format(),
            viewport: ctx.viewport,
        }
    }
}

/// Pick an adapter and open a device on it.
///
/// Passing no surface gives a headless device, which is what the GPU tests
/// render with.
pub async fn request_device(
    instance: &wgpu::Instance,
    compatible_surface: Option<&wgpu::Surface<'_>>,
) -> anyhow::Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue)> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface,
            force_fallback_adapter: false,
        })
        .await
        .context("failed to find a suitable GPU adapter")?;
    log::info!("adapter: {:?}", adapter.get_info().name);

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("lesson device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
            ..Default::default()
        })
        .await
        .context("failed to create the device and queue")?;

    Ok((adapter, device, queue))
}

/// Choose the surface format, preferring the requested colour space.
pub fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    srgb: bool,
) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == srgb)
        .or_else(|| formats.first().copied())
}
