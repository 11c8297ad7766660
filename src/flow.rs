//! Flow control and application event loop.
//!
//! This module hosts the render loop every lesson shares. A lesson only
//! supplies its GPU resources, per-frame updates and draw calls through the
//! [`Lesson`] trait; window creation, resizing, input and presenting are
//! handled here.
//!
//! # User-facing types
//!
//! - [`Lesson`] is the trait a lesson implements
//! - [`LessonConstructor`] builds a lesson once the context exists
//! - [`LoopState`] is the two-state machine that decides when to stop
//! - [`Input`] is the set of keys currently held down
//!
//! # Lifecycle Flow
//!
//! The event loop follows this pattern each frame:
//! 1. Check input, switch to [`LoopState::Closing`] on escape
//! 2. Update the lesson (via `on_update`)
//! 3. Clear the frame, set the viewport and issue the lesson's draw calls
//! 4. Present the frame
//! 5. Process pending window events

use std::{collections::HashSet, fmt::Debug, iter, pin::Pin, process::ExitCode, sync::Arc};

use anyhow::Context as _;
use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    config::LessonConfig,
    context::{Context, InitContext},
    render::{Render, encode_frame},
};

/// Trait for implementing a lesson.
///
/// # Lifecycle
///
/// 1. `on_init()` is called once after the lesson was constructed
/// 2. `on_update()` is called every frame before drawing
/// 3. `on_render()` is called every frame and lists the draw calls
///
pub trait Lesson {
    /// Configure the context, e.g. the background colour.
    fn on_init(&mut self, _ctx: &mut Context) {}

    /// Update uniforms and other per-frame state.
    ///
    /// `dt` is the time since the previous frame.
    fn on_update(&mut self, _ctx: &Context, _input: &Input, _dt: Duration) {}

    /// Return the draw calls of this frame, in order.
    fn on_render(&self) -> Render<'_>;
}

impl Debug for dyn Lesson + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Lesson")
    }
}

/// Type alias for a lesson constructor (factory function).
///
/// A lesson constructor takes an `InitContext` and asynchronously returns a
/// boxed `Lesson`. Shader compilation and texture loading happen here.
pub type LessonConstructor = Box<
    dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = anyhow::Result<Box<dyn Lesson>>>>>,
>;

/// Wrap an async builder function into a [`LessonConstructor`].
pub fn constructor<L, F, Fut>(build: F) -> LessonConstructor
where
    L: Lesson + 'static,
    F: FnOnce(InitContext) -> Fut + 'static,
    Fut: Future<Output = anyhow::Result<L>> + 'static,
{
    Box::new(move |init| {
        Box::pin(async move {
            let lesson: Box<dyn Lesson> = Box::new(build(init).await?);
            Ok(lesson)
        })
    })
}

/// Keys currently held down, polled once per frame.
#[derive(Debug, Default, Clone)]
pub struct Input {
    pressed: HashSet<KeyCode>,
}

impl Input {
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Track key presses and releases of a window event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.press(*code),
                ElementState::Released => self.release(*code),
            },
            // releases are not reported to unfocused windows
            WindowEvent::Focused(false) => self.pressed.clear(),
            _ => (),
        }
    }
}

/// State of the render loop. `Closing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    /// The per-frame input check: escape held down closes the loop.
    pub fn process_input(self, input: &Input) -> Self {
        match self {
            LoopState::Running if input.is_pressed(KeyCode::Escape) => LoopState::Closing,
            state => state,
        }
    }

    /// The window system asked to close the window.
    pub fn close_requested(self) -> Self {
        LoopState::Closing
    }

    pub fn is_closing(self) -> bool {
        self == LoopState::Closing
    }
}

/// Context plus the lesson running in it.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    lesson: Box<dyn Lesson>,
}

impl AppState {
    async fn new(
        window: Arc<Window>,
        config: &LessonConfig,
        constructor: LessonConstructor,
    ) -> anyhow::Result<Self> {
        let mut ctx = Context::new(window, config)
            .await
            .context("cannot create the main context")?;
        let mut lesson = constructor((&ctx).into())
            .await
            .context("cannot create the lesson")?;
        lesson.on_init(&mut ctx);
        Ok(Self { ctx, lesson })
    }

    fn render(&mut self) -> Result<usize, wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        let issued = encode_frame(
            &mut encoder,
            &view,
            self.ctx.clear_colour,
            &self.ctx.viewport,
            self.lesson.on_render(),
        );
        self.ctx.queue.submit(iter::once(encoder.finish()));

        self.ctx.window.pre_present_notify();
        output.present();
        Ok(issued)
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: LessonConfig,
    constructor: Option<LessonConstructor>,
    state: Option<AppState>,
    loop_state: LoopState,
    input: Input,
    last_time: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: LessonConfig, constructor: LessonConstructor) -> anyhow::Result<Self> {
        let async_runtime =
            tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
        Ok(Self {
            async_runtime,
            config,
            constructor: Some(constructor),
            state: None,
            loop_state: LoopState::Running,
            input: Input::default(),
            last_time: Instant::now(),
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        self.loop_state = LoopState::Closing;
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let Some(constructor) = self.constructor.take() else {
            return Ok(());
        };
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create the window")?,
        );

        let app_state = self
            .async_runtime
            .block_on(AppState::new(window, &self.config, constructor))?;
        app_state.ctx.window.request_redraw();
        self.state = Some(app_state);
        self.last_time = Instant::now();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        self.input.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                self.loop_state = self.loop_state.close_requested();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if state.ctx.resize(size.width, size.height) {
                    log::info!("viewport reset to {}x{}", size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.loop_state = self.loop_state.process_input(&self.input);
                if self.loop_state.is_closing() {
                    event_loop.exit();
                    return;
                }

                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();
                state.lesson.on_update(&state.ctx, &self.input, dt);

                match state.render() {
                    Ok(_) => (),
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.ctx.reconfigure();
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
                state.ctx.window.request_redraw();
            }
            _ => (),
        }
    }
}

fn init_logger() {
    let env = env_logger::Env::default().default_filter_or("warn");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };
}

/// Open the window and run `constructor`'s lesson until it is closed.
///
/// Errors while creating the event loop, window, context or lesson end the
/// loop and are returned.
pub fn run(config: LessonConfig, constructor: LessonConstructor) -> anyhow::Result<()> {
    init_logger();

    let event_loop = EventLoop::new().context("failed to create the event loop")?;
    let mut app = App::new(config, constructor)?;

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// [`run`] for a lesson's `main`: any start-up failure becomes a failing
/// exit code.
pub fn launch(config: LessonConfig, constructor: LessonConstructor) -> ExitCode {
    match run(config, constructor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("lesson terminated: {e:#}");
            ExitCode::FAILURE
        }
    }
}
