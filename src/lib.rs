//! lesson-ngin
//!
//! Getting-started rendering lessons on wgpu. Each lesson is a small program
//! that opens a window, compiles a shader program or two, uploads fixed
//! vertex data and draws it until the window is closed or escape is pressed.
//! The shared steps live in this crate once; a lesson only brings its data,
//! programs and per-frame updates.
//!
//! High-level modules
//! - `config`: start-up settings of a lesson (title, size, clear colour)
//! - `context`: window and GPU context that owns surface, device and queue
//! - `data_structures`: vertex formats, meshes and textures
//! - `flow`: the render loop and the `Lesson` trait
//! - `lessons`: the lessons themselves, one binary each under `src/bin`
//! - `pipelines`: render pipeline and bind group layout construction
//! - `render`: draw call composition and frame encoding
//! - `resources`: helpers to load shaders and textures from `assets/`
//! - `shader`: compile, link and set uniforms of shader programs by name
//! - `viewport`: the draw rectangle that follows window resizes
//!

pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod lessons;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod shader;
pub mod viewport;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::Color;
pub use winit::keyboard::KeyCode;
