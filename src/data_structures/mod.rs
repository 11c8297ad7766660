//! Lesson data structures: vertex formats, meshes and textures.
//!
//! - `vertex` contains the vertex layouts the lesson shaders read
//! - `mesh` holds static vertex/index buffers and issues their draw call
//! - `texture` contains the GPU texture wrapper and image decoding

pub mod mesh;
pub mod texture;
pub mod vertex;
