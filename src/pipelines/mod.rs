//! Render pipeline and bind group layout construction.
//!
//! - `basic` links vertex/fragment modules into the pipeline every lesson
//!   program uses
//! - `bindings` builds the uniform and texture bind group layouts

pub mod basic;
pub mod bindings;
