//! The getting-started lessons.
//!
//! Every lesson is a [`Lesson`](crate::flow::Lesson) with an async `new`
//! that builds its programs and meshes from an
//! [`InitContext`](crate::context::InitContext), plus a `config` with its
//! window settings. The binaries under `src/bin` only hand both to
//! [`flow::launch`](crate::flow::launch).

use crate::data_structures::vertex::TexVertex;

pub mod coordinate_systems;
pub mod hello_triangle;
pub mod rotate_texture;
pub mod shaders;
pub mod two_triangles;

/// Window title shared by all lessons.
pub const TITLE: &str = "LearnOpenGL";

pub const CONTAINER_TEXTURE: &str = "textures/container.jpg";
pub const FACE_TEXTURE: &str = "textures/awesomeface.png";

/// A textured quad, drawn as two triangles through [`QUAD_INDICES`].
pub const QUAD_VERTICES: [TexVertex; 4] = [
    // top right
    TexVertex {
        position: [0.5, 0.5, 0.0],
        tex_coords: [1.0, 1.0],
    },
    // bottom right
    TexVertex {
        position: [0.5, -0.5, 0.0],
        tex_coords: [1.0, 0.0],
    },
    // bottom left
    TexVertex {
        position: [-0.5, -0.5, 0.0],
        tex_coords: [0.0, 0.0],
    },
    // top left
    TexVertex {
        position: [-0.5, 0.5, 0.0],
        tex_coords: [0.0, 1.0],
    },
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];
