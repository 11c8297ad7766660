use std::process::ExitCode;

use lesson_ngin::{
    flow::{constructor, launch},
    lessons::two_triangles::TwoTriangles,
};

fn main() -> ExitCode {
    launch(TwoTriangles::config(), constructor(TwoTriangles::new))
}
