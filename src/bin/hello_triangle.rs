use std::process::ExitCode;

use lesson_ngin::{
    flow::{constructor, launch},
    lessons::hello_triangle::HelloTriangle,
};

fn main() -> ExitCode {
    launch(HelloTriangle::config(), constructor(HelloTriangle::new))
}
