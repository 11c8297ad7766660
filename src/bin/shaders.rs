use std::process::ExitCode;

use lesson_ngin::{
    flow::{constructor, launch},
    lessons::shaders::Shaders,
};

fn main() -> ExitCode {
    launch(Shaders::config(), constructor(Shaders::new))
}
