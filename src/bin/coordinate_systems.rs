use std::process::ExitCode;

use lesson_ngin::{
    flow::{constructor, launch},
    lessons::coordinate_systems::CoordinateSystems,
};

fn main() -> ExitCode {
    launch(CoordinateSystems::config(), constructor(CoordinateSystems::new))
}
