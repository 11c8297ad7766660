use std::process::ExitCode;

use lesson_ngin::{
    flow::{constructor, launch},
    lessons::rotate_texture::RotateTexture,
};

fn main() -> ExitCode {
    launch(RotateTexture::config(), constructor(RotateTexture::new))
}
