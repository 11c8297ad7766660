//! Start-up configuration of a lesson.
//!
//! Everything here is fixed before the window exists: title, size,
//! background colour and the surface colour space. Lessons hard-code their
//! values, there is no configuration file.

/// Window and surface settings for one lesson binary.
#[derive(Debug, Clone)]
pub struct LessonConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Colour the frame is cleared to before any draw call.
    pub clear_colour: wgpu::Color,
    /// Prefer an sRGB surface format.
    ///
    /// Off by default so constant colours written by a fragment shader end up
    /// on screen unchanged, like with a default (linear) GL framebuffer.
    pub srgb: bool,
}

impl LessonConfig {
    pub const DEFAULT_CLEAR_COLOUR: wgpu::Color = wgpu::Color {
        r: 0.2,
        g: 0.3,
        b: 0.3,
        a: 1.0,
    };

    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            title: "lesson-ngin".to_string(),
            width: 800,
            height: 600,
            clear_colour: Self::DEFAULT_CLEAR_COLOUR,
            srgb: false,
        }
    }
}
