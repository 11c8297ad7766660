//! Shader helper: read, compile and link shader programs.
//!
//! The flow mirrors what every lesson does with the driver:
//!
//! 1. read vertex and fragment source text ([`read_source`]),
//! 2. compile each stage and check its status ([`Shader::compile`]),
//! 3. link both stages into a [`Program`] and check the link status,
//! 4. set uniforms by name and activate the program while drawing.
//!
//! Compile and link failures never abort: they are reported through the
//! status of the returned object and logged with the driver's diagnostic
//! text. Failing to read a source file is different, it is returned as a
//! [`ShaderError`] and the caller decides whether to go on.

use std::{
    fmt,
    path::{Path, PathBuf},
};

pub mod program;
pub mod uniform;

pub use program::{Program, ProgramOptions};
pub use uniform::{UniformKind, UniformLayout, UniformLocation, UniformValue};

/// Maximum number of bytes of diagnostic text kept per compile or link.
pub const INFO_LOG_CAPACITY: usize = 1024;

/// Entry point every vertex shader has to define.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Entry point every fragment shader has to define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_ENTRY,
            ShaderStage::Fragment => FRAGMENT_ENTRY,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("VERTEX"),
            ShaderStage::Fragment => f.write_str("FRAGMENT"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to read {stage} shader source from {}", path.display())]
    Read {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a compile or link step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub success: bool,
    /// Driver diagnostic, at most [`INFO_LOG_CAPACITY`] bytes. Empty on success.
    pub info_log: String,
}

impl Status {
    pub(crate) fn from_error(error: Option<wgpu::Error>) -> Self {
        match error {
            None => Self {
                success: true,
                info_log: String::new(),
            },
            Some(error) => Self {
                success: false,
                info_log: truncate_info_log(&error.to_string(), INFO_LOG_CAPACITY).to_string(),
            },
        }
    }
}

/// Cut a diagnostic down to at most `capacity` bytes without splitting a
/// UTF-8 sequence.
pub fn truncate_info_log(log: &str, capacity: usize) -> &str {
    if log.len() <= capacity {
        return log;
    }
    let mut end = capacity;
    while !log.is_char_boundary(end) {
        end -= 1;
    }
    &log[..end]
}

/// Read a whole shader source file into memory.
pub fn read_source(stage: ShaderStage, path: impl AsRef<Path>) -> Result<String, ShaderError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| {
        log::error!("shader source not read: {} ({})", path.display(), source);
        ShaderError::Read {
            stage,
            path: path.to_path_buf(),
            source,
        }
    })
}

/// One compiled shader stage.
#[derive(Debug)]
pub struct Shader {
    pub(crate) module: wgpu::ShaderModule,
    stage: ShaderStage,
    label: String,
    status: Status,
}

impl Shader {
    /// Submit WGSL source for compilation and check the result.
    ///
    /// The module is created inside a validation error scope, so a broken
    /// source shows up as a failed [`Status`] instead of an uncaptured device
    /// error.
    pub async fn compile(
        device: &wgpu::Device,
        stage: ShaderStage,
        label: &str,
        source: &str,
    ) -> Shader {
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        let status = Status::from_error(device.pop_error_scope().await);

        if !status.success {
            log::error!(
                "shader compilation failed, type {stage} ({label}):\n{}\n -- --------------------------------------------------- -- ",
                status.info_log
            );
        } else {
            log::debug!("compiled {stage} shader {label}");
        }

        Shader {
            module,
            stage,
            label: label.to_string(),
            status,
        }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_compiled(&self) -> bool {
        self.status.success
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn info_log(&self) -> &str {
        &self.status.info_log
    }
}
