//! Linked shader programs.

use std::path::Path;

use cgmath::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

use crate::{
    data_structures::texture::Texture,
    pipelines::{basic, bindings},
    shader::{
        Shader, ShaderError, ShaderStage, Status, read_source,
        uniform::{UniformLayout, UniformLocation, UniformValue},
    },
};

/// What a program needs besides its two stages.
#[derive(Debug, Clone)]
pub struct ProgramOptions<'a> {
    pub label: &'a str,
    /// Layouts of the vertex buffers the vertex stage reads, in slot order.
    pub vertex_layouts: &'a [wgpu::VertexBufferLayout<'a>],
    /// Members of the WGSL uniform struct at `@group(0) @binding(0)`.
    pub uniforms: UniformLayout,
    /// Number of texture/sampler pairs at `@group(1)`.
    pub texture_slots: u32,
}

impl<'a> ProgramOptions<'a> {
    pub fn new(label: &'a str, vertex_layouts: &'a [wgpu::VertexBufferLayout<'a>]) -> Self {
        Self {
            label,
            vertex_layouts,
            uniforms: UniformLayout::new(),
            texture_slots: 0,
        }
    }

    pub fn with_uniforms(mut self, uniforms: UniformLayout) -> Self {
        self.uniforms = uniforms;
        self
    }

    pub fn with_textures(mut self, texture_slots: u32) -> Self {
        self.texture_slots = texture_slots;
        self
    }
}

/// A vertex and a fragment shader linked into a render pipeline, together
/// with the buffers and bind groups its uniforms and textures live in.
#[derive(Debug)]
pub struct Program {
    label: String,
    pipeline: wgpu::RenderPipeline,
    status: Status,
    uniforms: UniformLayout,
    uniform_buffer: Option<wgpu::Buffer>,
    uniform_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    texture_slots: u32,
    texture_group: Option<wgpu::BindGroup>,
}

impl Program {
    /// Link two compiled stages and check the link status.
    ///
    /// Linking is attempted even if a stage failed to compile; the program
    /// then reports a failed link, just like the driver would.
    pub async fn link(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex: &Shader,
        fragment: &Shader,
        options: &ProgramOptions<'_>,
    ) -> Program {
        let label = options.label;
        if vertex.stage() != ShaderStage::Vertex || fragment.stage() != ShaderStage::Fragment {
            log::warn!(
                "program {label} links a {} shader as vertex and a {} shader as fragment stage",
                vertex.stage(),
                fragment.stage()
            );
        }

        let buffer_size = options.uniforms.buffer_size();
        let uniform_layout = bindings::mk_uniform_layout(device, buffer_size);
        let texture_layout = bindings::mk_texture_layout(device, options.texture_slots);
        let uniform_buffer = (buffer_size > 0).then(|| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: buffer_size,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });
        let uniform_group =
            bindings::mk_uniform_bind_group(device, &uniform_layout, uniform_buffer.as_ref());
        let texture_group = (options.texture_slots == 0)
            .then(|| bindings::mk_texture_bind_group(device, &texture_layout, &[]));
        let pipeline_layout =
            basic::mk_pipeline_layout(device, label, &uniform_layout, &texture_layout);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = basic::mk_render_pipeline(
            device,
            label,
            &pipeline_layout,
            format,
            options.vertex_layouts,
            &vertex.module,
            &fragment.module,
        );
        let status = Status::from_error(device.pop_error_scope().await);

        if !status.success {
            log::error!(
                "program linking failed, type PROGRAM ({label}):\n{}\n -- --------------------------------------------------- -- ",
                status.info_log
            );
        } else {
            log::info!("linked program {label}");
        }

        Program {
            label: label.to_string(),
            pipeline,
            status,
            uniforms: options.uniforms.clone(),
            uniform_buffer,
            uniform_group,
            texture_layout,
            texture_slots: options.texture_slots,
            texture_group,
        }
    }

    /// Compile both stages from source text and link them.
    pub async fn from_sources(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex_source: &str,
        fragment_source: &str,
        options: &ProgramOptions<'_>,
    ) -> Program {
        let vertex = Shader::compile(
            device,
            ShaderStage::Vertex,
            &format!("{} vertex", options.label),
            vertex_source,
        )
        .await;
        let fragment = Shader::compile(
            device,
            ShaderStage::Fragment,
            &format!("{} fragment", options.label),
            fragment_source,
        )
        .await;
        Self::link(device, format, &vertex, &fragment, options).await
    }

    /// Read both stages from files, then compile and link them.
    ///
    /// A file that cannot be read stops here with a [`ShaderError`]; nothing
    /// is compiled in that case.
    pub async fn from_files(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
        options: &ProgramOptions<'_>,
    ) -> Result<Program, ShaderError> {
        let vertex_source = read_source(ShaderStage::Vertex, vertex_path)?;
        let fragment_source = read_source(ShaderStage::Fragment, fragment_path)?;
        Ok(Self::from_sources(device, format, &vertex_source, &fragment_source, options).await)
    }

    /// Bind one texture per declared slot, in slot order.
    pub fn bind_textures(
        &mut self,
        device: &wgpu::Device,
        textures: &[&Texture],
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            textures.len() == self.texture_slots as usize,
            "program {} has {} texture slots but {} textures were bound",
            self.label,
            self.texture_slots,
            textures.len()
        );
        self.texture_group = Some(bindings::mk_texture_bind_group(
            device,
            &self.texture_layout,
            textures,
        ));
        Ok(())
    }

    /// Activate the program for the following draw calls of `render_pass`.
    pub fn use_program(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_group, &[]);
        if let Some(texture_group) = &self.texture_group {
            render_pass.set_bind_group(1, texture_group, &[]);
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_linked(&self) -> bool {
        self.status.success
    }

    /// Linked and every texture slot bound.
    pub fn is_drawable(&self) -> bool {
        self.is_linked() && self.texture_group.is_some()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Link diagnostic, at most [`INFO_LOG_CAPACITY`](crate::shader::INFO_LOG_CAPACITY) bytes.
    pub fn info_log(&self) -> &str {
        &self.status.info_log
    }

    pub fn uniforms(&self) -> &UniformLayout {
        &self.uniforms
    }

    /// Resolve a uniform by name, `None` if the program has no such member.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.uniforms.location(name)
    }

    /// Write `value` to the uniform `name`.
    ///
    /// The name is resolved on every call. Unknown names are ignored, as is a
    /// value whose kind differs from the declared one.
    pub fn set_uniform<T: UniformValue>(&self, queue: &wgpu::Queue, name: &str, value: T) {
        let Some(location) = self.uniform_location(name) else {
            log::debug!("program {} has no uniform {name}", self.label);
            return;
        };
        if location.kind != T::KIND {
            log::warn!(
                "uniform {name} of program {} is a {}, not a {}",
                self.label,
                location.kind.wgsl(),
                T::KIND.wgsl()
            );
            return;
        }
        if let Some(buffer) = &self.uniform_buffer {
            queue.write_buffer(buffer, location.offset, &value.to_bytes());
        }
    }

    pub fn set_bool(&self, queue: &wgpu::Queue, name: &str, value: bool) {
        self.set_uniform(queue, name, value);
    }

    pub fn set_int(&self, queue: &wgpu::Queue, name: &str, value: i32) {
        self.set_uniform(queue, name, value);
    }

    pub fn set_float(&self, queue: &wgpu::Queue, name: &str, value: f32) {
        self.set_uniform(queue, name, value);
    }

    pub fn set_vec2(&self, queue: &wgpu::Queue, name: &str, value: impl Into<Vector2<f32>>) {
        self.set_uniform(queue, name, value.into());
    }

    pub fn set_vec3(&self, queue: &wgpu::Queue, name: &str, value: impl Into<Vector3<f32>>) {
        self.set_uniform(queue, name, value.into());
    }

    pub fn set_vec4(&self, queue: &wgpu::Queue, name: &str, value: impl Into<Vector4<f32>>) {
        self.set_uniform(queue, name, value.into());
    }

    pub fn set_mat2(&self, queue: &wgpu::Queue, name: &str, value: impl Into<Matrix2<f32>>) {
        self.set_uniform(queue, name, value.into());
    }

    pub fn set_mat3(&self, queue: &wgpu::Queue, name: &str, value: impl Into<Matrix3<f32>>) {
        self.set_uniform(queue, name, value.into());
    }

    pub fn set_mat4(&self, queue: &wgpu::Queue, name: &str, value: impl Into<Matrix4<f32>>) {
        self.set_uniform(queue, name, value.into());
    }
}
