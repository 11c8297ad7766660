//! Named uniforms on top of a WGSL uniform block.
//!
//! WGSL has no `glGetUniformLocation`: uniforms live in a struct bound as a
//! uniform buffer. A program therefore declares its block as an ordered list
//! of `(name, kind)` pairs, which must match the member order of the WGSL
//! struct at `@group(0) @binding(0)`. [`UniformLayout`] computes where every
//! member lives using the uniform address space layout rules, so a value can
//! be written to the buffer by name.

use cgmath::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// Type of a uniform block member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    /// Stored as a WGSL `u32` (`bool` is not host-shareable).
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl UniformKind {
    /// Required alignment in the uniform address space.
    pub const fn align(self) -> u64 {
        match self {
            UniformKind::Bool | UniformKind::Int | UniformKind::Float => 4,
            UniformKind::Vec2 | UniformKind::Mat2 => 8,
            UniformKind::Vec3 | UniformKind::Vec4 | UniformKind::Mat3 | UniformKind::Mat4 => 16,
        }
    }

    pub const fn size(self) -> u64 {
        match self {
            UniformKind::Bool | UniformKind::Int | UniformKind::Float => 4,
            UniformKind::Vec2 => 8,
            UniformKind::Vec3 => 12,
            UniformKind::Vec4 | UniformKind::Mat2 => 16,
            // three vec3 columns, each padded to 16 bytes
            UniformKind::Mat3 => 48,
            UniformKind::Mat4 => 64,
        }
    }

    /// Matching WGSL type.
    pub const fn wgsl(self) -> &'static str {
        match self {
            UniformKind::Bool => "u32",
            UniformKind::Int => "i32",
            UniformKind::Float => "f32",
            UniformKind::Vec2 => "vec2<f32>",
            UniformKind::Vec3 => "vec3<f32>",
            UniformKind::Vec4 => "vec4<f32>",
            UniformKind::Mat2 => "mat2x2<f32>",
            UniformKind::Mat3 => "mat3x3<f32>",
            UniformKind::Mat4 => "mat4x4<f32>",
        }
    }
}

/// Resolved position of a uniform inside the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocation {
    pub offset: u64,
    pub kind: UniformKind,
}

#[derive(Debug, Clone, PartialEq)]
struct UniformField {
    name: String,
    location: UniformLocation,
}

/// Ordered description of a program's uniform block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformLayout {
    fields: Vec<UniformField>,
    end: u64,
    align: u64,
}

impl UniformLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member. Order matters, it has to follow the WGSL struct.
    pub fn with(mut self, name: &str, kind: UniformKind) -> Self {
        let offset = round_up(kind.align(), self.end);
        self.end = offset + kind.size();
        self.align = self.align.max(kind.align());
        self.fields.push(UniformField {
            name: name.to_string(),
            location: UniformLocation { offset, kind },
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Size of the WGSL struct: end of the last member rounded up to the
    /// struct alignment.
    pub fn struct_size(&self) -> u64 {
        if self.fields.is_empty() {
            return 0;
        }
        round_up(self.align, self.end)
    }

    /// Size of the backing uniform buffer, a multiple of 16 bytes.
    pub fn buffer_size(&self) -> u64 {
        round_up(16, self.struct_size())
    }

    /// Look `name` up. Every call searches again, nothing is cached.
    ///
    /// `None` is the invalid-location sentinel: writing to it does nothing.
    pub fn location(&self, name: &str) -> Option<UniformLocation> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.location)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

/// Round `value` up to the next multiple of `align`.
pub(crate) fn round_up(align: u64, value: u64) -> u64 {
    value.div_ceil(align) * align
}

/// A host value that can be written into a uniform block.
pub trait UniformValue {
    const KIND: UniformKind;

    /// Append the value's bytes as laid out in the uniform address space.
    fn write_bytes(&self, out: &mut Vec<u8>);

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::KIND.size() as usize);
        self.write_bytes(&mut out);
        out
    }
}

impl UniformValue for bool {
    const KIND: UniformKind = UniformKind::Bool;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(bytemuck::bytes_of(&(*self as u32)));
    }
}

impl UniformValue for i32 {
    const KIND: UniformKind = UniformKind::Int;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(bytemuck::bytes_of(self));
    }
}

impl UniformValue for f32 {
    const KIND: UniformKind = UniformKind::Float;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(bytemuck::bytes_of(self));
    }
}

impl UniformValue for Vector2<f32> {
    const KIND: UniformKind = UniformKind::Vec2;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        let raw: [f32; 2] = (*self).into();
        out.extend_from_slice(bytemuck::cast_slice(&raw));
    }
}

impl UniformValue for Vector3<f32> {
    const KIND: UniformKind = UniformKind::Vec3;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        let raw: [f32; 3] = (*self).into();
        out.extend_from_slice(bytemuck::cast_slice(&raw));
    }
}

impl UniformValue for Vector4<f32> {
    const KIND: UniformKind = UniformKind::Vec4;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        let raw: [f32; 4] = (*self).into();
        out.extend_from_slice(bytemuck::cast_slice(&raw));
    }
}

impl UniformValue for Matrix2<f32> {
    const KIND: UniformKind = UniformKind::Mat2;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        // column-major, vec2 columns are 8 byte aligned so there is no padding
        let raw: [[f32; 2]; 2] = (*self).into();
        out.extend_from_slice(bytemuck::cast_slice(&raw));
    }
}

impl UniformValue for Matrix3<f32> {
    const KIND: UniformKind = UniformKind::Mat3;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        let raw: [[f32; 3]; 3] = (*self).into();
        for column in raw {
            out.extend_from_slice(bytemuck::cast_slice(&column));
            out.extend_from_slice(&[0; 4]);
        }
    }
}

impl UniformValue for Matrix4<f32> {
    const KIND: UniformKind = UniformKind::Mat4;

    fn write_bytes(&self, out: &mut Vec<u8>) {
        let raw: [[f32; 4]; 4] = (*self).into();
        out.extend_from_slice(bytemuck::cast_slice(&raw));
    }
}
