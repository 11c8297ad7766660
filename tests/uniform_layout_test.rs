use cgmath::{Matrix3, Matrix4, SquareMatrix, Vector2, Vector3};
use lesson_ngin::shader::{UniformKind, UniformLayout, UniformLocation, UniformValue};

fn offset(layout: &UniformLayout, name: &str) -> u64 {
    layout
        .location(name)
        .map(|location| location.offset)
        .unwrap_or_else(|| panic!("{name} is declared"))
}

#[test]
fn should_place_members_by_uniform_alignment() {
    let layout = UniformLayout::new()
        .with("a", UniformKind::Float)
        .with("b", UniformKind::Vec3)
        .with("c", UniformKind::Float)
        .with("d", UniformKind::Mat3)
        .with("e", UniformKind::Vec2)
        .with("f", UniformKind::Bool);

    assert_eq!(offset(&layout, "a"), 0);
    assert_eq!(offset(&layout, "b"), 16);
    // a scalar fills the gap behind a vec3
    assert_eq!(offset(&layout, "c"), 28);
    assert_eq!(offset(&layout, "d"), 32);
    assert_eq!(offset(&layout, "e"), 80);
    assert_eq!(offset(&layout, "f"), 88);
    assert_eq!(layout.struct_size(), 96);
    assert_eq!(layout.buffer_size(), 96);
    assert_eq!(layout.len(), 6);
    assert_eq!(
        layout.names().collect::<Vec<_>>(),
        vec!["a", "b", "c", "d", "e", "f"]
    );
}

#[test]
fn should_pad_transform_block_to_struct_alignment() {
    let layout = UniformLayout::new()
        .with("transform", UniformKind::Mat4)
        .with("mix_value", UniformKind::Float);

    assert_eq!(
        layout.location("mix_value"),
        Some(UniformLocation {
            offset: 64,
            kind: UniformKind::Float
        })
    );
    assert_eq!(layout.struct_size(), 80);
    assert_eq!(layout.buffer_size(), 80);
}

#[test]
fn should_round_buffer_size_up_to_16_bytes() {
    let layout = UniformLayout::new()
        .with("scale", UniformKind::Float)
        .with("rotation", UniformKind::Mat2);

    assert_eq!(offset(&layout, "rotation"), 8);
    assert_eq!(layout.struct_size(), 24);
    assert_eq!(layout.buffer_size(), 32);
}

#[test]
fn should_have_no_buffer_without_members() {
    let layout = UniformLayout::new();
    assert!(layout.is_empty());
    assert_eq!(layout.struct_size(), 0);
    assert_eq!(layout.buffer_size(), 0);
}

#[test]
fn should_resolve_unknown_names_to_none() {
    let layout = UniformLayout::new().with("ourColor", UniformKind::Vec4);
    assert_eq!(layout.location("doesNotExist"), None);
    assert_eq!(layout.location("ourcolor"), None);
    assert!(layout.location("ourColor").is_some());
}

#[test]
fn should_encode_bool_as_u32() {
    assert_eq!(true.to_bytes(), vec![1, 0, 0, 0]);
    assert_eq!(false.to_bytes(), vec![0, 0, 0, 0]);
    assert_eq!(<bool as UniformValue>::KIND, UniformKind::Bool);
}

#[test]
fn should_encode_values_with_their_kind_size() {
    assert_eq!(7i32.to_bytes().len(), 4);
    assert_eq!(Vector2::new(1.0f32, 2.0).to_bytes().len(), 8);
    assert_eq!(Vector3::new(1.0f32, 2.0, 3.0).to_bytes().len(), 12);
    assert_eq!(Matrix4::<f32>::identity().to_bytes().len(), 64);
    assert_eq!(1.5f32.to_bytes(), 1.5f32.to_ne_bytes().to_vec());
}

#[test]
fn should_pad_mat3_columns() {
    let m = Matrix3::new(1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
    let bytes = m.to_bytes();
    assert_eq!(bytes.len(), UniformKind::Mat3.size() as usize);

    let floats: Vec<f32> = bytes
        .chunks(4)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    assert_eq!(
        floats,
        vec![1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0, 7.0, 8.0, 9.0, 0.0]
    );
}

#[test]
fn should_name_matching_wgsl_types() {
    assert_eq!(UniformKind::Bool.wgsl(), "u32");
    assert_eq!(UniformKind::Mat3.wgsl(), "mat3x3<f32>");
    assert_eq!(UniformKind::Vec4.align(), 16);
    assert_eq!(UniformKind::Vec3.size(), 12);
}
