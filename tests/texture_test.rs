use std::io::Cursor;

use lesson_ngin::data_structures::texture::{checkerboard_image, decode};

/// A 1x2 PNG, red on top of blue.
fn red_over_blue() -> Vec<u8> {
    let img = image::RgbaImage::from_fn(1, 2, |_, y| {
        if y == 0 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        }
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encoding");
    bytes
}

#[test]
fn should_keep_row_order_without_flip() {
    let rgba = decode(&red_over_blue(), false).expect("decoding");
    assert_eq!(rgba.dimensions(), (1, 2));
    assert_eq!(*rgba.get_pixel(0, 0), image::Rgba([255, 0, 0, 255]));
    assert_eq!(*rgba.get_pixel(0, 1), image::Rgba([0, 0, 255, 255]));
}

#[test]
fn should_flip_rows_when_requested() {
    let rgba = decode(&red_over_blue(), true).expect("decoding");
    assert_eq!(*rgba.get_pixel(0, 0), image::Rgba([0, 0, 255, 255]));
    assert_eq!(*rgba.get_pixel(0, 1), image::Rgba([255, 0, 0, 255]));
}

#[test]
fn should_reject_bytes_that_are_no_image() {
    assert!(decode(b"definitely not a png", true).is_err());
}

#[test]
fn should_alternate_checkerboard_cells() {
    let rgba = checkerboard_image(4, 2);
    assert_eq!(rgba.dimensions(), (4, 4));
    assert_eq!(rgba.get_pixel(0, 0), rgba.get_pixel(1, 1));
    assert_eq!(rgba.get_pixel(0, 0), rgba.get_pixel(2, 2));
    assert_ne!(rgba.get_pixel(0, 0), rgba.get_pixel(2, 0));
    assert_ne!(rgba.get_pixel(0, 0), rgba.get_pixel(0, 2));
}
