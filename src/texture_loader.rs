use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            log::warn!("Could not read EXIF data: {}", e);
            1
        }
    }
}

// Orientation values:
// 1 = upright, 2 = mirrored, 3 = 180 deg, 4 = flipped,
// 5 = transposed, 6 = 90 deg CW, 7 = transversed, 8 = 90 deg CCW
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        2 => image.flip_horizontal(),
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        4 => image.flip_vertical(),
        5 => {
            image.rotate_cw();
            image.flip_horizontal();
        }
        6 => image.rotate_cw(),
        7 => {
            image.rotate_ccw();
            image.flip_horizontal();
        }
        8 => image.rotate_ccw(),
        _ => {}
    }
}

/// Decodes an image file into a texture, upright according to its EXIF data.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| anyhow!("Failed to read file {}: {}", image_path.display(), e))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliable in JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to decode {}: {}", image_path.display(), e))?;

    if orientation != 1 {
        log::debug!("{}: EXIF orientation {}", image_path.display(), orientation);
        apply_orientation(&mut image, orientation);
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2 wide, 3 tall, with the top-left pixel marked
    fn marked_image() -> Image {
        let mut image = Image::gen_image_color(2, 3, Color::BLACK);
        image.draw_pixel(0, 0, Color::RED);
        image
    }

    fn marker(image: &Image) -> (i32, i32) {
        for y in 0..image.height() {
            for x in 0..image.width() {
                if image.get_color(x, y) == Color::RED {
                    return (x, y);
                }
            }
        }
        panic!("marker pixel lost");
    }

    #[test]
    fn orientation_moves_top_left_corner() {
        let cases = [
            (1, (2, 3), (0, 0)),
            (2, (2, 3), (1, 0)),
            (3, (2, 3), (1, 2)),
            (4, (2, 3), (0, 2)),
            (5, (3, 2), (0, 0)),
            (6, (3, 2), (2, 0)),
            (7, (3, 2), (2, 1)),
            (8, (3, 2), (0, 1)),
        ];
        for (orientation, size, corner) in cases {
            let mut image = marked_image();
            apply_orientation(&mut image, orientation);
            assert_eq!((image.width(), image.height()), size, "orientation {orientation}");
            assert_eq!(marker(&image), corner, "orientation {orientation}");
        }
    }

    #[test]
    fn missing_exif_means_upright() {
        assert_eq!(exif_orientation(b"not a jpeg"), 1);
        assert_eq!(exif_orientation(&[0xFF, 0xD8, 0xFF, 0xD9]), 1);
    }
}
