use std::time::Duration;

use log::debug;
use minifb::{Key, Window, WindowOptions};

use crate::image::Image;

/// Show the finished buffer and idle until the window is closed or
/// Escape is pressed. The image is never re-rendered.
pub fn present(title: &str, image: &Image) -> Result<(), minifb::Error> {
    let mut window = Window::new(title, image.width, image.height, WindowOptions::default())?;
    window.limit_update_rate(Some(Duration::from_micros(16600)));

    let buffer = pack_buffer(image);
    debug!("window open, entering event loop");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, image.width, image.height)?;
    }

    Ok(())
}

// Image rows run bottom-up while minifb rows run top-down, so rows are
// flipped while packing into the 0RGB u32 buffer.
fn pack_buffer(image: &Image) -> Vec<u32> {
    let mut buffer = Vec::with_capacity(image.width * image.height);
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let i = image.pixel_index(x, y);
            let (r, g, b) = (image.bytes[i], image.bytes[i + 1], image.bytes[i + 2]);
            buffer.push(((r as u32) << 16) | ((g as u32) << 8) | b as u32);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_flips_rows() {
        let mut img = Image::new(1, 2);
        // Bottom pixel white, top pixel black.
        img.bytes[0] = 255;
        img.bytes[1] = 255;
        img.bytes[2] = 255;

        let buffer = pack_buffer(&img);
        assert_eq!(buffer, vec![0x0000_0000, 0x00ff_ffff]);
    }

    #[test]
    fn test_pack_channel_order() {
        let mut img = Image::new(1, 1);
        img.bytes[0] = 0x12;
        img.bytes[1] = 0x34;
        img.bytes[2] = 0x56;

        assert_eq!(pack_buffer(&img), vec![0x0012_3456]);
    }
}
