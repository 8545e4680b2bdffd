use crate::types::Float;

pub type RGB = cgmath::Vector3<Float>;

// Flat RGB bytes, row-major, row 0 at the bottom of the picture.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, bytes: vec![0; width * height * 3] }
    }

    pub fn pixel_index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size() {
        let img = Image::new(512, 512);
        assert_eq!(img.bytes.len(), 512 * 512 * 3);
    }

    #[test]
    fn test_pixel_index_is_row_major() {
        let img = Image::new(4, 2);
        assert_eq!(img.pixel_index(0, 0), 0);
        assert_eq!(img.pixel_index(3, 0), 9);
        assert_eq!(img.pixel_index(0, 1), 12);
    }
}
