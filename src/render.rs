use cgmath::vec2;

use crate::{camera::Camera, image::Image, scene::Scene, types::Float};

// Hits vanishingly close to the ray origin don't register.
const T_MIN: Float = 0.001;

pub fn generate_image(camera: &Camera, scene: &Scene) -> Image {
    let mut img = Image::new(camera.width(), camera.height());

    for y in 0..img.height {
        for x in 0..img.width {
            let ray = camera.ray(vec2(x, y));
            let color = scene.trace(&ray, T_MIN, Float::MAX);

            let index = img.pixel_index(x, y);
            img.bytes[index] = (color.x * 255.0) as u8;
            img.bytes[index + 1] = (color.y * 255.0) as u8;
            img.bytes[index + 2] = (color.z * 255.0) as u8;
        }
    }

    img
}
