use cgmath::{num_traits::AsPrimitive, vec3, InnerSpace as _, Vector2};

use crate::{ray::Ray, types::{Float, Vec3}};

pub struct Camera {
    eye: Vec3,
    left: Float,
    right: Float,
    bottom: Float,
    top: Float,
    focal: Float,
    width: usize,
    height: usize,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eye: Vec3,
        left: Float,
        right: Float,
        bottom: Float,
        top: Float,
        focal: Float,
        width: usize,
        height: usize,
    ) -> Self {
        Self { eye, left, right, bottom, top, focal, width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn ray(&self, pixel: Vector2<usize>) -> Ray {
        let fwidth: Float = self.width.as_();
        let fheight: Float = self.height.as_();
        let u = self.left + (self.right - self.left) * (pixel.x as Float + 0.5) / fwidth;
        let v = self.bottom + (self.top - self.bottom) * (pixel.y as Float + 0.5) / fheight;
        Ray {
            origin: self.eye,
            dir: vec3(u, v, -self.focal).normalize(),
        }
    }
}
