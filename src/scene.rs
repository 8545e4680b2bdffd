use cgmath::vec3;

use crate::{image::RGB, ray::Ray, surface::Surface, types::Float};

pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    pub fn new() -> Self {
        Self { surfaces: Vec::new() }
    }

    pub fn add(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn trace(&self, ray: &Ray, t_min: Float, t_max: Float) -> RGB {
        let mut closest = t_max;
        // Strict < keeps the first surface added on equally distant hits.
        let mut nearest: Option<&Surface> = None;

        for surface in &self.surfaces {
            if let Some(t) = surface.intersect(ray) {
                if t < closest && t > t_min {
                    closest = t;
                    nearest = Some(surface);
                }
            }
        }

        match nearest {
            Some(_) => vec3(1.0, 1.0, 1.0),
            None => vec3(0.0, 0.0, 0.0),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
