use cgmath::InnerSpace as _;

use crate::{ray::Ray, types::{Float, Vec3}};

#[derive(Debug, Clone)]
pub enum Surface {
    Plane { y: Float },
    Sphere { center: Vec3, radius: Float },
}

impl Surface {
    /// Nearest positive intersection parameter, or `None` on a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<Float> {
        match self {
            Surface::Plane { y } => intersect_plane(*y, ray),
            Surface::Sphere { center, radius } => intersect_sphere(center, *radius, ray),
        }
    }
}

fn intersect_plane(y: Float, ray: &Ray) -> Option<Float> {
    if ray.dir.y == 0.0 {
        // Parallel to the plane
        return None;
    }
    let t = (y - ray.origin.y) / ray.dir.y;
    if t > 0.0 { Some(t) } else { None }
}

fn intersect_sphere(center: &Vec3, radius: Float, ray: &Ray) -> Option<Float> {
    let oc = ray.origin - center;
    let a = ray.dir.dot(ray.dir);
    let b = 2.0 * oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;

    // b^2 - 4ac; a zero discriminant (tangent ray) counts as a miss
    let d = b * b - 4.0 * a * c;
    if d <= 0.0 {
        return None;
    }
    let ds = d.sqrt();
    let t1 = (-b - ds) / (2.0 * a);
    let t2 = (-b + ds) / (2.0 * a);

    let t = if t1 > 0.0 { t1 } else { t2 };
    if t > 0.0 { Some(t) } else { None }
}
