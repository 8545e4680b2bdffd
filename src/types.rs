use cgmath::Vector3;

pub type Float = f32;
pub type Vec3 = Vector3<Float>;
