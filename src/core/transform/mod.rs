pub mod matrix4x4;
pub mod transform;

pub use matrix4x4::Matrix4x4;
pub use transform::Transform;
