use crate::core::geometry::*;

#[cfg(not(feature = "float-as-double"))]
pub type Float = f32;
#[cfg(feature = "float-as-double")]
pub type Float = f64;

pub type Vector3f = Vector3<Float>;
pub type Point3f = Vector3<Float>;

pub type Bounds3f = Bounds3<Float>;

pub type UniqueId = u64;
