use super::types::Float;

#[cfg(not(feature = "float-as-double"))]
pub const PI: Float = std::f32::consts::PI;
#[cfg(feature = "float-as-double")]
pub const PI: Float = std::f64::consts::PI;
