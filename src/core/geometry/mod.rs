pub mod bounds3;
pub mod vector3;

pub use bounds3::*;
pub use vector3::*;
