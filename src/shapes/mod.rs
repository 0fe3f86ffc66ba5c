pub mod create_object;
pub mod curve;
pub mod curve_object;
pub mod mesh_object;

pub use create_object::*;
pub use curve::*;
pub use curve_object::*;
pub use mesh_object::*;
