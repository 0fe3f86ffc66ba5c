pub mod bvh;
pub mod curvetree;

pub use bvh::*;
pub use curvetree::*;
