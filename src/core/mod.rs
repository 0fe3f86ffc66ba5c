pub mod error;
pub mod geometry;
pub mod param_set;
pub mod pbrt;
pub mod scene;
pub mod stats;
pub mod transform;
