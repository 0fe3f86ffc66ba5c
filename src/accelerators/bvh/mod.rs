pub mod build;

pub use build::*;
