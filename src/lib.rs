pub mod accelerators;
pub mod core;
pub mod shapes;
