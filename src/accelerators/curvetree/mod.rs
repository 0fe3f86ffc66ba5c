pub mod collect;
pub mod curve_key;
pub mod curve_tree;
pub mod factory;

pub use collect::*;
pub use curve_key::*;
pub use curve_tree::*;
pub use factory::*;
