pub mod builder;
pub mod node;
pub mod partitioner;
pub mod reorder;
pub mod sah;
pub mod tree_statistics;

pub use builder::*;
pub use node::*;
pub use partitioner::*;
pub use reorder::*;
pub use sah::*;
pub use tree_statistics::*;
