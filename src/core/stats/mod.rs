pub mod diagnostics;
pub mod statistics;

pub use diagnostics::*;
pub use statistics::*;
