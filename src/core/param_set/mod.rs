pub mod param_set;

pub use param_set::ParamSet;
