pub mod assembly;
pub mod object;
pub mod object_instance;
pub mod scene;
pub mod scene_file;

pub use assembly::*;
pub use object::*;
pub use object_instance::*;
pub use scene::*;
pub use scene_file::*;
