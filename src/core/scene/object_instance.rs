use super::object::*;
use crate::core::pbrt::*;
use crate::core::transform::*;

use std::sync::Arc;

/// Places an object in its assembly.
#[derive(Debug, Clone)]
pub struct ObjectInstance {
    uid: UniqueId,
    name: String,
    object: Arc<Object>,
    transform: Transform,
}

impl ObjectInstance {
    pub fn new(name: &str, object: &Arc<Object>, transform: &Transform) -> Self {
        ObjectInstance {
            uid: new_uid(),
            name: String::from(name),
            object: object.clone(),
            transform: *transform,
        }
    }

    pub fn get_uid(&self) -> UniqueId {
        return self.uid;
    }

    pub fn get_name(&self) -> &str {
        return &self.name;
    }

    pub fn get_object(&self) -> &Object {
        return self.object.as_ref();
    }

    pub fn get_transform(&self) -> &Transform {
        return &self.transform;
    }

    /// Bounds of the instantiated object in assembly space.
    pub fn compute_parent_bbox(&self) -> Bounds3f {
        return self.transform.transform_bounds(&self.object.bounds());
    }
}
