use super::object::*;
use super::object_instance::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::pbrt::*;
use crate::core::transform::*;

use std::sync::Arc;

/// A named group of objects and their instances, with its own parameters.
#[derive(Debug, Clone)]
pub struct Assembly {
    uid: UniqueId,
    name: String,
    params: ParamSet,
    objects: Vec<Arc<Object>>,
    object_instances: Vec<ObjectInstance>,
}

impl Assembly {
    pub fn new(name: &str, params: &ParamSet) -> Self {
        Assembly {
            uid: new_uid(),
            name: String::from(name),
            params: params.clone(),
            objects: Vec::new(),
            object_instances: Vec::new(),
        }
    }

    pub fn get_uid(&self) -> UniqueId {
        return self.uid;
    }

    pub fn get_name(&self) -> &str {
        return &self.name;
    }

    pub fn get_parameters(&self) -> &ParamSet {
        return &self.params;
    }

    pub fn get_parameters_mut(&mut self) -> &mut ParamSet {
        return &mut self.params;
    }

    pub fn objects(&self) -> &[Arc<Object>] {
        return &self.objects;
    }

    pub fn add_object(&mut self, object: Object) -> Arc<Object> {
        let object = Arc::new(object);
        self.objects.push(object.clone());
        return object;
    }

    pub fn find_object(&self, name: &str) -> Option<&Arc<Object>> {
        return self.objects.iter().find(|o| o.name() == name);
    }

    pub fn object_instances(&self) -> &[ObjectInstance] {
        return &self.object_instances;
    }

    /// Instantiates the object called `object_name`, which must already
    /// belong to this assembly. Returns the new instance's index.
    pub fn add_object_instance(
        &mut self,
        name: &str,
        object_name: &str,
        transform: &Transform,
    ) -> Result<usize, CurveTreeError> {
        let object = self.find_object(object_name).cloned().ok_or_else(|| {
            let msg = format!("object instance \"{}\" refers to unknown object", name);
            CurveTreeError::invalid_parameter(object_name, &msg)
        })?;
        self.object_instances
            .push(ObjectInstance::new(name, &object, transform));
        return Ok(self.object_instances.len() - 1);
    }

    pub fn get_object_instance(&self, index: usize) -> Option<&ObjectInstance> {
        return self.object_instances.get(index);
    }

    pub fn get_object_instance_by_uid(&self, uid: UniqueId) -> Option<&ObjectInstance> {
        return self.object_instances.iter().find(|oi| oi.get_uid() == uid);
    }

    /// Union of the bounds of every object instance, in assembly space.
    pub fn compute_local_bbox(&self) -> Bounds3f {
        return self
            .object_instances
            .iter()
            .fold(Bounds3f::empty(), |b, oi| b.union(&oi.compute_parent_bbox()));
    }
}
