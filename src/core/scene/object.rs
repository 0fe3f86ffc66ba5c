use crate::core::pbrt::*;
use crate::shapes::*;

/// The closed set of object kinds an assembly can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Mesh(MeshObject),
    Curve(CurveObject),
}

impl Object {
    pub fn name(&self) -> &str {
        match self {
            Object::Mesh(m) => m.name(),
            Object::Curve(c) => c.name(),
        }
    }

    /// The model identifier the object was created from.
    pub fn model(&self) -> &'static str {
        match self {
            Object::Mesh(_) => MESH_OBJECT_MODEL,
            Object::Curve(_) => CURVE_OBJECT_MODEL,
        }
    }

    pub fn as_curve_object(&self) -> Option<&CurveObject> {
        match self {
            Object::Curve(c) => Some(c),
            _ => None,
        }
    }

    /// Object-space bounds.
    pub fn bounds(&self) -> Bounds3f {
        match self {
            Object::Mesh(m) => m.bounds(),
            Object::Curve(c) => c.bounds(),
        }
    }
}
