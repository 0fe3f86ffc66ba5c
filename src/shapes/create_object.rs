use super::curve_object::*;
use super::mesh_object::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::scene::*;

/// Creates an object from its model identifier.
pub fn create_object(model: &str, name: &str, params: &ParamSet) -> Result<Object, CurveTreeError> {
    match model {
        MESH_OBJECT_MODEL => Ok(Object::Mesh(create_mesh_object(name, params)?)),
        CURVE_OBJECT_MODEL => Ok(Object::Curve(create_curve_object(name, params)?)),
        _ => {
            let msg = format!("unknown object model \"{}\"", model);
            return Err(CurveTreeError::invalid_parameter("model", &msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let obj = create_object(CURVE_OBJECT_MODEL, "c", &ParamSet::new()).unwrap();
        assert_eq!(obj.model(), CURVE_OBJECT_MODEL);
        let obj = create_object(MESH_OBJECT_MODEL, "m", &ParamSet::new()).unwrap();
        assert_eq!(obj.model(), MESH_OBJECT_MODEL);
        assert!(create_object("nurbs_object", "n", &ParamSet::new()).is_err());
    }
}
