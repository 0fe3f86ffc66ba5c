use super::curve_key::*;
use crate::core::scene::*;
use crate::shapes::*;

/// Appends every curve of every curve object instance of `assembly`,
/// moved into assembly space, along with its key.
///
/// Instances of other object kinds are skipped. All curves of an object
/// share material slot 0.
pub fn collect_curves(
    assembly: &Assembly,
    curves: &mut Vec<BezierCurve3>,
    curve_keys: &mut Vec<CurveKey>,
) {
    for (i, object_instance) in assembly.object_instances().iter().enumerate() {
        let curve_object = match object_instance.get_object() {
            Object::Curve(curve_object) => curve_object,
            _ => continue,
        };

        let xfm = object_instance.get_transform().local_to_parent();
        let count = curve_object.get_curve_count();
        curves.reserve(count);
        curve_keys.reserve(count);
        for j in 0..count {
            curves.push(curve_object.get_curve(j).transformed(xfm));
            curve_keys.push(CurveKey::new(i, j, 0));
        }
    }
    debug_assert_eq!(curves.len(), curve_keys.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::param_set::*;
    use crate::core::pbrt::*;
    use crate::core::transform::*;

    fn straight_curve(x: Float) -> BezierCurve3 {
        let p = [
            Point3f::new(x, 0.0, 0.0),
            Point3f::new(x, 1.0, 0.0),
            Point3f::new(x, 2.0, 0.0),
            Point3f::new(x, 3.0, 0.0),
        ];
        return BezierCurve3::with_uniform_radius(&p, 0.1);
    }

    #[test]
    fn test_001() {
        let mut assembly = Assembly::new("a", &ParamSet::new());
        let mut out = Vec::new();
        let mut keys = Vec::new();
        collect_curves(&assembly, &mut out, &mut keys);
        assert!(out.is_empty());
        assert!(keys.is_empty());

        assembly.add_object(Object::Curve(CurveObject::new(
            "hair",
            vec![straight_curve(0.0), straight_curve(1.0)],
        )));
        assembly
            .add_object_instance("hair_inst0", "hair", &Transform::identity())
            .unwrap();
        assembly
            .add_object_instance("hair_inst1", "hair", &Transform::translate(0.0, 0.0, 5.0))
            .unwrap();
        collect_curves(&assembly, &mut out, &mut keys);
        assert_eq!(out.len(), 4);
        assert_eq!(
            keys,
            vec![
                CurveKey::new(0, 0, 0),
                CurveKey::new(0, 1, 0),
                CurveKey::new(1, 0, 0),
                CurveKey::new(1, 1, 0),
            ]
        );
        assert_eq!(out[3].control_point(0), Point3f::new(1.0, 0.0, 5.0));
    }
}
