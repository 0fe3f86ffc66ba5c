use super::curve::*;
use crate::core::error::*;
use crate::core::param_set::*;
use crate::core::pbrt::*;

use log::*;

pub const CURVE_OBJECT_MODEL: &str = "curve_object";

const DEFAULT_RADIUS: Float = 0.01;

/// A set of object-space Bezier curves.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveObject {
    name: String,
    curves: Vec<BezierCurve3>,
    bounds: Bounds3f,
}

impl CurveObject {
    pub fn new(name: &str, curves: Vec<BezierCurve3>) -> Self {
        let bounds = curves
            .iter()
            .fold(Bounds3f::empty(), |b, c| b.union(&c.bounds()));
        CurveObject {
            name: String::from(name),
            curves,
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn get_curve_count(&self) -> usize {
        return self.curves.len();
    }

    pub fn get_curve(&self, index: usize) -> &BezierCurve3 {
        return &self.curves[index];
    }

    pub fn curves(&self) -> &[BezierCurve3] {
        return &self.curves;
    }

    pub fn bounds(&self) -> Bounds3f {
        return self.bounds;
    }
}

fn convert_to_point(f: &[Float]) -> Vec<Point3f> {
    return f
        .chunks_exact(3)
        .map(|c| Point3f::new(c[0], c[1], c[2]))
        .collect();
}

/// Builds a curve object from a piecewise cubic Bezier control point list.
///
/// `P` holds `4 + 3 * n` points: after the first segment, each segment
/// reuses the last control point of the previous one. `radius` is either a
/// single value or one value per control point.
pub fn create_curve_object(name: &str, params: &ParamSet) -> Result<CurveObject, CurveTreeError> {
    let p = params.get_floats("P");
    if p.len() % 3 != 0 {
        let msg = format!("{} values is not a list of 3D points", p.len());
        return Err(CurveTreeError::invalid_parameter("P", &msg));
    }
    let cp = convert_to_point(&p);
    if cp.iter().any(|p| !p.is_finite()) {
        return Err(CurveTreeError::invalid_parameter(
            "P",
            "control points must be finite",
        ));
    }
    let ncp = cp.len();
    if ncp == 0 {
        warn!("Curve object \"{}\" has no control points.", name);
        return Ok(CurveObject::new(name, Vec::new()));
    }
    if ncp < 4 || (ncp - 4) % 3 != 0 {
        let msg = format!(
            "invalid number of control points {}: 4 + n * 3 are required, for n >= 0",
            ncp
        );
        return Err(CurveTreeError::invalid_parameter("P", &msg));
    }

    let mut radii = params.get_floats("radius");
    match radii.len() {
        0 => radii = vec![DEFAULT_RADIUS; ncp],
        1 => radii = vec![radii[0]; ncp],
        n if n == ncp => {}
        n => {
            let msg = format!("expected 1 or {} values, got {}", ncp, n);
            return Err(CurveTreeError::invalid_parameter("radius", &msg));
        }
    }
    if radii.iter().any(|r| r.is_nan() || *r < 0.0) {
        return Err(CurveTreeError::invalid_parameter(
            "radius",
            "radii must be non-negative",
        ));
    }

    let n_segments = (ncp - 1) / 3;
    let mut curves = Vec::with_capacity(n_segments);
    for i in 0..n_segments {
        let s = 3 * i;
        let ctrl_pts = [cp[s], cp[s + 1], cp[s + 2], cp[s + 3]];
        let seg_radii = [radii[s], radii[s + 1], radii[s + 2], radii[s + 3]];
        curves.push(BezierCurve3::new(&ctrl_pts, &seg_radii));
    }
    return Ok(CurveObject::new(name, curves));
}
