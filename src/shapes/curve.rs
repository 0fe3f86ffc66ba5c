use crate::core::pbrt::*;
use crate::core::transform::*;

// Curve Utility Functions
#[inline]
fn lerp3(t: Float, p0: &Point3f, p1: &Point3f) -> Point3f {
    return Point3f::new(
        lerp(t, p0.x, p1.x),
        lerp(t, p0.y, p1.y),
        lerp(t, p0.z, p1.z),
    );
}

#[inline]
fn eval_bezier(cp: &[Point3f; 4], u: Float) -> Point3f {
    let cp1 = [
        lerp3(u, &cp[0], &cp[1]),
        lerp3(u, &cp[1], &cp[2]),
        lerp3(u, &cp[2], &cp[3]),
    ];
    let cp2 = [lerp3(u, &cp1[0], &cp1[1]), lerp3(u, &cp1[1], &cp1[2])];
    return lerp3(u, &cp2[0], &cp2[1]);
}

#[inline]
fn eval_bezier_scalar(v: &[Float; 4], u: Float) -> Float {
    let a = [lerp(u, v[0], v[1]), lerp(u, v[1], v[2]), lerp(u, v[2], v[3])];
    let b = [lerp(u, a[0], a[1]), lerp(u, a[1], a[2])];
    return lerp(u, b[0], b[1]);
}

// The convex hull of the control points contains the curve; widening it by
// the largest radius contains the swept tube.
fn get_bounds(cp: &[Point3f; 4], max_radius: Float) -> Bounds3f {
    let bounds = cp
        .iter()
        .fold(Bounds3f::empty(), |b, p| -> Bounds3f { b.union_p(p) });
    return bounds.expand(max_radius);
}

/// A cubic Bezier curve with a radius at each control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCurve3 {
    ctrl_pts: [Point3f; 4],
    radii: [Float; 4],
    bounds: Bounds3f,
}

impl BezierCurve3 {
    pub fn new(ctrl_pts: &[Point3f; 4], radii: &[Float; 4]) -> Self {
        debug_assert!(ctrl_pts.iter().all(|p| p.is_finite()));
        debug_assert!(radii.iter().all(|r| *r >= 0.0));
        let max_radius = radii.iter().fold(0.0, |a: Float, b| a.max(*b));
        BezierCurve3 {
            ctrl_pts: *ctrl_pts,
            radii: *radii,
            bounds: get_bounds(ctrl_pts, max_radius),
        }
    }

    pub fn with_uniform_radius(ctrl_pts: &[Point3f; 4], radius: Float) -> Self {
        return Self::new(ctrl_pts, &[radius; 4]);
    }

    /// The curve with every control point mapped through `xfm`. Radii are
    /// carried over unchanged.
    pub fn transformed(&self, xfm: &Matrix4x4) -> Self {
        let ctrl_pts = [
            xfm.transform_point(&self.ctrl_pts[0]),
            xfm.transform_point(&self.ctrl_pts[1]),
            xfm.transform_point(&self.ctrl_pts[2]),
            xfm.transform_point(&self.ctrl_pts[3]),
        ];
        return Self::new(&ctrl_pts, &self.radii);
    }

    pub fn control_points(&self) -> &[Point3f; 4] {
        return &self.ctrl_pts;
    }

    pub fn control_point(&self, i: usize) -> Point3f {
        return self.ctrl_pts[i];
    }

    pub fn radii(&self) -> &[Float; 4] {
        return &self.radii;
    }

    pub fn max_radius(&self) -> Float {
        return self.radii.iter().fold(0.0, |a: Float, b| a.max(*b));
    }

    pub fn bounds(&self) -> Bounds3f {
        return self.bounds;
    }

    pub fn evaluate_point(&self, t: Float) -> Point3f {
        return eval_bezier(&self.ctrl_pts, t);
    }

    pub fn evaluate_radius(&self, t: Float) -> Float {
        return eval_bezier_scalar(&self.radii, t);
    }
}
