use super::matrix4x4::Matrix4x4;
use crate::core::pbrt::*;

use std::ops;

/// An invertible affine transform. Keeps the inverse alongside the
/// matrix so that neither direction requires a matrix inversion.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub minv: Matrix4x4,
}

impl Transform {
    pub fn identity() -> Self {
        let m = Matrix4x4::identity();
        Transform { m, minv: m }
    }

    pub fn translate(x: Float, y: Float, z: Float) -> Self {
        let m = Matrix4x4::translate(x, y, z);
        let minv = Matrix4x4::translate(-x, -y, -z);
        Transform { m, minv }
    }

    pub fn scale(x: Float, y: Float, z: Float) -> Self {
        let m = Matrix4x4::scale(x, y, z);
        let minv = Matrix4x4::scale(1.0 / x, 1.0 / y, 1.0 / z);
        Transform { m, minv }
    }

    pub fn rotate_x(theta: Float) -> Self {
        let m = Matrix4x4::rotate_x(theta);
        Transform {
            m,
            minv: m.transpose(),
        }
    }

    pub fn rotate_y(theta: Float) -> Self {
        let m = Matrix4x4::rotate_y(theta);
        Transform {
            m,
            minv: m.transpose(),
        }
    }

    pub fn rotate_z(theta: Float) -> Self {
        let m = Matrix4x4::rotate_z(theta);
        Transform {
            m,
            minv: m.transpose(),
        }
    }

    /// Builds a transform from a local-to-parent matrix; `None` if the
    /// matrix is singular.
    pub fn from_matrix(m: &Matrix4x4) -> Option<Self> {
        let minv = m.inverse()?;
        return Some(Transform { m: *m, minv });
    }

    pub fn inverse(&self) -> Self {
        Transform {
            m: self.minv,
            minv: self.m,
        }
    }

    pub fn local_to_parent(&self) -> &Matrix4x4 {
        return &self.m;
    }

    pub fn parent_to_local(&self) -> &Matrix4x4 {
        return &self.minv;
    }

    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        return self.m.transform_point(p);
    }

    pub fn transform_bounds(&self, bounds: &Bounds3f) -> Bounds3f {
        if !bounds.is_valid() {
            return *bounds;
        }
        let mut result = Bounds3f::empty();
        for i in 0..8 {
            let corner = Point3f::new(
                if i & 1 == 0 { bounds.min.x } else { bounds.max.x },
                if i & 2 == 0 { bounds.min.y } else { bounds.max.y },
                if i & 4 == 0 { bounds.min.z } else { bounds.max.z },
            );
            result = result.union_p(&self.transform_point(&corner));
        }
        return result;
    }

    pub fn is_identity(&self) -> bool {
        return self.m.is_identity();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ops::Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, t2: Transform) -> Transform {
        return Transform {
            m: self.m * t2.m,
            minv: t2.minv * self.minv,
        };
    }
}
