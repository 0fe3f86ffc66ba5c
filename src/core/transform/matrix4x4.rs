use crate::core::pbrt::*;
use std::ops;

/// Row-major 4x4 matrix acting on column vectors.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [Float; 16],
}

impl Matrix4x4 {
    pub fn identity() -> Self {
        return Self::scale(1.0, 1.0, 1.0);
    }

    pub fn translate(x: Float, y: Float, z: Float) -> Self {
        let mut r = Self::identity();
        r.m[3] = x;
        r.m[7] = y;
        r.m[11] = z;
        return r;
    }

    pub fn scale(x: Float, y: Float, z: Float) -> Self {
        let mut m = [0.0; 16];
        m[0] = x;
        m[5] = y;
        m[10] = z;
        m[15] = 1.0;
        return Matrix4x4 { m };
    }

    /// Rotation of `theta` degrees around coordinate axis `axis` (0, 1 or 2).
    fn rotate_axis(axis: usize, theta: Float) -> Self {
        let (s, c) = Float::sin_cos(radians(theta));
        // The two coordinates spanning the rotation plane, right-handed.
        let (a, b) = match axis {
            0 => (1, 2),
            1 => (2, 0),
            _ => (0, 1),
        };
        let mut r = Self::identity();
        r.m[4 * a + a] = c;
        r.m[4 * a + b] = -s;
        r.m[4 * b + a] = s;
        r.m[4 * b + b] = c;
        return r;
    }

    pub fn rotate_x(theta: Float) -> Self {
        return Self::rotate_axis(0, theta);
    }

    pub fn rotate_y(theta: Float) -> Self {
        return Self::rotate_axis(1, theta);
    }

    pub fn rotate_z(theta: Float) -> Self {
        return Self::rotate_axis(2, theta);
    }

    pub fn transpose(&self) -> Self {
        let mut m = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                m[4 * i + j] = self.m[4 * j + i];
            }
        }
        return Matrix4x4 { m };
    }

    /// Gauss-Jordan elimination with full pivoting. `None` for singular
    /// matrices.
    pub fn inverse(&self) -> Option<Self> {
        let mut indxc = [0; 4];
        let mut indxr = [0; 4];
        let mut ipiv = [0; 4];
        let mut minv: [Float; 16] = self.m;
        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;
            for j in 0..4 {
                if ipiv[j] == 1 {
                    continue;
                }
                for k in 0..4 {
                    if ipiv[k] == 0 {
                        if Float::abs(minv[4 * j + k]) >= big {
                            big = Float::abs(minv[4 * j + k]);
                            irow = j;
                            icol = k;
                        }
                    } else if ipiv[k] > 1 {
                        return None;
                    }
                }
            }
            ipiv[icol] += 1;
            if irow != icol {
                for k in 0..4 {
                    minv.swap(4 * irow + k, 4 * icol + k);
                }
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv[4 * icol + icol] == 0.0 {
                return None;
            }

            let pivinv = 1.0 / minv[4 * icol + icol];
            minv[4 * icol + icol] = 1.0;
            for j in 0..4 {
                minv[4 * icol + j] *= pivinv;
            }

            for j in 0..4 {
                if j != icol {
                    let save = minv[4 * j + icol];
                    minv[4 * j + icol] = 0.0;
                    for k in 0..4 {
                        minv[4 * j + k] -= minv[4 * icol + k] * save;
                    }
                }
            }
        }

        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv.swap(4 * k + indxr[j], 4 * k + indxc[j]);
                }
            }
        }

        return Some(Matrix4x4 { m: minv });
    }

    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let m = &self.m;
        let xp = m[0] * p.x + m[1] * p.y + m[2] * p.z + m[3];
        let yp = m[4] * p.x + m[5] * p.y + m[6] * p.z + m[7];
        let zp = m[8] * p.x + m[9] * p.y + m[10] * p.z + m[11];
        let wp = m[12] * p.x + m[13] * p.y + m[14] * p.z + m[15];
        if wp == 1.0 {
            return Point3f::new(xp, yp, zp);
        } else {
            return Point3f::new(xp / wp, yp / wp, zp / wp);
        }
    }

    pub fn is_identity(&self) -> bool {
        return *self == Self::identity();
    }
}

impl ops::Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let mut m = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                m[4 * i + j] = (0..4).map(|k| self.m[4 * i + k] * rhs.m[4 * k + j]).sum();
            }
        }
        return Matrix4x4 { m };
    }
}

impl From<[Float; 16]> for Matrix4x4 {
    fn from(v: [Float; 16]) -> Self {
        Matrix4x4 { m: v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: &Matrix4x4, b: &Matrix4x4) {
        for i in 0..16 {
            assert!((a.m[i] - b.m[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_001() {
        let m1 = Matrix4x4::scale(4.0, 4.0, 4.0);
        let m2 = m1.inverse().unwrap();
        assert_eq!(m2, Matrix4x4::scale(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_002() {
        let m1 = Matrix4x4::translate(4.0, -2.0, 1.0);
        let m2 = m1.inverse().unwrap();
        assert_eq!(m2, Matrix4x4::translate(-4.0, 2.0, -1.0));
    }

    #[test]
    fn test_003() {
        for axis in 0..3 {
            let m1 = Matrix4x4::rotate_axis(axis, 90.0);
            assert_near(&m1.inverse().unwrap(), &Matrix4x4::rotate_axis(axis, -90.0));
            assert_near(&m1.transpose(), &Matrix4x4::rotate_axis(axis, -90.0));
        }
    }

    #[test]
    fn test_004() {
        let p = Matrix4x4::rotate_z(90.0).transform_point(&Point3f::new(1.0, 0.0, 0.0));
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
        let p = Matrix4x4::rotate_x(90.0).transform_point(&Point3f::new(0.0, 1.0, 0.0));
        assert!((p.z - 1.0).abs() < 1e-6);
        let p = Matrix4x4::rotate_y(90.0).transform_point(&Point3f::new(0.0, 0.0, 1.0));
        assert!((p.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_005() {
        let m = Matrix4x4::translate(1.0, 2.0, 3.0) * Matrix4x4::scale(2.0, 2.0, 2.0);
        let p = m.transform_point(&Point3f::new(1.0, 1.0, 1.0));
        assert_eq!(p, Point3f::new(3.0, 4.0, 5.0));
        assert!(Matrix4x4::identity().is_identity());
        assert!(Matrix4x4::from([0.0; 16]).inverse().is_none());
    }
}
