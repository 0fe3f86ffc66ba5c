use super::vector3::*;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Bounds3<T> {
    pub min: Vector3<T>,
    pub max: Vector3<T>,
}

impl<T: Copy> Bounds3<T> {
    pub fn new(min: &Vector3<T>, max: &Vector3<T>) -> Self {
        Bounds3::<T> {
            min: *min,
            max: *max,
        }
    }
}

impl<
        T: Copy
            + PartialOrd
            + std::ops::Add<Output = T>
            + std::ops::Sub<Output = T>
            + std::ops::Mul<Output = T>
            + std::ops::Div<Output = T>,
    > Bounds3<T>
{
    pub fn from_points(p0: &Vector3<T>, p1: &Vector3<T>) -> Self {
        return Bounds3 {
            min: Vector3::min(p0, p1),
            max: Vector3::max(p0, p1),
        };
    }

    pub fn diagonal(&self) -> Vector3<T> {
        return self.max - self.min;
    }

    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            return 0;
        } else if d.y > d.z {
            return 1;
        } else {
            return 2;
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        return Bounds3 {
            min: Vector3::min(&self.min, &other.min),
            max: Vector3::max(&self.max, &other.max),
        };
    }

    pub fn union_p(&self, p: &Vector3<T>) -> Self {
        return Bounds3 {
            min: Vector3::min(&self.min, p),
            max: Vector3::max(&self.max, p),
        };
    }

    pub fn expand(&self, delta: T) -> Self {
        let delta = Vector3::<T>::splat(delta);
        return Bounds3 {
            min: self.min - delta,
            max: self.max + delta,
        };
    }

    pub fn is_valid(&self) -> bool {
        return self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z;
    }

    pub fn contains_point(&self, p: &Vector3<T>) -> bool {
        return p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z;
    }

    /// True if `other` lies entirely inside this box. An invalid (empty)
    /// box is contained in everything.
    pub fn contains(&self, other: &Self) -> bool {
        if !other.is_valid() {
            return true;
        }
        return self.contains_point(&other.min) && self.contains_point(&other.max);
    }
}

macro_rules! impl_float_bounds3 {
    ($t:ty) => {
        impl Bounds3<$t> {
            /// The identity of `union`: any union with it yields the other box.
            pub fn empty() -> Self {
                return Bounds3 {
                    min: Vector3::splat(<$t>::INFINITY),
                    max: Vector3::splat(<$t>::NEG_INFINITY),
                };
            }

            pub fn centroid(&self) -> Vector3<$t> {
                return (self.min + self.max) * 0.5;
            }

            pub fn surface_area(&self) -> $t {
                if !self.is_valid() {
                    return 0.0;
                }
                let d = self.diagonal();
                return 2.0 * (d.x * d.y + d.x * d.z + d.y * d.z);
            }
        }
    };
}

impl_float_bounds3!(f32);
impl_float_bounds3!(f64);

impl<T: Copy> From<((T, T, T), (T, T, T))> for Bounds3<T> {
    fn from(value: ((T, T, T), (T, T, T))) -> Self {
        Bounds3::<T> {
            min: Vector3::<T>::from(value.0),
            max: Vector3::<T>::from(value.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let b = Bounds3::<f32>::empty();
        assert!(!b.is_valid());
        assert_eq!(b.surface_area(), 0.0);
        let p = Vector3::<f32>::new(1.0, 2.0, 3.0);
        let b = b.union_p(&p);
        assert!(b.is_valid());
        assert_eq!(b.min, p);
        assert_eq!(b.max, p);
    }

    #[test]
    fn test_002() {
        let b = Bounds3::<f32>::from(((0.0, 0.0, 0.0), (1.0, 2.0, 3.0)));
        assert_eq!(b.surface_area(), 22.0);
        assert_eq!(b.maximum_extent(), 2);
        assert_eq!(b.centroid(), Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_003() {
        let a = Bounds3::<f64>::from(((0.0, 0.0, 0.0), (1.0, 1.0, 1.0)));
        let b = Bounds3::<f64>::from(((2.0, -1.0, 0.5), (3.0, 0.5, 0.75)));
        let u = a.union(&b);
        assert!(u.contains(&a));
        assert!(u.contains(&b));
        assert!(!a.contains(&b));
        assert!(a.contains(&Bounds3::<f64>::empty()));
        assert_eq!(u, Bounds3::from(((0.0, -1.0, 0.0), (3.0, 1.0, 1.0))));
    }
}
