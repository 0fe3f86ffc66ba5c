use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3::<T> { x, y, z }
    }

    pub fn splat(v: T) -> Self {
        Vector3::<T> { x: v, y: v, z: v }
    }
}

impl<T: Copy + Default> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Copy + PartialOrd> Vector3<T> {
    #[inline]
    pub fn min(a: &Self, b: &Self) -> Self {
        let pick = |u: T, v: T| if u <= v { u } else { v };
        Vector3::<T> {
            x: pick(a.x, b.x),
            y: pick(a.y, b.y),
            z: pick(a.z, b.z),
        }
    }

    #[inline]
    pub fn max(a: &Self, b: &Self) -> Self {
        let pick = |u: T, v: T| if u >= v { u } else { v };
        Vector3::<T> {
            x: pick(a.x, b.x),
            y: pick(a.y, b.y),
            z: pick(a.z, b.z),
        }
    }
}

macro_rules! impl_float_vector3 {
    ($t:ty) => {
        impl Vector3<$t> {
            #[inline]
            pub fn dot(&self, rhs: &Self) -> $t {
                return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
            }

            #[inline]
            pub fn length_squared(&self) -> $t {
                return self.dot(self);
            }

            #[inline]
            pub fn length(&self) -> $t {
                return self.length_squared().sqrt();
            }

            #[inline]
            pub fn distance(a: &Self, b: &Self) -> $t {
                return (*a - *b).length();
            }

            #[inline]
            pub fn is_finite(&self) -> bool {
                return self.x.is_finite() && self.y.is_finite() && self.z.is_finite();
            }
        }

        impl ops::Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            #[inline]
            fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                return rhs * self;
            }
        }
    };
}

impl_float_vector3!(f32);
impl_float_vector3!(f64);

// V op V
macro_rules! impl_componentwise_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl<T: ops::$trait<Output = T>> ops::$trait<Vector3<T>> for Vector3<T> {
            type Output = Vector3<T>;
            #[inline]
            fn $fn(self, rhs: Vector3<T>) -> Vector3<T> {
                return Vector3 {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                    z: self.z $op rhs.z,
                };
            }
        }
    };
}

impl_componentwise_op!(Add, add, +);
impl_componentwise_op!(Sub, sub, -);
impl_componentwise_op!(Mul, mul, *);

// V op T
impl<T: ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        };
    }
}

impl<T: ops::Div<Output = T> + Copy> ops::Div<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        };
    }
}

impl<T: ops::Neg<Output = T>> ops::Neg for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        return Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        };
    }
}

impl<T> ops::Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl<T> ops::IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {}", i),
        }
    }
}

impl<T: Copy> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from(value: (T, T, T)) -> Self {
        Vector3::<T>::new(value.0, value.1, value.2)
    }
}

impl<T: Copy> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(value: [T; 3]) -> Self {
        Vector3::<T>::new(value[0], value[1], value[2])
    }
}
