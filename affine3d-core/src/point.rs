/// Points: locations in 2D and 3D affine space
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::vector::{Vector2D, Vector3D};

/// A 2D point
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

/// A 3D point
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Displacement from the origin to this point
    #[inline]
    pub fn to_vector(self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }
}

impl Point3D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Displacement from the origin to this point
    #[inline]
    pub fn to_vector(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Affine combination `(1 - t) * self + t * other`
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }

    /// Component-wise minimum
    #[inline]
    pub fn min_with(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max_with(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl From<Point3D> for nalgebra::Point3<f32> {
    #[inline]
    fn from(p: Point3D) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Point3<f32>> for Point3D {
    #[inline]
    fn from(p: nalgebra::Point3<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

macro_rules! impl_point_ops {
    ($pt:ident, $vec:ident { $($field:ident),+ }) => {
        // point + vector
        impl Add<$vec> for $pt {
            type Output = Self;

            #[inline]
            fn add(self, v: $vec) -> Self {
                Self { $($field: self.$field + v.$field),+ }
            }
        }

        // point - vector
        impl Sub<$vec> for $pt {
            type Output = Self;

            #[inline]
            fn sub(self, v: $vec) -> Self {
                Self { $($field: self.$field - v.$field),+ }
            }
        }

        impl AddAssign<$vec> for $pt {
            #[inline]
            fn add_assign(&mut self, v: $vec) {
                $(self.$field += v.$field;)+
            }
        }

        impl SubAssign<$vec> for $pt {
            #[inline]
            fn sub_assign(&mut self, v: $vec) {
                $(self.$field -= v.$field;)+
            }
        }

        // point - point
        impl Sub for $pt {
            type Output = $vec;

            #[inline]
            fn sub(self, other: Self) -> $vec {
                $vec { $($field: self.$field - other.$field),+ }
            }
        }

        /// Point + point is outside strict affine typing, but is what weighted
        /// averages such as `0.5 * a + 0.5 * b` need.
        impl Add for $pt {
            type Output = Self;

            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        /// Scalar times point, the other half of weighted averages.
        impl Mul<$pt> for f32 {
            type Output = $pt;

            #[inline]
            fn mul(self, p: $pt) -> $pt {
                $pt { $($field: p.$field * self),+ }
            }
        }
    };
}

impl_point_ops!(Point2D, Vector2D { x, y });
impl_point_ops!(Point3D, Vector3D { x, y, z });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_by_vector() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let v = Vector3D::new(0.5, -1.0, 2.0);
        assert_eq!(p + v, Point3D::new(1.5, 1.0, 5.0));
        assert_eq!((p + v) - v, p);

        let mut q = p;
        q += v;
        q -= v;
        assert_eq!(q, p);
    }

    #[test]
    fn test_translate_2d() {
        let p = Point2D::new(1.0, 1.0);
        let v = Vector2D::new(2.0, -3.0);
        assert_eq!(p + v, Point2D::new(3.0, -2.0));
        assert_eq!(p - v, Point2D::new(-1.0, 4.0));
    }

    #[test]
    fn test_point_difference_is_vector() {
        let a = Point3D::new(4.0, 6.0, 8.0);
        let b = Point3D::new(1.0, 2.0, 3.0);
        let d: Vector3D = a - b;
        assert_eq!(d, Vector3D::new(3.0, 4.0, 5.0));
        assert!((a.distance(b) - d.length()).abs() < 1e-6);
        assert_eq!(a.distance_squared(b), 50.0);
    }

    #[test]
    fn test_weighted_average() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(2.0, 4.0, 6.0);
        let mid = 0.5 * a + 0.5 * b;
        assert_eq!(mid, Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(a.lerp(b, 0.5), mid);

        let c = 0.25 * Point2D::new(4.0, 8.0) + 0.75 * Point2D::new(0.0, 0.0);
        assert_eq!(c, Point2D::new(1.0, 2.0));
    }

    #[test]
    fn test_min_max() {
        let a = Point3D::new(1.0, 5.0, -2.0);
        let b = Point3D::new(3.0, 0.0, -1.0);
        assert_eq!(a.min_with(b), Point3D::new(1.0, 0.0, -2.0));
        assert_eq!(a.max_with(b), Point3D::new(3.0, 5.0, -1.0));
    }
}
