/// Homogeneous (rational) 4D points
use bytemuck::{Pod, Zeroable};

use crate::point::Point3D;
use crate::vector::Vector3D;

/// A homogeneous coordinate `(x, y, z, w)`.
///
/// Locations carry `w = 1` and directions carry `w = 0`; the conversions from
/// [`Point3D`] and [`Vector3D`] encode exactly that, so projective transforms
/// move points but leave directions untranslated.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct RationalPoint4D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl RationalPoint4D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// True when this encodes a direction rather than a location
    #[inline]
    pub fn is_direction(self) -> bool {
        self.w == 0.0
    }

    /// Project back to 3D by dividing through by `w`.
    ///
    /// Returns `None` for directions (`w == 0`), which have no affine location.
    pub fn to_point3d(self) -> Option<Point3D> {
        if self.is_direction() {
            return None;
        }
        let inv_w = 1.0 / self.w;
        Some(Point3D::new(self.x * inv_w, self.y * inv_w, self.z * inv_w))
    }

    /// Drop `w` without dividing
    #[inline]
    pub fn xyz(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }
}

impl From<Point3D> for RationalPoint4D {
    #[inline]
    fn from(p: Point3D) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }
}

impl From<Vector3D> for RationalPoint4D {
    #[inline]
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }
}

impl From<RationalPoint4D> for nalgebra::RowVector4<f32> {
    #[inline]
    fn from(p: RationalPoint4D) -> Self {
        nalgebra::RowVector4::new(p.x, p.y, p.z, p.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_has_unit_w() {
        let r = RationalPoint4D::from(Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(r, RationalPoint4D::new(1.0, 2.0, 3.0, 1.0));
        assert!(!r.is_direction());
    }

    #[test]
    fn test_vector_has_zero_w() {
        let r = RationalPoint4D::from(Vector3D::new(1.0, 2.0, 3.0));
        assert_eq!(r.w, 0.0);
        assert!(r.is_direction());
        assert_eq!(r.to_point3d(), None);
        assert_eq!(r.xyz(), Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_homogeneous_divide() {
        let r = RationalPoint4D::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(r.to_point3d(), Some(Point3D::new(1.0, 2.0, 3.0)));
    }
}
