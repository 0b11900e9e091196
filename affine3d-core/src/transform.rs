/// Applying matrices to points and vectors, and XYZ rotation state
use std::ops::{Mul, MulAssign};

use crate::matrix::Matrix4x4;
use crate::point::Point3D;
use crate::rational::RationalPoint4D;
use crate::scalar::degrees_to_radians;
use crate::vector::Vector3D;

/// Rotation around three axes (in radians), applied X then Y then Z
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationXYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationXYZ {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            degrees_to_radians(x),
            degrees_to_radians(y),
            degrees_to_radians(z),
        )
    }

    pub fn matrix(&self) -> Matrix4x4 {
        Matrix4x4::rotate_xyz(self.x, self.y, self.z)
    }
}

fn row_times_matrix(row: RationalPoint4D, m: &Matrix4x4) -> RationalPoint4D {
    let r = nalgebra::RowVector4::<f32>::from(row) * nalgebra::Matrix4::<f32>::from(*m);
    RationalPoint4D::new(r[0], r[1], r[2], r[3])
}

impl Point3D {
    /// `p * m` with an implicit `w = 1`.
    ///
    /// The result is divided through by the transformed `w` unless that is
    /// exactly zero, in which case the raw `x, y, z` are returned.
    pub fn transform(self, m: &Matrix4x4) -> Self {
        let r = row_times_matrix(RationalPoint4D::from(self), m);
        r.to_point3d()
            .unwrap_or_else(|| Point3D::new(r.x, r.y, r.z))
    }
}

impl Vector3D {
    /// `v * m` using only the upper 3x3; translation does not apply to directions.
    pub fn transform(self, m: &Matrix4x4) -> Self {
        let v = &m.value;
        Self::new(
            self.x * v[0][0] + self.y * v[1][0] + self.z * v[2][0],
            self.x * v[0][1] + self.y * v[1][1] + self.z * v[2][1],
            self.x * v[0][2] + self.y * v[1][2] + self.z * v[2][2],
        )
    }
}

impl RationalPoint4D {
    /// Full homogeneous `p * m`
    pub fn transform(self, m: &Matrix4x4) -> Self {
        row_times_matrix(self, m)
    }
}

macro_rules! impl_transform_ops {
    ($($ty:ident),+) => {
        $(
            impl Mul<Matrix4x4> for $ty {
                type Output = Self;

                #[inline]
                fn mul(self, m: Matrix4x4) -> Self {
                    self.transform(&m)
                }
            }

            impl MulAssign<Matrix4x4> for $ty {
                #[inline]
                fn mul_assign(&mut self, m: Matrix4x4) {
                    *self = self.transform(&m);
                }
            }
        )+
    };
}

impl_transform_ops!(Point3D, Vector3D, RationalPoint4D);
