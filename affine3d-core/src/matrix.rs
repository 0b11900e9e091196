//! 4x4 transformation matrices
//!
//! [`Matrix4x4`] is stored row-major as `value[row][col]` and follows the
//! row-vector convention: a point is transformed as `p * M`, translation sits
//! in row 3, and `a * b` applies `a` first and then `b`. The heavy lifting
//! (products, inversion, rotation construction) is forwarded to nalgebra.

use std::ops::{Mul, MulAssign};

use bytemuck::{Pod, Zeroable};
use tracing::warn;

use crate::error::{MathError, MathResult};
use crate::vector::Vector3D;

/// A 4x4 affine or projective transform
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Matrix4x4 {
    pub value: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        value: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub const fn from_rows(value: [[f32; 4]; 4]) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `offset`
    pub fn translate(offset: Vector3D) -> Self {
        // nalgebra builds the column-vector form; ours is its transpose
        Self::from(nalgebra::Matrix4::new_translation(&nalgebra::Vector3::<f32>::from(offset)).transpose())
    }

    /// Non-uniform scale about the origin
    pub fn scale(factors: Vector3D) -> Self {
        Self::from(nalgebra::Matrix4::new_nonuniform_scaling(&nalgebra::Vector3::<f32>::from(factors)))
    }

    /// Rotation about the X axis (radians)
    pub fn rotate_x(angle: f32) -> Self {
        Self::rotate_xyz(angle, 0.0, 0.0)
    }

    /// Rotation about the Y axis (radians)
    pub fn rotate_y(angle: f32) -> Self {
        Self::rotate_xyz(0.0, angle, 0.0)
    }

    /// Rotation about the Z axis (radians)
    pub fn rotate_z(angle: f32) -> Self {
        Self::rotate_xyz(0.0, 0.0, angle)
    }

    /// Rotation about X, then Y, then Z (radians).
    pub fn rotate_xyz(x: f32, y: f32, z: f32) -> Self {
        // from_euler_angles is Rz * Ry * Rx acting on column vectors
        Self::from(nalgebra::Matrix4::from_euler_angles(x, y, z).transpose())
    }

    pub fn transpose(&self) -> Self {
        let mut value = [[0.0; 4]; 4];
        for (r, row) in value.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = self.value[c][r];
            }
        }
        Self { value }
    }

    pub fn determinant(&self) -> f32 {
        nalgebra::Matrix4::<f32>::from(*self).determinant()
    }

    /// Inverse transform, or [`MathError::SingularMatrix`] when none exists.
    ///
    /// Goes through an LU decomposition: the cofactor form divides by the
    /// determinant, which underflows in `f32` for small but invertible scales.
    pub fn try_invert(&self) -> MathResult<Self> {
        let inverse = nalgebra::Matrix4::<f32>::from(*self)
            .lu()
            .try_inverse()
            .ok_or(MathError::SingularMatrix)?;

        if inverse.iter().any(|entry| !entry.is_finite()) {
            return Err(MathError::SingularMatrix);
        }
        Ok(Self::from(inverse))
    }

    /// Inverse transform, falling back to the identity for singular input.
    ///
    /// Use [`Matrix4x4::try_invert`] when the caller needs to know.
    pub fn inverse(&self) -> Self {
        match self.try_invert() {
            Ok(inverse) => inverse,
            Err(err) => {
                warn!(matrix = ?self.value, "{err}; substituting identity");
                Self::IDENTITY
            }
        }
    }

    /// The 16 entries in row-major order
    #[inline]
    pub fn as_flat(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.value)
    }

    #[inline]
    pub fn from_flat(entries: [f32; 16]) -> Self {
        Self {
            value: bytemuck::cast(entries),
        }
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix4x4> for nalgebra::Matrix4<f32> {
    #[inline]
    fn from(m: Matrix4x4) -> Self {
        nalgebra::Matrix4::from_fn(|r, c| m.value[r][c])
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4x4 {
    fn from(m: nalgebra::Matrix4<f32>) -> Self {
        let mut value = [[0.0; 4]; 4];
        for (r, row) in value.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = m[(r, c)];
            }
        }
        Self { value }
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    /// Composition: `self` applied first, then `rhs`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from(nalgebra::Matrix4::<f32>::from(self) * nalgebra::Matrix4::<f32>::from(rhs))
    }
}

impl MulAssign for Matrix4x4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
