//! `approx` integration, so values can be compared with
//! `assert_abs_diff_eq!` / `assert_relative_eq!` component by component.

use approx::{AbsDiffEq, RelativeEq};

use crate::matrix::Matrix4x4;
use crate::point::{Point2D, Point3D};
use crate::rational::RationalPoint4D;
use crate::vector::{Vector2D, Vector3D};

macro_rules! impl_approx {
    ($ty:ty, |$s:ident| $components:expr) => {
        impl AbsDiffEq for $ty {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                let lhs = {
                    let $s = self;
                    $components
                };
                let rhs = {
                    let $s = other;
                    $components
                };
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $ty {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                let lhs = {
                    let $s = self;
                    $components
                };
                let rhs = {
                    let $s = other;
                    $components
                };
                lhs.iter()
                    .zip(rhs.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_approx!(Vector2D, |s| s.to_array());
impl_approx!(Vector3D, |s| s.to_array());
impl_approx!(Point2D, |s| s.to_array());
impl_approx!(Point3D, |s| s.to_array());
impl_approx!(RationalPoint4D, |s| s.to_array());
impl_approx!(Matrix4x4, |s| *s.as_flat());
