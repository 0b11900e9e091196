/// Surface parameters (UVs)
use bytemuck::{Pod, Zeroable};

use crate::point::Point3D;
use crate::scalar::REAL_ZERO;

/// A `(u, v)` surface parameter, usually a texture coordinate
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Param2D {
    pub u: f32,
    pub v: f32,
}

impl Param2D {
    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// Planar UVs from the X/Y coordinates of `points`.
///
/// The smallest X (Y) maps to `u = 0` (`v = 0`) and the largest to 1. An axis
/// with no extent maps every point to 0 on that axis.
pub fn uvs_from_points(points: &[Point3D]) -> Vec<Param2D> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let (min, max) = points
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.min_with(*p), hi.max_with(*p)));

    let span = |lo: f32, hi: f32| {
        let diff = hi - lo;
        move |c: f32| if diff <= REAL_ZERO { 0.0 } else { (c - lo) / diff }
    };
    let to_u = span(min.x, max.x);
    let to_v = span(min.y, max.y);

    points.iter().map(|p| Param2D::new(to_u(p.x), to_v(p.y))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uvs_span_unit_square() {
        let points = [
            Point3D::new(-1.5, -1.5, 0.0),
            Point3D::new(0.0, 1.5, 0.0),
            Point3D::new(1.5, -1.5, 0.0),
            Point3D::new(0.0, -1.5, -1.0),
        ];
        let uvs = uvs_from_points(&points);
        assert_eq!(
            uvs,
            vec![
                Param2D::new(0.0, 0.0),
                Param2D::new(0.5, 1.0),
                Param2D::new(1.0, 0.0),
                Param2D::new(0.5, 0.0),
            ]
        );
    }

    #[test]
    fn test_uvs_flat_axis() {
        let points = [Point3D::new(0.0, 2.0, 0.0), Point3D::new(4.0, 2.0, 1.0)];
        let uvs = uvs_from_points(&points);
        assert_eq!(uvs, vec![Param2D::new(0.0, 0.0), Param2D::new(1.0, 0.0)]);
    }

    #[test]
    fn test_uvs_empty() {
        assert!(uvs_from_points(&[]).is_empty());
    }
}
