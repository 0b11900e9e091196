//! Axis-aligned bounding boxes
//!
//! An empty box is represented as `None` rather than a flag, so every
//! [`BoundingBox3D`] that exists has `min <= max` on each axis.

use tracing::debug;

use crate::point::Point3D;
use crate::scalar::{DEGENERATE_PAD, REAL_ZERO};
use crate::vector::Vector3D;

/// A non-empty axis-aligned box
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    pub min: Point3D,
    pub max: Point3D,
}

impl BoundingBox3D {
    /// Box from two opposite corners, in any order
    pub fn new(a: Point3D, b: Point3D) -> Self {
        Self {
            min: a.min_with(b),
            max: a.max_with(b),
        }
    }

    /// Degenerate box holding a single point
    pub fn from_point(p: Point3D) -> Self {
        Self { min: p, max: p }
    }

    /// Tightest box around `points`, or `None` when there are none
    pub fn from_points(points: &[Point3D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(*first), |bounds, p| bounds.union_point(*p)),
        )
    }

    /// Grow to include `p`
    pub fn union_point(self, p: Point3D) -> Self {
        Self {
            min: self.min.min_with(p),
            max: self.max.max_with(p),
        }
    }

    /// Smallest box containing both
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min_with(other.min),
            max: self.max.max_with(other.max),
        }
    }

    pub fn size(&self) -> Vector3D {
        self.max - self.min
    }

    pub fn center(&self) -> Point3D {
        self.min.lerp(self.max, 0.5)
    }

    /// Inclusive containment test
    pub fn contains(&self, p: Point3D) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// True when no axis has an extent above [`REAL_ZERO`]
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        size.x <= REAL_ZERO && size.y <= REAL_ZERO && size.z <= REAL_ZERO
    }

    /// Grow a degenerate box by [`DEGENERATE_PAD`] on every side so it has
    /// visible volume; other boxes are returned unchanged.
    pub fn padded_if_degenerate(self) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        debug!(min = ?self.min, max = ?self.max, "padding degenerate bounds");
        let pad = Vector3D::new(DEGENERATE_PAD, DEGENERATE_PAD, DEGENERATE_PAD);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points() {
        assert_eq!(BoundingBox3D::from_points(&[]), None);
    }

    #[test]
    fn test_from_points() {
        let points = [
            Point3D::new(-1.5, -1.5, 0.0),
            Point3D::new(0.0, 1.5, 0.0),
            Point3D::new(1.5, -1.5, 0.0),
            Point3D::new(0.0, -1.5, -1.0),
        ];
        let bounds = BoundingBox3D::from_points(&points).unwrap();
        assert_eq!(bounds.min, Point3D::new(-1.5, -1.5, -1.0));
        assert_eq!(bounds.max, Point3D::new(1.5, 1.5, 0.0));
        assert!(points.iter().all(|p| bounds.contains(*p)));
        assert_eq!(bounds.size(), Vector3D::new(3.0, 3.0, 1.0));
        assert_eq!(bounds.center(), Point3D::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn test_new_orders_corners() {
        let b = BoundingBox3D::new(Point3D::new(1.0, -1.0, 2.0), Point3D::new(-1.0, 1.0, 0.0));
        assert_eq!(b.min, Point3D::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Point3D::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_union() {
        let a = BoundingBox3D::from_point(Point3D::new(0.0, 0.0, 0.0));
        let b = BoundingBox3D::from_point(Point3D::new(1.0, 2.0, 3.0));
        let u = a.union(b);
        assert!(u.contains(Point3D::new(0.5, 1.0, 1.5)));
        assert!(!u.contains(Point3D::new(0.5, 1.0, 3.5)));
    }

    #[test]
    fn test_degenerate_padding() {
        let p = Point3D::new(1.0, 1.0, 1.0);
        let padded = BoundingBox3D::from_point(p).padded_if_degenerate();
        assert!(!padded.is_degenerate());
        assert!(padded.contains(p));
        assert!((padded.size().x - 2.0 * DEGENERATE_PAD).abs() < 1e-6);

        // a flat but non-degenerate box is left alone
        let flat = BoundingBox3D::new(Point3D::origin(), Point3D::new(1.0, 1.0, 0.0));
        assert_eq!(flat.padded_if_degenerate(), flat);
    }
}
