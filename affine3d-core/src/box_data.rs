//! Parallelepiped described by an origin and three edge vectors
use crate::bounds::BoundingBox3D;
use crate::matrix::Matrix4x4;
use crate::point::Point3D;
use crate::vector::Vector3D;

/// A box spanned from `origin` by `orientation` (height), `major_axis`
/// (depth) and `minor_axis` (width). The axes need not be orthogonal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxData {
    pub origin: Point3D,
    pub orientation: Vector3D,
    pub major_axis: Vector3D,
    pub minor_axis: Vector3D,
}

impl BoxData {
    pub fn new(
        origin: Point3D,
        orientation: Vector3D,
        major_axis: Vector3D,
        minor_axis: Vector3D,
    ) -> Self {
        Self {
            origin,
            orientation,
            major_axis,
            minor_axis,
        }
    }

    /// Axis-aligned box covering `bounds`
    pub fn from_bounds(bounds: &BoundingBox3D) -> Self {
        let size = bounds.size();
        Self {
            origin: bounds.min,
            orientation: Vector3D::new(0.0, size.y, 0.0),
            major_axis: Vector3D::new(0.0, 0.0, size.z),
            minor_axis: Vector3D::new(size.x, 0.0, 0.0),
        }
    }

    /// Transform the origin as a point and the three axes as vectors
    pub fn transform(&self, m: &Matrix4x4) -> Self {
        Self {
            origin: self.origin.transform(m),
            orientation: self.orientation.transform(m),
            major_axis: self.major_axis.transform(m),
            minor_axis: self.minor_axis.transform(m),
        }
    }

    /// Transform only the axes, leaving the origin in place
    pub fn transform_axes(&self, m: &Matrix4x4) -> Self {
        Self {
            origin: self.origin,
            ..self.transform(m)
        }
    }

    /// The eight corners, origin first
    pub fn corners(&self) -> [Point3D; 8] {
        let o = self.origin;
        let (a, b, c) = (self.orientation, self.major_axis, self.minor_axis);
        [
            o,
            o + a,
            o + b,
            o + c,
            o + a + b,
            o + a + c,
            o + b + c,
            o + a + b + c,
        ]
    }

    pub fn volume(&self) -> f32 {
        self.orientation.dot(self.major_axis.cross(self.minor_axis)).abs()
    }

    pub fn bounds(&self) -> BoundingBox3D {
        let [first, rest @ ..] = self.corners();
        rest.into_iter()
            .fold(BoundingBox3D::from_point(first), BoundingBox3D::union_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_round_trip() {
        let bounds = BoundingBox3D::new(Point3D::new(-1.0, -2.0, -3.0), Point3D::new(1.0, 2.0, 3.0));
        let data = BoxData::from_bounds(&bounds);
        assert_eq!(data.origin, bounds.min);
        assert_eq!(data.bounds(), bounds);
        assert!((data.volume() - 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_corners() {
        let data = BoxData::new(
            Point3D::origin(),
            Vector3D::y_axis(),
            Vector3D::z_axis(),
            Vector3D::x_axis(),
        );
        let corners = data.corners();
        assert_eq!(corners[0], Point3D::origin());
        assert_eq!(corners[7], Point3D::new(1.0, 1.0, 1.0));
        assert!(corners.iter().all(|p| data.bounds().contains(*p)));
    }

    #[test]
    fn test_transform_axes_keeps_origin() {
        let data = BoxData::new(
            Point3D::new(1.0, 1.0, 1.0),
            Vector3D::y_axis(),
            Vector3D::z_axis(),
            Vector3D::x_axis(),
        );
        let shifted = data.transform(&Matrix4x4::translate(Vector3D::new(1.0, 0.0, 0.0)));
        assert_eq!(shifted.origin, Point3D::new(2.0, 1.0, 1.0));
        assert_eq!(shifted.minor_axis, Vector3D::x_axis());

        let scaled = data.transform_axes(&Matrix4x4::scale(Vector3D::new(2.0, 2.0, 2.0)));
        assert_eq!(scaled.origin, data.origin);
        assert_eq!(scaled.orientation, Vector3D::new(0.0, 2.0, 0.0));
        assert!((scaled.volume() - 8.0).abs() < 1e-5);
    }
}
