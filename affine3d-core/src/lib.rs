//! affine3d Core Library - Affine math for 3D scene construction
//!
//! Stateless value types (vectors, points, homogeneous points, 4x4 matrices)
//! and the operators over them, plus the small helpers scene code builds on:
//! bounding boxes, planar UVs and box descriptions.

pub mod approx_eq;
pub mod bounds;
pub mod box_data;
pub mod error;
pub mod matrix;
pub mod param;
pub mod parse;
pub mod point;
pub mod rational;
pub mod scalar;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use bounds::BoundingBox3D;
pub use box_data::BoxData;
pub use error::{MathError, MathResult};
pub use matrix::Matrix4x4;
pub use param::{uvs_from_points, Param2D};
pub use point::{Point2D, Point3D};
pub use rational::RationalPoint4D;
pub use scalar::{degrees_to_radians, radians_to_degrees};
pub use transform::RotationXYZ;
pub use vector::{Vector2D, Vector3D};
