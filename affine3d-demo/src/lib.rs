/// Demo geometry built with the affine3d math types
///
/// Two static shapes: a box rotated so all faces are visible, and a small
/// four-point triangle mesh with per-vertex colours and planar UVs.
use affine3d_core::{uvs_from_points, BoundingBox3D, BoxData, Param2D, Point3D, RotationXYZ, Vector3D};
use std::fmt;
use tracing::debug;

/// An RGB colour with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRGB {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Box geometry plus one colour per face
#[derive(Debug, Clone)]
pub struct DemoBox {
    pub data: BoxData,
    pub face_colors: [ColorRGB; 6],
}

/// Indexed triangle mesh with per-vertex attributes
#[derive(Debug, Clone)]
pub struct TriMesh {
    pub points: Vec<Point3D>,
    pub triangles: Vec<[usize; 3]>,
    pub vertex_colors: Vec<ColorRGB>,
    pub vertex_uvs: Vec<Param2D>,
    pub bounds: Option<BoundingBox3D>,
}

impl TriMesh {
    /// Build a mesh, deriving UVs and bounds from the points
    pub fn new(points: Vec<Point3D>, triangles: Vec<[usize; 3]>, vertex_colors: Vec<ColorRGB>) -> Self {
        let vertex_uvs = uvs_from_points(&points);
        let bounds = BoundingBox3D::from_points(&points);
        Self {
            points,
            triangles,
            vertex_colors,
            vertex_uvs,
            bounds,
        }
    }

    /// Unit normal of a triangle, wound counter-clockwise.
    ///
    /// Returns `None` if the triangle refers to a point the mesh doesn't have.
    pub fn face_normal(&self, triangle: usize) -> Option<Vector3D> {
        let [a, b, c] = *self.triangles.get(triangle)?;
        let (p0, p1, p2) = (*self.points.get(a)?, *self.points.get(b)?, *self.points.get(c)?);

        let edge1 = p1 - p0;
        let edge2 = p2 - p0;
        Some(edge1.cross(edge2).normalize())
    }
}

/// The rotated, face-coloured box
pub fn demo_box() -> DemoBox {
    let face_colors = [
        ColorRGB::new(1.0, 0.0, 0.0),
        ColorRGB::new(0.0, 1.0, 0.0),
        ColorRGB::new(0.0, 0.0, 1.0),
        ColorRGB::new(1.0, 1.0, 0.0),
        ColorRGB::new(1.0, 0.0, 1.0),
        ColorRGB::new(0.0, 1.0, 1.0),
    ];

    let data = BoxData::new(
        Point3D::new(-0.5, -1.0, 0.5),
        Vector3D::new(0.0, 2.0, 0.0),
        Vector3D::new(0.0, 0.0, 1.0),
        Vector3D::new(1.0, 0.0, 0.0),
    );

    // Rotate it so that we can see all the faces
    let rotation = RotationXYZ::from_degrees(45.0, 45.0, 45.0);
    let data = data.transform_axes(&rotation.matrix());
    debug!(?data, "built demo box");

    DemoBox { data, face_colors }
}

/// The four-point, two-triangle mesh
pub fn demo_tri_mesh() -> TriMesh {
    let points = vec![
        Point3D::new(-1.5, -1.5, 0.0),
        Point3D::new(0.0, 1.5, 0.0),
        Point3D::new(1.5, -1.5, 0.0),
        Point3D::new(0.0, -1.5, -1.0),
    ];
    let colors = vec![
        ColorRGB::new(1.0, 0.0, 0.0),
        ColorRGB::new(0.0, 1.0, 0.0),
        ColorRGB::new(0.0, 0.0, 1.0),
        ColorRGB::new(1.0, 1.0, 0.0),
    ];
    let mesh = TriMesh::new(points, vec![[1, 0, 3], [3, 2, 1]], colors);
    debug!(bounds = ?mesh.bounds, "built demo tri mesh");
    mesh
}

/// Axis-aligned box outlining `points`, padded if they occupy no volume
pub fn bounds_box(points: &[Point3D]) -> Option<BoxData> {
    let bounds = BoundingBox3D::from_points(points)?.padded_if_degenerate();
    Some(BoxData::from_bounds(&bounds))
}

/// Plain-text summary of the demo scene
pub struct Report {
    pub demo_box: DemoBox,
    pub mesh: TriMesh,
    pub mesh_outline: Option<BoxData>,
}

impl Report {
    pub fn build() -> Self {
        let demo_box = demo_box();
        let mesh = demo_tri_mesh();
        let mesh_outline = bounds_box(&mesh.points);
        Self {
            demo_box,
            mesh,
            mesh_outline,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.demo_box.data;
        writeln!(f, "Box")?;
        writeln!(f, "  origin      {}", b.origin)?;
        writeln!(f, "  orientation {}", b.orientation)?;
        writeln!(f, "  major axis  {}", b.major_axis)?;
        writeln!(f, "  minor axis  {}", b.minor_axis)?;
        writeln!(f, "  volume      {:.4}", b.volume())?;

        writeln!(f, "TriMesh")?;
        for (i, (p, uv)) in self.mesh.points.iter().zip(&self.mesh.vertex_uvs).enumerate() {
            writeln!(f, "  point {i}  {p}  uv {uv}")?;
        }
        for i in 0..self.mesh.triangles.len() {
            if let Some(n) = self.mesh.face_normal(i) {
                writeln!(f, "  normal {i} {n}")?;
            }
        }
        if let Some(bounds) = &self.mesh.bounds {
            writeln!(f, "  bounds      {} .. {}", bounds.min, bounds.max)?;
        }
        if let Some(outline) = &self.mesh_outline {
            writeln!(f, "  outline     {} + {} {} {}", outline.origin, outline.minor_axis, outline.orientation, outline.major_axis)?;
        }
        Ok(())
    }
}
