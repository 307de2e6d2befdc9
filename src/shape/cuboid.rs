use crate::generator::VertexGenerator;
use crate::math::{Point3, Vector3};

/// A parallelepiped in 3D space, spanned by three direction vectors from
/// an offset point.
#[derive(Debug, Clone)]
pub struct Cuboid {
    offset: Point3,
    directions: [Vector3; 3],
}

impl Cuboid {
    /// Number of independent direction vectors spanning this shape.
    pub const INDEPENDENT_VECTORS: usize = 3;

    /// Creates a cuboid from an offset and three direction vectors.
    #[must_use]
    pub fn new(offset: Point3, u_dir: Vector3, v_dir: Vector3, w_dir: Vector3) -> Self {
        Self {
            offset,
            directions: [u_dir, v_dir, w_dir],
        }
    }

    /// Creates an axis-aligned cuboid from an offset and per-axis extents.
    #[must_use]
    pub fn axis_aligned(offset: Point3, extents: Vector3) -> Self {
        Self::new(
            offset,
            Vector3::new(extents.x, 0.0, 0.0),
            Vector3::new(0.0, extents.y, 0.0),
            Vector3::new(0.0, 0.0, extents.z),
        )
    }

    /// Returns the offset point.
    #[must_use]
    pub fn offset(&self) -> &Point3 {
        &self.offset
    }

    /// Returns the three direction vectors.
    #[must_use]
    pub fn directions(&self) -> &[Vector3; 3] {
        &self.directions
    }

    /// Computes the 8 corner vertices, in canonical subset-bitmask order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        VertexGenerator::from_parts(self.offset, self.directions.to_vec()).generate()
    }
}
