use crate::generator::VertexGenerator;
use crate::math::{Point3, Vector3};

/// A parallelogram in 3D space, spanned by two direction vectors from an
/// offset point.
///
/// The arity is fixed by the type, so construction cannot fail; whether
/// the two directions actually span a non-degenerate figure is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct Rectangle {
    offset: Point3,
    directions: [Vector3; 2],
}

impl Rectangle {
    /// Number of independent direction vectors spanning this shape.
    pub const INDEPENDENT_VECTORS: usize = 2;

    /// Creates a rectangle from an offset and two direction vectors.
    #[must_use]
    pub fn new(offset: Point3, u_dir: Vector3, v_dir: Vector3) -> Self {
        Self {
            offset,
            directions: [u_dir, v_dir],
        }
    }

    /// Returns the offset point.
    #[must_use]
    pub fn offset(&self) -> &Point3 {
        &self.offset
    }

    /// Returns the two direction vectors.
    #[must_use]
    pub fn directions(&self) -> &[Vector3; 2] {
        &self.directions
    }

    /// Computes the 4 corner vertices, in canonical subset-bitmask order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        VertexGenerator::from_parts(self.offset, self.directions.to_vec()).generate()
    }
}
