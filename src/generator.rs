use crate::error::{Result, SpanvertError};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Generates every corner vertex of the parallelogram or parallelepiped
/// spanned by a set of direction vectors from a common offset point.
///
/// Each vertex is `offset + sum of a subset of the direction vectors`;
/// with `n` directions there are `2^n` subsets and therefore `2^n`
/// vertices (4 for a parallelogram, 8 for a parallelepiped).
///
/// The generator performs no linear-independence check: collinear or
/// coplanar directions are accepted and produce a degenerate figure with
/// coincident vertices. Use [`VertexGenerator::is_degenerate`] to detect
/// that case when it matters.
#[derive(Debug, Clone)]
pub struct VertexGenerator {
    offset: Point3,
    directions: Vec<Vector3>,
}

impl VertexGenerator {
    /// Creates a generator from an offset point and direction vectors.
    ///
    /// # Errors
    ///
    /// Returns [`SpanvertError::InvalidConfiguration`] if the number of
    /// direction vectors is neither 2 nor 3.
    pub fn new(offset: Point3, directions: &[Vector3]) -> Result<Self> {
        if directions.len() != 2 && directions.len() != 3 {
            return Err(SpanvertError::InvalidConfiguration {
                count: directions.len(),
            });
        }
        Ok(Self::from_parts(offset, directions.to_vec()))
    }

    /// Constructor for callers whose types already fix the arity.
    pub(crate) fn from_parts(offset: Point3, directions: Vec<Vector3>) -> Self {
        Self { offset, directions }
    }

    /// Returns the offset point.
    #[must_use]
    pub fn offset(&self) -> &Point3 {
        &self.offset
    }

    /// Returns the direction vectors.
    #[must_use]
    pub fn directions(&self) -> &[Vector3] {
        &self.directions
    }

    /// Returns `true` if the direction vectors do not span a full
    /// parallelogram/parallelepiped (collinear pair, or coplanar triple).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match self.directions.as_slice() {
            [u, v] => u.cross(v).norm() < TOLERANCE,
            [u, v, w] => u.cross(v).dot(w).abs() < TOLERANCE,
            _ => unreachable!("arity checked at construction"),
        }
    }

    /// Computes all `2^n` corner vertices.
    ///
    /// Vertices are emitted in canonical order: subset bitmasks over the
    /// direction indices, increasing from 0 to `2^n - 1`. The first vertex
    /// is always the offset itself and the last is the offset plus every
    /// direction. Inputs are never mutated; each vertex is a fresh point.
    #[must_use]
    pub fn generate(&self) -> Vec<Point3> {
        let count = 1_usize << self.directions.len();
        let mut vertices = Vec::with_capacity(count);
        for mask in 0..count {
            let mut vertex = self.offset;
            for (i, dir) in self.directions.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    vertex += *dir;
                }
            }
            vertices.push(vertex);
        }
        vertices
    }
}
