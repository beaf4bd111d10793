//! Geometry engine seam
//!
//! The registry never builds collision solids itself. It asks a
//! [`GeometryEngine`] for a [`MeshHandle`], streams points and index triples
//! into it, and finally asks the handle for a [`CollisionEntity`].

use super::entity::CollisionEntity;
use crate::foundation::math::Point3;
use thiserror::Error;

/// Failures reported by a geometry engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A triangle references a vertex rank that does not exist
    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        /// Rank of the offending triangle
        triangle: usize,
        /// The out-of-range vertex rank
        index: usize,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },

    /// The engine refuses to finalize a mesh without triangles
    #[error("mesh {name} has no triangles")]
    EmptyMesh {
        /// Mesh name
        name: String,
    },

    /// Any other engine-specific refusal
    #[error("geometry engine rejected the request: {0}")]
    Rejected(String),
}

/// An open, growable mesh owned by a geometry engine
pub trait MeshHandle: Send + Sync {
    /// Append a vertex and return its rank
    fn append_vertex(&mut self, point: Point3) -> usize;

    /// Append an index triple and return its rank
    fn append_triangle(&mut self, indices: [usize; 3]) -> usize;

    /// Number of vertices appended so far
    fn vertex_count(&self) -> usize;

    /// Number of triangles appended so far
    fn triangle_count(&self) -> usize;

    /// Build the collision solid
    ///
    /// On success the handle is spent and may have moved its buffers into
    /// the entity. On failure it must be left exactly as it was.
    fn finalize(&mut self) -> Result<CollisionEntity, GeometryError>;
}

/// Factory for open meshes
pub trait GeometryEngine: Send + Sync {
    /// Allocate a new empty mesh
    fn create_mesh(&self, name: &str) -> Result<Box<dyn MeshHandle>, GeometryError>;
}
