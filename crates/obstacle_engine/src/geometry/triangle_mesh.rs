//! Default in-process geometry engine
//!
//! Accumulates points and index triples in plain vectors and checks every
//! index when the mesh is finalized, so a bad triangle is caught here even
//! if the registry accepted it.

use super::engine::{GeometryEngine, GeometryError, MeshHandle};
use super::entity::CollisionEntity;
use crate::foundation::math::Point3;

/// Geometry engine producing [`CollisionEntity`] triangle solids
#[derive(Debug, Clone, Default)]
pub struct TriangleMeshEngine {
    reject_empty: bool,
}

impl TriangleMeshEngine {
    /// Create an engine that accepts meshes without triangles
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to finalize meshes without triangles
    pub fn rejecting_empty_meshes(mut self) -> Self {
        self.reject_empty = true;
        self
    }
}

impl GeometryEngine for TriangleMeshEngine {
    fn create_mesh(&self, name: &str) -> Result<Box<dyn MeshHandle>, GeometryError> {
        if name.is_empty() {
            return Err(GeometryError::Rejected("mesh name cannot be empty".to_string()));
        }
        Ok(Box::new(TriangleMeshHandle::new(name, self.reject_empty)))
    }
}

/// Open triangle mesh
#[derive(Debug, Clone)]
pub struct TriangleMeshHandle {
    name: String,
    vertices: Vec<Point3>,
    triangles: Vec<[usize; 3]>,
    reject_empty: bool,
}

impl TriangleMeshHandle {
    fn new(name: &str, reject_empty: bool) -> Self {
        Self {
            name: name.to_string(),
            vertices: Vec::new(),
            triangles: Vec::new(),
            reject_empty,
        }
    }

    fn check_indices(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(GeometryError::IndexOutOfRange { triangle, index, vertex_count });
            }
        }
        Ok(())
    }
}

impl MeshHandle for TriangleMeshHandle {
    fn append_vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    fn append_triangle(&mut self, indices: [usize; 3]) -> usize {
        self.triangles.push(indices);
        self.triangles.len() - 1
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn finalize(&mut self) -> Result<CollisionEntity, GeometryError> {
        if self.reject_empty && self.triangles.is_empty() {
            return Err(GeometryError::EmptyMesh { name: self.name.clone() });
        }
        self.check_indices()?;

        Ok(CollisionEntity::new(
            self.name.clone(),
            std::mem::take(&mut self.vertices),
            std::mem::take(&mut self.triangles),
        ))
    }
}
