//! Growable mesh with finalize-once semantics
//!
//! A mesh is either open, streaming points and triangles into the geometry
//! engine's handle, or finalized, holding the immutable collision entity.
//! There is no way back from finalized.

use crate::error::{RegistryError, RegistryResult};
use crate::foundation::math::Point3;
use crate::geometry::{CollisionEntity, MeshHandle};
use std::sync::Arc;

enum MeshState {
    Open(Box<dyn MeshHandle>),
    Finalized(Arc<CollisionEntity>),
}

/// One named mesh under construction or finalized
pub struct MeshBuilder {
    name: String,
    state: MeshState,
}

impl MeshBuilder {
    /// Wrap a freshly created engine handle
    pub fn new(name: impl Into<String>, handle: Box<dyn MeshHandle>) -> Self {
        Self {
            name: name.into(),
            state: MeshState::Open(handle),
        }
    }

    /// Mesh name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the collision entity has been built
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, MeshState::Finalized(_))
    }

    /// Number of vertices, open or finalized
    pub fn vertex_count(&self) -> usize {
        match &self.state {
            MeshState::Open(handle) => handle.vertex_count(),
            MeshState::Finalized(entity) => entity.vertices().len(),
        }
    }

    /// Number of triangles, open or finalized
    pub fn triangle_count(&self) -> usize {
        match &self.state {
            MeshState::Open(handle) => handle.triangle_count(),
            MeshState::Finalized(entity) => entity.triangles().len(),
        }
    }

    /// The collision entity once finalized
    pub fn entity(&self) -> Option<Arc<CollisionEntity>> {
        match &self.state {
            MeshState::Open(_) => None,
            MeshState::Finalized(entity) => Some(Arc::clone(entity)),
        }
    }

    fn open_handle(&mut self, operation: &'static str) -> RegistryResult<&mut Box<dyn MeshHandle>> {
        match &mut self.state {
            MeshState::Open(handle) => Ok(handle),
            MeshState::Finalized(_) => Err(RegistryError::AlreadyFinalized {
                operation,
                name: self.name.clone(),
            }),
        }
    }

    /// Append a vertex, returning its rank
    pub fn add_point(&mut self, operation: &'static str, point: Point3) -> RegistryResult<usize> {
        let handle = self.open_handle(operation)?;
        Ok(handle.append_vertex(point))
    }

    /// Append a triangle, returning its rank
    ///
    /// With `validate` set, every index must name a vertex that already
    /// exists; otherwise the check is left to the engine's finalization.
    pub fn add_triangle(
        &mut self,
        operation: &'static str,
        indices: [usize; 3],
        validate: bool,
    ) -> RegistryResult<usize> {
        let name = self.name.clone();
        let handle = self.open_handle(operation)?;

        if validate {
            let vertex_count = handle.vertex_count();
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(RegistryError::OutOfRange {
                    operation,
                    name,
                    index: i64::try_from(index).unwrap_or(i64::MAX),
                    vertex_count,
                });
            }
        }

        Ok(handle.append_triangle(indices))
    }

    /// Build the collision entity, failing if that already happened
    pub fn finalize(&mut self, operation: &'static str) -> RegistryResult<Arc<CollisionEntity>> {
        let handle = self.open_handle(operation)?;
        let entity = handle.finalize().map_err(|source| RegistryError::Geometry {
            operation,
            name: self.name.clone(),
            source,
        })?;

        log::debug!(
            "Finalized polyhedron {} ({} vertices, {} triangles)",
            self.name,
            entity.vertices().len(),
            entity.triangles().len()
        );

        let entity = Arc::new(entity);
        self.state = MeshState::Finalized(Arc::clone(&entity));
        Ok(entity)
    }

    /// Build the collision entity unless it already exists
    pub fn ensure_finalized(&mut self, operation: &'static str) -> RegistryResult<Arc<CollisionEntity>> {
        if let MeshState::Finalized(entity) = &self.state {
            return Ok(Arc::clone(entity));
        }
        self.finalize(operation)
    }
}

impl std::fmt::Debug for MeshBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshBuilder")
            .field("name", &self.name)
            .field("finalized", &self.is_finalized())
            .field("vertices", &self.vertex_count())
            .field("triangles", &self.triangle_count())
            .finish()
    }
}
