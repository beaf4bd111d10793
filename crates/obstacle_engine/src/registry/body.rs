//! Named placed solids
//!
//! A [`Body`] is shared through [`BodyHandle`] between the polyhedron
//! registry, any number of collision lists and the live obstacle set.
//! Replacing its placement through one handle is visible through all of
//! them.

use super::mesh_builder::MeshBuilder;
use crate::error::RegistryResult;
use crate::foundation::math::Point3;
use crate::foundation::sync;
use crate::geometry::{CollisionEntity, MeshHandle, Transform, WorldSpaceEntity};
use std::sync::{Arc, Mutex, RwLock};

/// Shared reference to a registered body
pub type BodyHandle = Arc<Body>;

/// A named mesh and its current world placement
pub struct Body {
    name: String,
    mesh: Mutex<MeshBuilder>,
    placement: RwLock<Option<Transform>>,
}

impl Body {
    pub(crate) fn new(name: impl Into<String>, handle: Box<dyn MeshHandle>) -> Self {
        let name = name.into();
        Self {
            mesh: Mutex::new(MeshBuilder::new(name.clone(), handle)),
            name,
            placement: RwLock::new(None),
        }
    }

    /// Unique registry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current placement, identity until one is set
    pub fn transform(&self) -> Transform {
        self.placement().unwrap_or_default()
    }

    /// Placement if one was ever set
    pub fn placement(&self) -> Option<Transform> {
        *sync::read(&self.placement)
    }

    /// Whether a placement was ever set
    pub fn is_placed(&self) -> bool {
        self.placement().is_some()
    }

    /// Whether the collision entity has been built
    pub fn is_finalized(&self) -> bool {
        sync::lock(&self.mesh).is_finalized()
    }

    /// Vertices appended so far
    pub fn vertex_count(&self) -> usize {
        sync::lock(&self.mesh).vertex_count()
    }

    /// Triangles appended so far
    pub fn triangle_count(&self) -> usize {
        sync::lock(&self.mesh).triangle_count()
    }

    /// Model-space collision entity, once finalized
    pub fn collision_entity(&self) -> Option<Arc<CollisionEntity>> {
        sync::lock(&self.mesh).entity()
    }

    /// Collision entity moved to the current placement
    pub fn world_space(&self) -> Option<WorldSpaceEntity> {
        let entity = self.collision_entity()?;
        Some(entity.to_world_space(&self.transform()))
    }

    pub(crate) fn set_transform(&self, transform: Transform) {
        *sync::write(&self.placement) = Some(transform);
    }

    pub(crate) fn add_point(&self, operation: &'static str, point: Point3) -> RegistryResult<usize> {
        sync::lock(&self.mesh).add_point(operation, point)
    }

    pub(crate) fn add_triangle(
        &self,
        operation: &'static str,
        indices: [usize; 3],
        validate: bool,
    ) -> RegistryResult<usize> {
        sync::lock(&self.mesh).add_triangle(operation, indices, validate)
    }

    pub(crate) fn finalize(&self, operation: &'static str) -> RegistryResult<Arc<CollisionEntity>> {
        sync::lock(&self.mesh).finalize(operation)
    }

    pub(crate) fn ensure_finalized(&self, operation: &'static str) -> RegistryResult<Arc<CollisionEntity>> {
        sync::lock(&self.mesh).ensure_finalized(operation)
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("name", &self.name)
            .field("mesh", &*sync::lock(&self.mesh))
            .field("placement", &self.placement())
            .finish()
    }
}
