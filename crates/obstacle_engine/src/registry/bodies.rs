//! Polyhedron registry
//!
//! Maps unique names to bodies. Names are never overwritten and lookups
//! never create entries.

use super::body::{Body, BodyHandle};
use crate::error::{ObjectKind, RegistryError, RegistryResult};
use crate::foundation::sync;
use crate::geometry::{GeometryEngine, GeometryError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

/// Name-keyed store of bodies
pub struct BodyRegistry {
    bodies: RwLock<HashMap<String, BodyHandle>>,
}

impl BodyRegistry {
    /// Create an empty registry
    pub fn new(capacity: usize) -> Self {
        Self {
            bodies: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Register a new open body under `name`
    ///
    /// The engine is asked for a mesh only once the name is known to be
    /// free, so a rejected create leaves both the registry and the engine
    /// untouched.
    pub fn create(
        &self,
        operation: &'static str,
        name: &str,
        engine: &dyn GeometryEngine,
    ) -> RegistryResult<BodyHandle> {
        let mut bodies = sync::write(&self.bodies);
        match bodies.entry(name.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::already_exists(operation, ObjectKind::Polyhedron, name)),
            Entry::Vacant(slot) => {
                let handle = engine.create_mesh(name).map_err(|source: GeometryError| {
                    RegistryError::Geometry { operation, name: name.to_string(), source }
                })?;
                let body = Arc::new(Body::new(name, handle));
                slot.insert(Arc::clone(&body));
                Ok(body)
            }
        }
    }

    /// Look up a body, failing with `NotFound`
    pub fn get(&self, operation: &'static str, name: &str) -> RegistryResult<BodyHandle> {
        self.find(name)
            .ok_or_else(|| RegistryError::not_found(operation, ObjectKind::Polyhedron, name))
    }

    /// Look up a body
    pub fn find(&self, name: &str) -> Option<BodyHandle> {
        sync::read(&self.bodies).get(name).cloned()
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        sync::read(&self.bodies).contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = sync::read(&self.bodies).keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered bodies
    pub fn len(&self) -> usize {
        sync::read(&self.bodies).len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new(0)
    }
}
