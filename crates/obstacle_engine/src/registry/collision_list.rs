//! Collision list registry
//!
//! A collision list is a named, ordered group of bodies that can later be
//! handed to the planner as its whole obstacle set. Lists only grow;
//! duplicates are kept.

use super::body::BodyHandle;
use crate::error::{ObjectKind, RegistryError, RegistryResult};
use crate::foundation::sync;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

/// Ordered group of bodies
#[derive(Debug, Clone, Default)]
pub struct CollisionList {
    bodies: Vec<BodyHandle>,
}

impl CollisionList {
    /// Bodies in insertion order
    pub fn bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Names of the entries in insertion order
    pub fn names(&self) -> Vec<String> {
        self.bodies.iter().map(|body| body.name().to_string()).collect()
    }
}

/// Name-keyed store of collision lists
pub struct CollisionListRegistry {
    lists: RwLock<HashMap<String, CollisionList>>,
}

impl CollisionListRegistry {
    /// Create an empty registry
    pub fn new(capacity: usize) -> Self {
        Self {
            lists: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Create an empty list under `name`
    pub fn create(&self, operation: &'static str, name: &str) -> RegistryResult<()> {
        match sync::write(&self.lists).entry(name.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::already_exists(operation, ObjectKind::CollisionList, name)),
            Entry::Vacant(slot) => {
                slot.insert(CollisionList::default());
                Ok(())
            }
        }
    }

    /// Append a body to the end of a list, returning the new length
    pub fn append(&self, operation: &'static str, name: &str, body: BodyHandle) -> RegistryResult<usize> {
        let mut lists = sync::write(&self.lists);
        let list = lists
            .get_mut(name)
            .ok_or_else(|| RegistryError::not_found(operation, ObjectKind::CollisionList, name))?;
        list.bodies.push(body);
        Ok(list.len())
    }

    /// Copy of a list, failing with `NotFound`
    pub fn get(&self, operation: &'static str, name: &str) -> RegistryResult<CollisionList> {
        self.find(name)
            .ok_or_else(|| RegistryError::not_found(operation, ObjectKind::CollisionList, name))
    }

    /// Copy of a list
    pub fn find(&self, name: &str) -> Option<CollisionList> {
        sync::read(&self.lists).get(name).cloned()
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        sync::read(&self.lists).contains_key(name)
    }

    /// Registered list names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = sync::read(&self.lists).keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered lists
    pub fn len(&self) -> usize {
        sync::read(&self.lists).len()
    }

    /// Whether no list is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CollisionListRegistry {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Body;
    use crate::geometry::{GeometryEngine, TriangleMeshEngine};
    use std::sync::Arc;

    fn body(name: &str) -> BodyHandle {
        Arc::new(Body::new(name, TriangleMeshEngine::new().create_mesh(name).unwrap()))
    }

    #[test]
    fn test_create_twice() {
        let lists = CollisionListRegistry::default();

        assert!(lists.create("create_list", "L").is_ok());
        let second = lists.create("create_list", "L");
        assert!(second.unwrap_err().is_already_exists());
        assert_eq!(lists.len(), 1);
        assert!(lists.find("L").unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let lists = CollisionListRegistry::default();
        lists.create("create_list", "L").unwrap();

        let a = body("a");
        let b = body("b");
        assert_eq!(lists.append("add_body_to_list", "L", Arc::clone(&a)), Ok(1));
        assert_eq!(lists.append("add_body_to_list", "L", b), Ok(2));
        assert_eq!(lists.append("add_body_to_list", "L", a), Ok(3));

        assert_eq!(lists.find("L").unwrap().names(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_append_to_unknown_list() {
        let lists = CollisionListRegistry::default();

        let result = lists.append("add_body_to_list", "missing", body("a"));
        assert!(result.unwrap_err().is_not_found());
        assert!(lists.is_empty());
    }
}
