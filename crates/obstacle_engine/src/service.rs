//! Obstacle service
//!
//! Owns the polyhedron registry, the collision list registry, the geometry
//! engine and the planner's live obstacle set, and implements every
//! registry operation on top of them.
//!
//! # Locking
//!
//! - Registry maps are locked only for lookup and insertion.
//! - Each body serializes its own geometry appends and finalization, so a
//!   long finalization never blocks the registries.
//! - The obstacle sink lock is held across scan-then-mutate (`reposition`)
//!   and across place-then-install, so neither can act on a stale view.
//!
//! Every rejected operation logs one `warn!` line before returning the error.

use crate::core::config::{RegistryConfig, ServiceConfig};
use crate::error::{ObjectKind, RegistryError, RegistryResult};
use crate::foundation::math::Point3;
use crate::foundation::sync;
use crate::geometry::{CollisionEntity, GeometryEngine, Transform, TriangleMeshEngine};
use crate::obstacles::obstacle::find_body;
use crate::obstacles::{ForeignObstacle, Obstacle, ObstacleSet, ObstacleSink};
use crate::registry::{BodyHandle, BodyRegistry, CollisionList, CollisionListRegistry};
use std::sync::{Arc, Mutex};

/// Registry of named polyhedra, collision lists and live obstacles
pub struct ObstacleService {
    config: RegistryConfig,
    engine: Box<dyn GeometryEngine>,
    bodies: BodyRegistry,
    lists: CollisionListRegistry,
    sink: Mutex<Box<dyn ObstacleSink>>,
}

impl ObstacleService {
    /// Create a service with the built-in triangle engine and obstacle set
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_collaborators(
            config,
            Box::new(TriangleMeshEngine::new()),
            Box::new(ObstacleSet::new()),
        )
    }

    /// Create a service around external collaborators
    pub fn with_collaborators(
        config: &ServiceConfig,
        engine: Box<dyn GeometryEngine>,
        sink: Box<dyn ObstacleSink>,
    ) -> Self {
        let capacity = config.registry.expected_polyhedra;
        log::info!(
            "Creating obstacle service (eager index validation: {})",
            config.registry.validate_triangle_indices
        );

        Self {
            config: config.registry.clone(),
            engine,
            bodies: BodyRegistry::new(capacity),
            lists: CollisionListRegistry::new(capacity),
            sink: Mutex::new(sink),
        }
    }

    /// Registry policies in effect
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn rejected(error: RegistryError) -> RegistryError {
        log::warn!("{}", error);
        error
    }

    fn trace_bodies(&self, operation: &str) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "{}: {} polyhedra registered: {:?}",
                operation,
                self.bodies.len(),
                self.bodies.names()
            );
        }
    }

    // ------------------------------------------------------------------
    // Mesh construction
    // ------------------------------------------------------------------

    /// Register a new, empty, open polyhedron
    pub fn create_polyhedron(&self, name: &str) -> RegistryResult<()> {
        self.bodies
            .create("create_polyhedron", name, self.engine.as_ref())
            .map_err(Self::rejected)?;
        log::debug!("Created polyhedron {}", name);
        Ok(())
    }

    /// Append a vertex, returning its rank
    ///
    /// Coordinates are not validated.
    pub fn add_point(&self, name: &str, x: f64, y: f64, z: f64) -> RegistryResult<usize> {
        const OPERATION: &str = "add_point";
        self.trace_bodies(OPERATION);
        let body = self.bodies.get(OPERATION, name).map_err(Self::rejected)?;
        body.add_point(OPERATION, Point3::new(x, y, z)).map_err(Self::rejected)
    }

    /// Append a triangle, returning its rank
    ///
    /// Indices are checked against the vertices appended so far when eager
    /// validation is configured; otherwise the engine checks them at
    /// finalization.
    pub fn add_triangle(&self, name: &str, indices: [usize; 3]) -> RegistryResult<usize> {
        const OPERATION: &str = "add_triangle";
        self.trace_bodies(OPERATION);
        let body = self.bodies.get(OPERATION, name).map_err(Self::rejected)?;
        body.add_triangle(OPERATION, indices, self.config.validate_triangle_indices)
            .map_err(Self::rejected)
    }

    /// Build the collision entity of an open polyhedron
    pub fn finalize(&self, name: &str) -> RegistryResult<Arc<CollisionEntity>> {
        const OPERATION: &str = "finalize";
        let body = self.bodies.get(OPERATION, name).map_err(Self::rejected)?;
        body.finalize(OPERATION).map_err(Self::rejected)
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Install a polyhedron as an obstacle with its current placement
    pub fn install(&self, name: &str) -> RegistryResult<()> {
        const OPERATION: &str = "install";
        let body = self.bodies.get(OPERATION, name).map_err(Self::rejected)?;
        body.ensure_finalized(OPERATION).map_err(Self::rejected)?;

        sync::lock(&self.sink).add_obstacle(Obstacle::Body(body));
        log::debug!("Installed obstacle {}", name);
        Ok(())
    }

    /// Place a polyhedron and install it as an obstacle
    ///
    /// Always appends; installing the same polyhedron twice yields two live
    /// entries sharing one placement.
    pub fn place_and_install(&self, name: &str, transform: Transform) -> RegistryResult<()> {
        const OPERATION: &str = "place_and_install";
        let body = self.bodies.get(OPERATION, name).map_err(Self::rejected)?;
        body.ensure_finalized(OPERATION).map_err(Self::rejected)?;

        let mut sink = sync::lock(&self.sink);
        body.set_transform(transform);
        sink.add_obstacle(Obstacle::Body(body));
        log::debug!("Installed obstacle {} at {:?}", name, transform.translation());
        Ok(())
    }

    /// Move an obstacle that is already installed
    ///
    /// Searches the live obstacle set, not the polyhedron registry: a
    /// registered but never installed polyhedron is `NotFound`.
    pub fn reposition(&self, name: &str, transform: Transform) -> RegistryResult<()> {
        const OPERATION: &str = "reposition";
        let sink = sync::lock(&self.sink);

        let body = find_body(sink.obstacles(), name)
            .ok_or_else(|| Self::rejected(RegistryError::not_found(OPERATION, ObjectKind::Obstacle, name)))?;
        body.set_transform(transform);
        log::debug!("Obstacle {} found in the obstacle set, moved to {:?}", name, transform.translation());
        Ok(())
    }

    /// Install an obstacle that is not a registered polyhedron
    pub fn install_foreign(&self, obstacle: ForeignObstacle) {
        log::debug!("Installed foreign obstacle {}", obstacle.label());
        sync::lock(&self.sink).add_obstacle(Obstacle::Foreign(obstacle));
    }

    // ------------------------------------------------------------------
    // Collision lists
    // ------------------------------------------------------------------

    /// Register a new, empty collision list
    pub fn create_list(&self, name: &str) -> RegistryResult<()> {
        self.lists.create("create_list", name).map_err(Self::rejected)?;
        log::debug!("Created collision list {}", name);
        Ok(())
    }

    /// Append a polyhedron to a collision list, finalizing it if needed
    pub fn add_body_to_list(&self, list: &str, body: &str) -> RegistryResult<()> {
        const OPERATION: &str = "add_body_to_list";
        if !self.lists.contains(list) {
            return Err(Self::rejected(RegistryError::not_found(
                OPERATION,
                ObjectKind::CollisionList,
                list,
            )));
        }
        self.trace_bodies(OPERATION);
        let handle = self.bodies.get(OPERATION, body).map_err(Self::rejected)?;
        handle.ensure_finalized(OPERATION).map_err(Self::rejected)?;

        let len = self.lists.append(OPERATION, list, handle).map_err(Self::rejected)?;
        log::debug!("Added polyhedron {} to collision list {} ({} entries)", body, list, len);
        Ok(())
    }

    /// Replace the live obstacle set with the contents of a collision list
    pub fn activate_list(&self, list: &str) -> RegistryResult<()> {
        const OPERATION: &str = "activate_list";
        let mut sink = sync::lock(&self.sink);
        let contents = self.lists.get(OPERATION, list).map_err(Self::rejected)?;

        let obstacles: Vec<Obstacle> = contents.bodies().iter().cloned().map(Obstacle::Body).collect();
        log::debug!("Activating collision list {} ({} obstacles)", list, obstacles.len());
        sink.set_obstacles(obstacles);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Registered polyhedron
    pub fn body(&self, name: &str) -> Option<BodyHandle> {
        self.bodies.find(name)
    }

    /// Whether a polyhedron is registered under `name`
    pub fn contains_body(&self, name: &str) -> bool {
        self.bodies.contains(name)
    }

    /// Registered polyhedron names, sorted
    pub fn body_names(&self) -> Vec<String> {
        self.bodies.names()
    }

    /// Whether a polyhedron has been finalized
    pub fn is_finalized(&self, name: &str) -> RegistryResult<bool> {
        let body = self.bodies.get("is_finalized", name).map_err(Self::rejected)?;
        Ok(body.is_finalized())
    }

    /// Snapshot of a collision list
    pub fn list(&self, name: &str) -> Option<CollisionList> {
        self.lists.find(name)
    }

    /// Whether a collision list is registered under `name`
    pub fn contains_list(&self, name: &str) -> bool {
        self.lists.contains(name)
    }

    /// Registered collision list names, sorted
    pub fn list_names(&self) -> Vec<String> {
        self.lists.names()
    }

    /// Snapshot of the live obstacle set
    pub fn obstacles(&self) -> Vec<Obstacle> {
        sync::lock(&self.sink).obstacles().to_vec()
    }

    /// Names of the live obstacles in order
    pub fn obstacle_names(&self) -> Vec<String> {
        self.obstacles().iter().map(|o| o.name().to_string()).collect()
    }
}

impl Default for ObstacleService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}
