//! Status-code remote surface
//!
//! Wraps an [`ObstacleService`] behind the calling convention used by the
//! remote interface: commands return `0` on success and `-1` on failure,
//! geometry appends return the new rank or `-1`. Every failure is logged
//! before it is collapsed into a status.

use crate::error::{ObjectKind, RegistryError, RegistryResult};
use crate::geometry::Transform;
use crate::service::ObstacleService;
use std::sync::Arc;

/// Status returned by successful commands
pub const STATUS_OK: i16 = 0;

/// Status returned by failed commands and appends
pub const STATUS_FAILED: i16 = -1;

/// Placement as exchanged over the remote interface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Row-major 3x3 rotation
    pub rot: [f64; 9],
    /// Translation
    pub trs: [f64; 3],
}

impl Configuration {
    /// Identity placement
    pub fn identity() -> Self {
        Self {
            rot: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            trs: [0.0; 3],
        }
    }

    /// Pure translation
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self { trs: [x, y, z], ..Self::identity() }
    }

    /// Convert into a placement transform
    pub fn to_transform(&self, operation: &'static str) -> RegistryResult<Transform> {
        Transform::from_rotation_translation(&self.rot, &self.trs)
            .map_err(|source| RegistryError::InvalidTransform { operation, source })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::identity()
    }
}

fn status(result: RegistryResult<()>) -> i16 {
    match result {
        Ok(()) => STATUS_OK,
        Err(error) => {
            log::error!("{}", error);
            error.status()
        }
    }
}

fn rank_or_failure(result: RegistryResult<usize>) -> i64 {
    match result {
        Ok(rank) => i64::try_from(rank).unwrap_or(i64::MAX),
        Err(error) => {
            log::error!("{}", error);
            i64::from(error.status())
        }
    }
}

/// Remote-facing obstacle interface
#[derive(Clone)]
pub struct ObstacleServant {
    service: Arc<ObstacleService>,
}

impl ObstacleServant {
    /// Serve the given service
    pub fn new(service: Arc<ObstacleService>) -> Self {
        Self { service }
    }

    /// The underlying service
    pub fn service(&self) -> &Arc<ObstacleService> {
        &self.service
    }

    /// Make a collision list the planner's whole obstacle set
    pub fn set_obstacles(&self, list_name: &str) -> i16 {
        status(self.service.activate_list(list_name))
    }

    /// Install a polyhedron as an obstacle without changing its placement
    pub fn add_obstacle(&self, poly_name: &str) -> i16 {
        status(self.service.install(poly_name))
    }

    /// Place a polyhedron and install it as an obstacle
    pub fn add_obstacle_config(&self, poly_name: &str, cfg: &Configuration) -> i16 {
        const OPERATION: &str = "add_obstacle_config";
        status(
            cfg.to_transform(OPERATION)
                .and_then(|transform| self.service.place_and_install(poly_name, transform)),
        )
    }

    /// Move an obstacle already installed in the planner
    pub fn move_obstacle_config(&self, poly_name: &str, cfg: &Configuration) -> i16 {
        const OPERATION: &str = "move_obstacle_config";
        status(
            cfg.to_transform(OPERATION)
                .and_then(|transform| self.service.reposition(poly_name, transform)),
        )
    }

    /// Create an empty collision list
    pub fn create_collision_list(&self, list_name: &str) -> i16 {
        status(self.service.create_list(list_name))
    }

    /// Append a polyhedron to a collision list
    pub fn add_poly_to_coll_list(&self, list_name: &str, poly_name: &str) -> i16 {
        status(self.service.add_body_to_list(list_name, poly_name))
    }

    /// Create an empty polyhedron
    pub fn create_polyhedron(&self, poly_name: &str) -> i16 {
        status(self.service.create_polyhedron(poly_name))
    }

    /// Append a vertex, returning its rank or `-1`
    pub fn add_point(&self, poly_name: &str, x: f64, y: f64, z: f64) -> i64 {
        rank_or_failure(self.service.add_point(poly_name, x, y, z))
    }

    /// Append a triangle, returning its rank or `-1`
    pub fn add_triangle(&self, poly_name: &str, pt1: i64, pt2: i64, pt3: i64) -> i64 {
        let result = self
            .vertex_ranks(poly_name, [pt1, pt2, pt3])
            .and_then(|indices| self.service.add_triangle(poly_name, indices));
        rank_or_failure(result)
    }

    fn vertex_ranks(&self, poly_name: &str, indices: [i64; 3]) -> RegistryResult<[usize; 3]> {
        const OPERATION: &str = "add_triangle";
        let mut ranks = [0_usize; 3];
        for (rank, &index) in ranks.iter_mut().zip(indices.iter()) {
            *rank = match usize::try_from(index) {
                Ok(value) => value,
                Err(_) => {
                    let body = self
                        .service
                        .body(poly_name)
                        .ok_or_else(|| RegistryError::not_found(OPERATION, ObjectKind::Polyhedron, poly_name))?;
                    return Err(RegistryError::OutOfRange {
                        operation: OPERATION,
                        name: poly_name.to_string(),
                        index,
                        vertex_count: body.vertex_count(),
                    });
                }
            };
        }
        Ok(ranks)
    }
}
