//! # Obstacle Engine
//!
//! Server-side registry of named polyhedra used as static obstacles by a
//! motion planner's collision checker.
//!
//! ## Features
//!
//! - **Incremental Meshes**: Polyhedra are built point by point and
//!   triangle by triangle, with stable zero-based ranks
//! - **Finalize Once**: Geometry is frozen into a collision entity exactly once
//! - **Placement**: Rigid 4x4 transforms position bodies in the world frame
//! - **Collision Lists**: Named groups of bodies that can replace the live
//!   obstacle set wholesale
//! - **Live Updates**: Installed obstacles are found by name and moved
//!
//! ## Quick Start
//!
//! ```rust
//! use obstacle_engine::prelude::*;
//!
//! fn main() -> Result<(), RegistryError> {
//!     let service = ObstacleService::new(&ServiceConfig::default());
//!
//!     service.create_polyhedron("P")?;
//!     service.add_point("P", 0.0, 0.0, 0.0)?;
//!     service.add_point("P", 1.0, 0.0, 0.0)?;
//!     service.add_point("P", 0.0, 1.0, 0.0)?;
//!     service.add_triangle("P", [0, 1, 2])?;
//!
//!     service.place_and_install("P", Transform::identity())?;
//!     assert_eq!(service.obstacle_names(), vec!["P"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

// Core modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod obstacles;
pub mod service;
pub mod servant;

#[cfg(test)]
mod tests;

pub use error::{ObjectKind, RegistryError, RegistryResult};
pub use service::ObstacleService;
pub use servant::{Configuration, ObstacleServant};

/// Common imports for registry users
pub mod prelude {
    pub use crate::{
        ObstacleService, ObstacleServant, Configuration,
        RegistryError, RegistryResult, ObjectKind,
        foundation::math::{Vec3, Point3, Mat4, Aabb},
        geometry::{
            Transform, TransformError, CollisionEntity, GeometryEngine, GeometryError,
            MeshHandle, TriangleMeshEngine,
        },
        registry::{Body, BodyHandle, CollisionList},
        obstacles::{Obstacle, ForeignObstacle, ObstacleSink, ObstacleSet},
        core::config::{ServiceConfig, RegistryConfig, Config},
    };
}
