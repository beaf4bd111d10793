//! Obstacle geometry
//!
//! Placement transforms and the geometry engine seam that turns
//! incrementally built point/triangle sequences into collision-ready solids.
//!
//! # Architecture
//!
//! - **Model Space Storage**: finalized solids keep their local coordinates
//! - **On-Demand Transformation**: world-space vertices are produced from a
//!   [`Transform`] only when a consumer asks for them
//!
//! # Module Organization
//!
//! - [`transform`] - Rigid 4x4 homogeneous placement
//! - [`engine`] - Geometry engine and mesh handle traits
//! - [`entity`] - Finalized collision entity
//! - [`triangle_mesh`] - Default in-process triangle mesh engine

pub mod transform;
pub mod engine;
pub mod entity;
pub mod triangle_mesh;

// Re-export commonly used types
pub use transform::{Transform, TransformError};
pub use engine::{GeometryEngine, GeometryError, MeshHandle};
pub use entity::{CollisionEntity, WorldSpaceEntity};
pub use triangle_mesh::{TriangleMeshEngine, TriangleMeshHandle};
