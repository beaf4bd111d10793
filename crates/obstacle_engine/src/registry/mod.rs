//! Name-keyed registries
//!
//! - [`mesh_builder`] - Open/finalized state of one growable mesh
//! - [`body`] - Named placed solid shared by registries and obstacle sets
//! - [`bodies`] - Polyhedron registry (name → body)
//! - [`collision_list`] - Named, ordered groups of bodies

pub mod mesh_builder;
pub mod body;
pub mod bodies;
pub mod collision_list;

pub use mesh_builder::MeshBuilder;
pub use body::{Body, BodyHandle};
pub use bodies::BodyRegistry;
pub use collision_list::{CollisionList, CollisionListRegistry};
