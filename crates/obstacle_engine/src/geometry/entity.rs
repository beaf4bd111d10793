//! Finalized collision solids
//!
//! A [`CollisionEntity`] is stored in MODEL SPACE and never modified after
//! finalization. World-space copies are produced on demand from the owning
//! body's placement.

use super::transform::Transform;
use crate::foundation::math::{Aabb, Point3};

/// Immutable, collision-ready triangle solid in model space
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEntity {
    name: String,
    vertices: Vec<Point3>,
    triangles: Vec<[usize; 3]>,
    local_bounding_radius: f64,
    local_aabb: Option<Aabb>,
}

impl CollisionEntity {
    /// Build a solid from model-space vertices and index triples
    ///
    /// Index triples must already be validated against `vertices`.
    pub fn new(name: impl Into<String>, vertices: Vec<Point3>, triangles: Vec<[usize; 3]>) -> Self {
        // Bounding sphere around the model origin, from the furthest vertex
        let max_distance_sq = vertices
            .iter()
            .map(|v| v.coords.magnitude_squared())
            .fold(0.0_f64, f64::max);
        let local_aabb = Aabb::from_points(&vertices);

        Self {
            name: name.into(),
            vertices,
            triangles,
            local_bounding_radius: max_distance_sq.sqrt(),
            local_aabb,
        }
    }

    /// Name of the mesh this solid was built from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model-space vertices in rank order
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Index triples in rank order
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Radius of the origin-centered sphere enclosing every vertex
    pub fn local_bounding_radius(&self) -> f64 {
        self.local_bounding_radius
    }

    /// Model-space bounds, `None` when there are no vertices
    pub fn local_aabb(&self) -> Option<Aabb> {
        self.local_aabb
    }

    /// Transform to world space with the given placement
    pub fn to_world_space(&self, transform: &Transform) -> WorldSpaceEntity {
        let vertices: Vec<Point3> = self
            .vertices
            .iter()
            .map(|v| transform.transform_point(v))
            .collect();
        let aabb = Aabb::from_points(&vertices);

        WorldSpaceEntity {
            vertices,
            triangles: self.triangles.clone(),
            aabb,
        }
    }
}

/// World-space copy of a collision entity (temporary, created on demand)
#[derive(Debug, Clone)]
pub struct WorldSpaceEntity {
    /// Vertices in world space
    pub vertices: Vec<Point3>,
    /// Index triples, unchanged from the model
    pub triangles: Vec<[usize; 3]>,
    /// World-space bounds, `None` when there are no vertices
    pub aabb: Option<Aabb>,
}

impl WorldSpaceEntity {
    /// Corner points of each triangle
    pub fn triangle_points(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.triangles
            .iter()
            .map(|&[a, b, c]| [self.vertices[a], self.vertices[b], self.vertices[c]])
    }
}
