//! Registry error kinds
//!
//! Every failure is reported synchronously and leaves the registries
//! unchanged. Each variant names the operation and the object so the
//! status-code surface can log a useful line before collapsing it to `-1`.

use crate::geometry::{GeometryError, TransformError};
use std::fmt;
use thiserror::Error;

/// What kind of named object an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Entry of the polyhedron registry
    Polyhedron,
    /// Entry of the collision list registry
    CollisionList,
    /// Entry of the live obstacle collection
    Obstacle,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Polyhedron => "polyhedron",
            Self::CollisionList => "collision list",
            Self::Obstacle => "obstacle",
        };
        f.write_str(label)
    }
}

/// Registry operation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Referenced name is absent from the relevant registry or collection
    #[error("{operation}: {kind} {name} does not exist")]
    NotFound {
        /// Operation that failed
        operation: &'static str,
        /// Registry that was searched
        kind: ObjectKind,
        /// Name that was looked up
        name: String,
    },

    /// Name collision on create
    #[error("{operation}: {kind} {name} already exists")]
    AlreadyExists {
        /// Operation that failed
        operation: &'static str,
        /// Registry that holds the name
        kind: ObjectKind,
        /// Colliding name
        name: String,
    },

    /// Geometry appended to, or explicit finalize of, a finalized polyhedron
    #[error("{operation}: polyhedron {name} is already finalized")]
    AlreadyFinalized {
        /// Operation that failed
        operation: &'static str,
        /// Polyhedron name
        name: String,
    },

    /// Triangle references a vertex rank not yet appended
    #[error("{operation}: polyhedron {name} has {vertex_count} vertices, index {index} is out of range")]
    OutOfRange {
        /// Operation that failed
        operation: &'static str,
        /// Polyhedron name
        name: String,
        /// Offending vertex rank
        index: i64,
        /// Vertices appended so far
        vertex_count: usize,
    },

    /// Placement matrix is not a finite affine transform
    #[error("{operation}: invalid placement: {source}")]
    InvalidTransform {
        /// Operation that failed
        operation: &'static str,
        /// Underlying matrix problem
        #[source]
        source: TransformError,
    },

    /// The geometry engine refused the request
    #[error("{operation}: polyhedron {name}: {source}")]
    Geometry {
        /// Operation that failed
        operation: &'static str,
        /// Polyhedron name
        name: String,
        /// Engine failure
        #[source]
        source: GeometryError,
    },
}

impl RegistryError {
    /// Status code reported through the remote surface
    pub fn status(&self) -> i16 {
        -1
    }

    /// Operation that produced this error
    pub fn operation(&self) -> &'static str {
        match self {
            Self::NotFound { operation, .. }
            | Self::AlreadyExists { operation, .. }
            | Self::AlreadyFinalized { operation, .. }
            | Self::OutOfRange { operation, .. }
            | Self::InvalidTransform { operation, .. }
            | Self::Geometry { operation, .. } => operation,
        }
    }

    pub(crate) fn not_found(operation: &'static str, kind: ObjectKind, name: &str) -> Self {
        Self::NotFound { operation, kind, name: name.to_string() }
    }

    pub(crate) fn already_exists(operation: &'static str, kind: ObjectKind, name: &str) -> Self {
        Self::AlreadyExists { operation, kind, name: name.to_string() }
    }

    /// Whether this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this is an `AlreadyExists` error
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

/// Result alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
