//! Obstacle kinds
//!
//! The planner's obstacle set may contain entries installed by other
//! subsystems. Name lookups only consider [`Obstacle::Body`] entries and
//! skip everything else.

use crate::registry::BodyHandle;

/// Obstacle installed by something other than the polyhedron registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignObstacle {
    label: String,
}

impl ForeignObstacle {
    /// Create a foreign entry with a descriptive label
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    /// Descriptive label
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One entry of the live obstacle collection
#[derive(Debug, Clone)]
pub enum Obstacle {
    /// A registered body
    Body(BodyHandle),
    /// Any other kind of obstacle
    Foreign(ForeignObstacle),
}

impl Obstacle {
    /// The body behind this entry, if it is one
    pub fn as_body(&self) -> Option<&BodyHandle> {
        match self {
            Self::Body(body) => Some(body),
            Self::Foreign(_) => None,
        }
    }

    /// Body name or foreign label
    pub fn name(&self) -> &str {
        match self {
            Self::Body(body) => body.name(),
            Self::Foreign(foreign) => foreign.label(),
        }
    }
}

impl From<BodyHandle> for Obstacle {
    fn from(body: BodyHandle) -> Self {
        Self::Body(body)
    }
}

/// First body entry named `name`, skipping foreign entries
pub fn find_body<'a, I>(obstacles: I, name: &str) -> Option<&'a BodyHandle>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles
        .into_iter()
        .filter_map(|obstacle| {
            let body = obstacle.as_body();
            if body.is_none() {
                log::trace!("Skipping non-polyhedron obstacle {}", obstacle.name());
            }
            body
        })
        .find(|body| body.name() == name)
}
