//! Live obstacle collection
//!
//! - [`obstacle`] - Closed set of obstacle kinds the planner can hold
//! - [`sink`] - Planner-side obstacle set collaborator

pub mod obstacle;
pub mod sink;

pub use obstacle::{ForeignObstacle, Obstacle};
pub use sink::{ObstacleSet, ObstacleSink};
