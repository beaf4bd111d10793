//! Planner obstacle set collaborator

use super::obstacle::Obstacle;

/// Receiver of the obstacle set used for live collision checks
pub trait ObstacleSink: Send {
    /// Replace the whole obstacle set
    fn set_obstacles(&mut self, obstacles: Vec<Obstacle>);

    /// Append one obstacle
    fn add_obstacle(&mut self, obstacle: Obstacle);

    /// Current obstacles in order
    fn obstacles(&self) -> &[Obstacle];
}

/// In-process obstacle set
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether no obstacle is installed
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl ObstacleSink for ObstacleSet {
    fn set_obstacles(&mut self, obstacles: Vec<Obstacle>) {
        self.obstacles = obstacles;
    }

    fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
