//! Fundamental geometric types.

use serde::{Deserialize, Serialize};

use crate::geometry;

/// 2D position in arena coordinates (engine units).
/// x grows to the right (east), y grows upward (north).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        geometry::distance_to(self, other)
    }

    /// Absolute bearing to another position in degrees (0 = east, counter-clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        geometry::bearing_to(self, other)
    }

    /// The point reached by travelling `distance` along `heading`.
    pub fn project(&self, heading: f64, distance: f64) -> Position {
        let (dx, dy) = geometry::heading_vector(heading);
        Position::new(self.x + dx * distance, self.y + dy * distance)
    }
}
