//! Per-tick state read from the engine, and the fixed arena geometry.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::enums::{Corner, Edge, Side};
use crate::types::Position;

/// Snapshot of the agent's own hull, supplied by the engine every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnState {
    /// Tick this snapshot belongs to.
    pub tick: u64,
    pub position: Position,
    /// Body heading in degrees [0, 360).
    pub heading: f64,
    /// Gun heading in degrees [0, 360).
    pub gun_heading: f64,
    /// Radar heading in degrees [0, 360).
    pub radar_heading: f64,
    /// Signed body speed (negative when reversing).
    pub speed: f64,
    /// Remaining energy; 0 means destroyed.
    pub energy: f64,
    /// Gun heat; the weapon is ready when it reaches 0.
    pub gun_heat: f64,
    /// Body turn still to be executed (degrees, positive = left).
    pub turn_remaining: f64,
    /// Travel still to be executed (signed distance).
    pub distance_remaining: f64,
}

impl OwnState {
    pub fn weapon_ready(&self) -> bool {
        self.gun_heat <= 0.0
    }
}

/// An opponent seen by a radar scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentObservation {
    pub id: u32,
    pub position: Position,
    /// Opponent body heading in degrees.
    pub heading: f64,
    /// Opponent speed (units per tick, signed).
    pub speed: f64,
    pub energy: f64,
    /// Tick at which the scan happened.
    pub tick: u64,
}

/// Edges of the padded rectangle a position has crossed or is touching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breach {
    /// Left or right edge.
    pub horizontal: Option<Edge>,
    /// Bottom or top edge.
    pub vertical: Option<Edge>,
}

impl Breach {
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> {
        self.horizontal.into_iter().chain(self.vertical)
    }
}

/// The padded rectangle the agent moves within. Immutable after setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl ArenaBounds {
    /// Derive the padded rectangle from the arena size.
    pub fn from_arena(width: f64, height: f64, padding: f64) -> Result<Self, ConfigError> {
        if padding.is_nan() || padding < 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "arena {width}x{height} with padding {padding}"
            )));
        }
        if width <= 2.0 * padding || height <= 2.0 * padding {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                padding,
            });
        }
        Ok(Self {
            left: padding,
            right: width - padding,
            bottom: padding,
            top: height - padding,
        })
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Whether `pos` lies inside the rectangle (edges included).
    pub fn contains(&self, pos: &Position) -> bool {
        self.contains_with_slack(pos, 0.0)
    }

    /// Whether `pos` lies inside the rectangle widened by `slack` on every side.
    pub fn contains_with_slack(&self, pos: &Position, slack: f64) -> bool {
        pos.x >= self.left - slack
            && pos.x <= self.right + slack
            && pos.y >= self.bottom - slack
            && pos.y <= self.top + slack
    }

    /// Edges `pos` is beyond, or within `margin` of on the inside.
    ///
    /// With `margin == 0` only strict crossings count. When both opposite
    /// edges qualify the left/bottom edge is reported.
    pub fn breach(&self, pos: &Position, margin: f64) -> Breach {
        let horizontal = if pos.x < self.left + margin {
            Some(Edge::Left)
        } else if pos.x > self.right - margin {
            Some(Edge::Right)
        } else {
            None
        };
        let vertical = if pos.y < self.bottom + margin {
            Some(Edge::Bottom)
        } else if pos.y > self.top - margin {
            Some(Edge::Top)
        } else {
            None
        };
        Breach {
            horizontal,
            vertical,
        }
    }

    /// Distance from `pos` to the line of `edge`, positive on the inside.
    pub fn inset(&self, pos: &Position, edge: Edge) -> f64 {
        match edge {
            Edge::Left => pos.x - self.left,
            Edge::Right => self.right - pos.x,
            Edge::Bottom => pos.y - self.bottom,
            Edge::Top => self.top - pos.y,
        }
    }

    pub fn corner(&self, corner: Corner) -> Position {
        match corner {
            Corner::BottomLeft => Position::new(self.left, self.bottom),
            Corner::BottomRight => Position::new(self.right, self.bottom),
            Corner::TopLeft => Position::new(self.left, self.top),
            Corner::TopRight => Position::new(self.right, self.top),
        }
    }

    pub fn side_midpoint(&self, side: Side) -> Position {
        let mid = self.center();
        match side {
            Side::Left => Position::new(self.left, mid.y),
            Side::Right => Position::new(self.right, mid.y),
            Side::Bottom => Position::new(mid.x, self.bottom),
            Side::Top => Position::new(mid.x, self.top),
        }
    }
}
