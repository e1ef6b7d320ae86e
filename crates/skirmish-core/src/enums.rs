//! Enumeration types used throughout the agent.

use serde::{Deserialize, Serialize};

/// Movement posture chosen from own energy each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementMode {
    /// Engage: strafe the tracked target at a standoff distance.
    #[default]
    Offensive,
    /// Evade: wave along the padded rectangle edges.
    Defensive,
}

/// Movement planner state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannerState {
    /// Travelling to a corner or mid-side reference point.
    #[default]
    ApproachAnchor,
    /// Orbiting the tracked target inside the standoff band.
    OffensiveStrafe,
    /// Offensive without a target: clockwise perimeter patrol.
    EdgePatrol,
    /// Sinusoidal advance along the padded rectangle.
    DefensiveWave,
    /// Turning back inside after leaving the padded rectangle or hitting a wall.
    BoundaryRecovery,
}

/// One edge of the padded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

/// Corner of the padded rectangle, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopLeft,
        Corner::TopRight,
    ];

    /// Heading to hold once the corner is reached so that the patrol runs clockwise.
    pub fn patrol_heading(self) -> f64 {
        match self {
            Corner::BottomLeft => 90.0,
            Corner::BottomRight => 180.0,
            Corner::TopRight => 270.0,
            Corner::TopLeft => 0.0,
        }
    }
}

/// Mid-point of one side of the padded rectangle, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    /// Diagonal heading to hold once the mid-side point is reached.
    pub fn wave_heading(self) -> f64 {
        match self {
            Side::Left => 45.0,
            Side::Right => 225.0,
            Side::Bottom => 135.0,
            Side::Top => 315.0,
        }
    }
}
