//! Engine rules and default tuning parameters.

// --- Engine rules ---

/// Lowest firepower the engine accepts.
pub const MIN_FIRE_POWER: f64 = 0.1;

/// Highest firepower the engine accepts.
pub const MAX_FIRE_POWER: f64 = 3.0;

/// Bullet speed at zero firepower (units per tick).
pub const BULLET_BASE_SPEED: f64 = 20.0;

/// Bullet speed lost per unit of firepower.
pub const BULLET_SPEED_PER_POWER: f64 = 3.0;

/// Maximum body speed (units per tick).
pub const MAX_BOT_SPEED: f64 = 8.0;

// --- Mode selection ---

/// Own energy below which the agent goes defensive.
pub const LOW_ENERGY_THRESHOLD: f64 = 30.0;

// --- Offensive strafe ---

/// Preferred standoff distance to the tracked target.
pub const TRACKING_DISTANCE: f64 = 150.0;

/// Half-width of the standoff band.
pub const TRACKING_TOLERANCE: f64 = 20.0;

/// Largest single approach/retreat step when outside the standoff band.
pub const MAX_APPROACH_STEP: f64 = 100.0;

/// Distance advanced per strafe command.
pub const STRAFE_STEP: f64 = 70.0;

// --- Defensive wave ---

/// Peak heading offset of the wave (degrees).
pub const WAVE_AMPLITUDE: f64 = 60.0;

/// Phase divisor of the wave; larger means longer waves.
pub const WAVE_PERIOD: f64 = 40.0;

/// Distance advanced per wave step.
pub const WAVE_STEP: f64 = 5.0;

/// Maximum wave steps per invocation before re-seeking a side.
pub const WAVE_MAX_MOVES: u32 = 50;

/// Extra slack around the padded rectangle tolerated while waving.
pub const WAVE_BOUNDS_SLACK: f64 = 3.0;

// --- Arena boundary ---

/// Margin between the arena walls and the padded rectangle.
pub const ARENA_PADDING: f64 = 30.0;

/// Distance advanced inward after leaving the padded rectangle.
pub const BOUNDARY_RECOVERY_DISTANCE: f64 = 40.0;

/// Distance advanced inward after hitting a wall in defensive mode.
pub const WALL_RETREAT_DISTANCE: f64 = 50.0;

/// Distance to a padded edge that counts as touching it on a wall hit.
pub const WALL_PROXIMITY: f64 = 5.0;

/// Anchors closer than this are treated as already reached.
pub const ANCHOR_REACHED_EPSILON: f64 = 0.001;

/// Heading error (degrees) tolerated by the perimeter patrol before re-squaring.
pub const PATROL_AXIS_TOLERANCE: f64 = 1.0;

// --- Fire control ---

/// Targets beyond this distance are tracked but never fired upon.
pub const MAX_SHOOTING_DISTANCE: f64 = 500.0;

/// Confidence that must be exceeded before firing.
pub const MIN_FIRE_CONFIDENCE: f64 = 0.3;

/// Distance under which a target is point-blank.
pub const POINT_BLANK_DISTANCE: f64 = 50.0;

/// Fixed confidence for point-blank targets.
pub const POINT_BLANK_CONFIDENCE: f64 = 0.95;

/// Gun bearing error tolerated at point blank (degrees).
pub const POINT_BLANK_TOLERANCE: f64 = 25.0;

/// Gun bearing error tolerated at full confidence beyond point blank (degrees).
pub const BASE_ANGLE_TOLERANCE: f64 = 15.0;

/// Distance at which the distance factor of the confidence reaches zero.
pub const CONFIDENCE_RANGE: f64 = 1000.0;

/// Target speed at which the speed factor saturates.
pub const CONFIDENCE_SPEED_CAP: f64 = 8.0;

/// Divisor of the speed factor.
pub const CONFIDENCE_SPEED_SCALE: f64 = 16.0;

/// Gun error (degrees) at which the gun-turn factor saturates.
pub const CONFIDENCE_GUN_TURN_CAP: f64 = 45.0;

/// Divisor of the gun-turn factor.
pub const CONFIDENCE_GUN_TURN_SCALE: f64 = 120.0;

/// Lower bound of the confidence scaling applied to shot power.
pub const MIN_POWER_SCALE: f64 = 0.8;

/// Energy lead over the target that triggers maximum power.
pub const DOMINANCE_MARGIN: f64 = 30.0;

/// Target energy under which a finishing shot is attempted.
pub const FINISHING_ENERGY: f64 = 16.0;

/// Observations older than this many ticks are never fired upon.
pub const STALE_TARGET_TICKS: u64 = 16;

/// Radar overcorrection factor while locked on a target.
pub const RADAR_LOCK_GAIN: f64 = 2.0;

/// Radar turn requested each tick while searching (one full rotation).
pub const RADAR_SEARCH_TURN: f64 = 360.0;

/// Ticks the gun keeps slewing toward a bot that collided with us.
pub const RAM_RESPONSE_TICKS: u32 = 8;
