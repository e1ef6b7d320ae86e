//! Movement planner state machine.
//!
//! Offensive mode strafes the tracked target at a standoff distance, or
//! patrols the perimeter clockwise while nothing has been seen. Defensive
//! mode seeks the nearest mid-side point and waves along the padded
//! rectangle, recovering inward whenever it leaves it.
//!
//! The planner only produces body commands (stop, turn, travel). Gun and
//! radar are handled by the agent.

use serde::{Deserialize, Serialize};
use skirmish_core::commands::TickCommands;
use skirmish_core::config::BrainConfig;
use skirmish_core::constants::{ANCHOR_REACHED_EPSILON, PATROL_AXIS_TOLERANCE};
use skirmish_core::enums::{Corner, Edge, MovementMode, PlannerState, Side};
use skirmish_core::geometry::{normalize_absolute, normalize_relative, turn_toward};
use skirmish_core::state::{ArenaBounds, Breach, OwnState};
use skirmish_core::types::Position;

use crate::maneuver::{Maneuver, ManeuverStep, Progress};
use crate::tracker::TrackedTarget;

/// Orbit direction around the target: +1 counter-clockwise, -1 clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrafeState {
    pub direction: f64,
}

impl Default for StrafeState {
    fn default() -> Self {
        Self { direction: 1.0 }
    }
}

impl StrafeState {
    pub fn flip(&mut self) {
        self.direction = -self.direction;
    }
}

/// Progress of the current defensive wave invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    /// Accumulated travel along the wave, drives the sine phase.
    pub phase: f64,
    /// Steps taken in this invocation.
    pub moves: u32,
    /// Heading the wave oscillates around.
    pub base_heading: f64,
}

impl WaveState {
    fn start(base_heading: f64) -> Self {
        Self {
            phase: 0.0,
            moves: 0,
            base_heading,
        }
    }
}

/// Reference point the planner is travelling to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Corner(Corner),
    Side(Side),
}

/// Nearest padded corner; ties go to the earlier corner in [`Corner::ALL`].
pub fn nearest_corner(bounds: &ArenaBounds, pos: &Position) -> Corner {
    nearest(Corner::ALL, |c| bounds.corner(c), pos)
}

/// Nearest mid-side point; ties go to the earlier side in [`Side::ALL`].
pub fn nearest_side(bounds: &ArenaBounds, pos: &Position) -> Side {
    nearest(Side::ALL, |s| bounds.side_midpoint(s), pos)
}

fn nearest<T: Copy, const N: usize>(
    candidates: [T; N],
    point: impl Fn(T) -> Position,
    pos: &Position,
) -> T {
    let mut best = candidates[0];
    let mut best_dist = pos.distance_to(&point(best));
    for &c in &candidates[1..] {
        let d = pos.distance_to(&point(c));
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

/// Heading that leads back inside across the breached edges.
///
/// Returns `None` when nothing is breached.
pub fn recovery_heading(breach: &Breach) -> Option<f64> {
    let heading = match (breach.horizontal, breach.vertical) {
        (Some(Edge::Left), Some(Edge::Bottom)) => 45.0,
        (Some(Edge::Left), Some(Edge::Top)) => 315.0,
        (Some(Edge::Right), Some(Edge::Bottom)) => 135.0,
        (Some(Edge::Right), Some(Edge::Top)) => 225.0,
        (Some(Edge::Left), None) => 0.0,
        (Some(Edge::Right), None) => 180.0,
        (None, Some(Edge::Bottom)) => 90.0,
        (None, Some(Edge::Top)) => 270.0,
        _ => return None,
    };
    Some(heading)
}

/// Steps that drive to `target` and then settle on `final_heading`.
fn approach_steps(own: &OwnState, target: &Position, final_heading: f64) -> Vec<ManeuverStep> {
    let distance = own.position.distance_to(target);
    let mut steps = Vec::with_capacity(3);
    if distance >= ANCHOR_REACHED_EPSILON {
        steps.push(ManeuverStep::TurnTo(own.position.bearing_to(target)));
        steps.push(ManeuverStep::Advance(distance));
    }
    steps.push(ManeuverStep::TurnTo(final_heading));
    steps
}

/// The movement state machine. One instance per agent.
#[derive(Debug, Clone)]
pub struct MovementPlanner {
    config: BrainConfig,
    bounds: ArenaBounds,
    mode: MovementMode,
    state: PlannerState,
    anchor: Option<Anchor>,
    strafe: StrafeState,
    wave: WaveState,
    maneuver: Option<Maneuver>,
    pending_stop: bool,
    pending_turn: Option<f64>,
}

impl MovementPlanner {
    pub fn new(config: BrainConfig, bounds: ArenaBounds) -> Self {
        Self {
            config,
            bounds,
            mode: MovementMode::Offensive,
            state: PlannerState::ApproachAnchor,
            anchor: None,
            strafe: StrafeState::default(),
            wave: WaveState::default(),
            maneuver: None,
            pending_stop: false,
            pending_turn: None,
        }
    }

    pub fn state(&self) -> PlannerState {
        self.state
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn strafe(&self) -> StrafeState {
        self.strafe
    }

    pub fn wave(&self) -> WaveState {
        self.wave
    }

    pub fn bounds(&self) -> &ArenaBounds {
        &self.bounds
    }

    /// A bullet hit us: orbit the other way.
    pub fn on_hit_by_bullet(&mut self) {
        self.strafe.flip();
    }

    /// We collided with a bot: halt this tick. Any maneuver resumes afterwards.
    pub fn on_hit_bot(&mut self) {
        self.pending_stop = true;
    }

    /// We drove into a wall.
    pub fn on_hit_wall(&mut self, own: &OwnState) {
        match self.mode {
            MovementMode::Offensive => {
                self.strafe.flip();
                self.pending_turn = Some(-90.0);
            }
            MovementMode::Defensive => {
                let breach = self.bounds.breach(&own.position, self.config.wall_proximity);
                log::debug!("wall hit at {:?}, edges {:?}", own.position, breach);
                self.begin_recovery(&breach, self.config.wall_retreat_distance);
            }
        }
    }

    /// Produce this tick's body commands.
    pub fn plan(
        &mut self,
        own: &OwnState,
        mode: MovementMode,
        target: Option<&TrackedTarget>,
    ) -> TickCommands {
        if mode != self.mode {
            self.enter_mode(mode);
        }

        let mut cmds = TickCommands {
            stop: std::mem::take(&mut self.pending_stop),
            ..Default::default()
        };
        match mode {
            MovementMode::Offensive => match target {
                Some(t) => self.plan_strafe(own, t, &mut cmds),
                None => self.plan_patrol(own, &mut cmds),
            },
            MovementMode::Defensive => self.plan_defensive(own, &mut cmds),
        }
        log::trace!("tick {} {:?} {:?}", own.tick, self.state, cmds);
        cmds
    }

    fn enter_mode(&mut self, mode: MovementMode) {
        log::debug!("planner {:?} -> {:?}, dropping {:?}", self.mode, mode, self.state);
        self.mode = mode;
        self.maneuver = None;
        self.pending_turn = None;
        self.anchor = None;
        self.wave = WaveState::default();
        self.set_state(PlannerState::ApproachAnchor);
    }

    fn set_state(&mut self, state: PlannerState) {
        if state != self.state {
            log::debug!("planner state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Drive the active maneuver. True while it still owns the body.
    fn run_maneuver(&mut self, own: &OwnState, cmds: &mut TickCommands) -> bool {
        let Some(maneuver) = self.maneuver.as_mut() else {
            return false;
        };
        match maneuver.advance(own, cmds) {
            Progress::Running => true,
            Progress::Done => {
                self.maneuver = None;
                false
            }
        }
    }

    // --- Offensive ---

    fn plan_strafe(&mut self, own: &OwnState, target: &TrackedTarget, cmds: &mut TickCommands) {
        if self.state != PlannerState::OffensiveStrafe {
            self.maneuver = None;
            self.anchor = None;
            self.set_state(PlannerState::OffensiveStrafe);
        }
        if let Some(turn) = self.pending_turn.take() {
            cmds.body_turn = Some(turn);
        }

        let target_pos = target.observation.position;
        let bearing = own.position.bearing_to(&target_pos);
        let error = own.position.distance_to(&target_pos) - self.config.tracking_distance;

        if error.abs() > self.config.tracking_tolerance {
            // A pending wall turn wins over facing the target.
            cmds.body_turn
                .get_or_insert_with(|| turn_toward(own.heading, bearing));
            cmds.travel = Some(if error > 0.0 {
                error.min(self.config.max_approach_step)
            } else {
                -(-error).min(self.config.max_approach_step)
            });
        } else {
            let desired = normalize_absolute(bearing + 90.0 * self.strafe.direction);
            cmds.body_turn = Some(turn_toward(own.heading, desired));
            cmds.travel = Some(self.config.strafe_step);
        }
    }

    fn plan_patrol(&mut self, own: &OwnState, cmds: &mut TickCommands) {
        if let Some(turn) = self.pending_turn.take() {
            self.maneuver = Some(Maneuver::new([ManeuverStep::TurnBy(turn)]));
            self.set_state(PlannerState::EdgePatrol);
        }
        if self.run_maneuver(own, cmds) {
            return;
        }

        match self.state {
            PlannerState::ApproachAnchor if matches!(self.anchor, Some(Anchor::Corner(_))) => {
                self.set_state(PlannerState::EdgePatrol);
                self.patrol_leg(own);
            }
            PlannerState::EdgePatrol => self.patrol_leg(own),
            _ => {
                let corner = nearest_corner(&self.bounds, &own.position);
                log::debug!("patrol: approaching corner {corner:?}");
                self.anchor = Some(Anchor::Corner(corner));
                self.maneuver = Some(Maneuver::new(approach_steps(
                    own,
                    &self.bounds.corner(corner),
                    corner.patrol_heading(),
                )));
                self.set_state(PlannerState::ApproachAnchor);
            }
        }
        self.run_maneuver(own, cmds);
    }

    /// Queue the next perimeter leg from the current heading.
    fn patrol_leg(&mut self, own: &OwnState) {
        let heading = normalize_absolute(own.heading);
        let axis = [0.0, 90.0, 180.0, 270.0, 360.0]
            .into_iter()
            .find(|a| (heading - a).abs() <= PATROL_AXIS_TOLERANCE);

        let steps = match axis {
            Some(axis) => {
                let axis = normalize_absolute(axis);
                let p = own.position;
                let b = &self.bounds;
                let leg = if axis == 0.0 {
                    b.right - p.x
                } else if axis == 90.0 {
                    b.top - p.y
                } else if axis == 180.0 {
                    p.x - b.left
                } else {
                    p.y - b.bottom
                };
                vec![
                    ManeuverStep::Advance(leg),
                    ManeuverStep::TurnTo(normalize_absolute(axis - 90.0)),
                ]
            }
            None => vec![ManeuverStep::TurnTo(0.0)],
        };
        self.maneuver = Some(Maneuver::new(steps));
    }

    // --- Defensive ---

    fn plan_defensive(&mut self, own: &OwnState, cmds: &mut TickCommands) {
        if self.run_maneuver(own, cmds) {
            return;
        }

        match self.state {
            PlannerState::ApproachAnchor if matches!(self.anchor, Some(Anchor::Side(_))) => {
                self.wave = WaveState::start(normalize_absolute(own.heading));
                self.set_state(PlannerState::DefensiveWave);
                log::debug!(
                    "wave started at {:?} heading {:.0}",
                    own.position,
                    self.wave.base_heading
                );
                self.wave_step(own, cmds);
            }
            PlannerState::DefensiveWave => self.wave_step(own, cmds),
            _ => {
                self.begin_side_approach(own);
                self.run_maneuver(own, cmds);
            }
        }
    }

    fn begin_side_approach(&mut self, own: &OwnState) {
        let side = nearest_side(&self.bounds, &own.position);
        log::debug!("defensive: seeking side {side:?}");
        self.anchor = Some(Anchor::Side(side));
        self.wave = WaveState::default();
        self.maneuver = Some(Maneuver::new(approach_steps(
            own,
            &self.bounds.side_midpoint(side),
            side.wave_heading(),
        )));
        self.set_state(PlannerState::ApproachAnchor);
    }

    fn begin_recovery(&mut self, breach: &Breach, distance: f64) {
        let mut steps = vec![ManeuverStep::Stop];
        if let Some(heading) = recovery_heading(breach) {
            steps.push(ManeuverStep::TurnTo(heading));
        }
        steps.push(ManeuverStep::Advance(distance));
        log::debug!("recovery: {breach:?}, advancing {distance}");
        self.anchor = None;
        self.maneuver = Some(Maneuver::new(steps));
        self.set_state(PlannerState::BoundaryRecovery);
    }

    /// One sinusoidal step, or hand over to recovery / side seeking.
    fn wave_step(&mut self, own: &OwnState, cmds: &mut TickCommands) {
        let pos = own.position;
        if !self.bounds.contains(&pos) {
            let breach = self.bounds.breach(&pos, 0.0);
            self.begin_recovery(&breach, self.config.boundary_recovery_distance);
            self.run_maneuver(own, cmds);
            return;
        }
        if self.wave.moves >= self.config.wave_max_moves
            || !self
                .bounds
                .contains_with_slack(&pos, self.config.wave_bounds_slack)
        {
            log::debug!("wave finished after {} steps", self.wave.moves);
            self.begin_side_approach(own);
            self.run_maneuver(own, cmds);
            return;
        }

        let offset = self.config.wave_amplitude * (self.wave.phase / self.config.wave_period).sin();
        // Positive offsets turn right of the base heading.
        let desired = self.wave.base_heading - offset;
        cmds.body_turn = Some(normalize_relative(desired - own.heading));
        cmds.travel = Some(self.config.wave_step);
        self.wave.phase += self.config.wave_step;
        self.wave.moves += 1;
    }
}
