//! Multi-tick maneuvers as explicit step queues.
//!
//! A maneuver issues one actuator command, then parks on a [`WaitCondition`]
//! polled against the next ticks' [`OwnState`] before issuing the following
//! step. At most one wait is outstanding per maneuver.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use skirmish_core::commands::TickCommands;
use skirmish_core::geometry::{normalize_relative, turn_toward};
use skirmish_core::state::OwnState;

/// Body turns smaller than this are treated as already done.
const TURN_EPSILON: f64 = 1e-6;

/// Predicate over engine counters that unblocks the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitCondition {
    TurnComplete,
    MoveComplete,
}

impl WaitCondition {
    pub fn is_met(self, own: &OwnState) -> bool {
        match self {
            WaitCondition::TurnComplete => own.turn_remaining == 0.0,
            WaitCondition::MoveComplete => own.distance_remaining == 0.0,
        }
    }
}

/// One actuator step of a maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ManeuverStep {
    /// Halt immediately; does not wait.
    Stop,
    /// Turn the body onto an absolute heading, computed when the step issues.
    TurnTo(f64),
    /// Turn the body by a relative angle (positive = left).
    TurnBy(f64),
    /// Travel a signed distance along the current heading.
    Advance(f64),
}

/// Outcome of driving a maneuver for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A command was issued or a wait is still pending.
    Running,
    /// Every step has been issued and the last wait is satisfied.
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct Maneuver {
    steps: VecDeque<ManeuverStep>,
    waiting: Option<WaitCondition>,
}

impl Maneuver {
    pub fn new(steps: impl IntoIterator<Item = ManeuverStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            waiting: None,
        }
    }

    pub fn waiting_on(&self) -> Option<WaitCondition> {
        self.waiting
    }

    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }

    /// Issue the next step once the outstanding wait is met.
    pub fn advance(&mut self, own: &OwnState, cmds: &mut TickCommands) -> Progress {
        if let Some(wait) = self.waiting {
            if !wait.is_met(own) {
                return Progress::Running;
            }
            self.waiting = None;
        }

        while let Some(step) = self.steps.pop_front() {
            match step {
                ManeuverStep::Stop => {
                    cmds.stop = true;
                }
                ManeuverStep::TurnTo(heading) => {
                    if self.issue_turn(turn_toward(own.heading, heading), cmds) {
                        return Progress::Running;
                    }
                }
                ManeuverStep::TurnBy(angle) => {
                    if self.issue_turn(normalize_relative(angle), cmds) {
                        return Progress::Running;
                    }
                }
                ManeuverStep::Advance(distance) => {
                    if distance != 0.0 {
                        cmds.travel = Some(distance);
                        self.waiting = Some(WaitCondition::MoveComplete);
                        return Progress::Running;
                    }
                }
            }
        }
        Progress::Done
    }

    fn issue_turn(&mut self, turn: f64, cmds: &mut TickCommands) -> bool {
        if turn.abs() < TURN_EPSILON {
            return false;
        }
        cmds.body_turn = Some(turn);
        self.waiting = Some(WaitCondition::TurnComplete);
        true
    }
}
