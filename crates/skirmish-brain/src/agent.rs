//! The agent: glue between engine events, the decision components and the
//! per-tick command set.

use skirmish_core::commands::TickCommands;
use skirmish_core::config::{BrainConfig, ConfigError};
use skirmish_core::constants::{MIN_FIRE_POWER, RAM_RESPONSE_TICKS};
use skirmish_core::enums::{MovementMode, PlannerState};
use skirmish_core::events::BotEvent;
use skirmish_core::geometry::turn_toward;
use skirmish_core::state::{ArenaBounds, OwnState};
use skirmish_core::types::Position;

use crate::fire_control::{self, FireInput};
use crate::firing::{self, FiringSolution};
use crate::mode::ModeSelector;
use crate::movement::MovementPlanner;
use crate::radar;
use crate::tracker::{TargetTracker, TrackedTarget};

/// Gun slew toward a bot that just collided with us.
#[derive(Debug, Clone, Copy)]
struct RamResponse {
    bot_id: u32,
    position: Position,
    ticks_left: u32,
}

/// One autonomous combatant.
///
/// Feed events with [`Agent::on_event`] as they arrive, then call
/// [`Agent::tick`] once per tick with the fresh own state.
#[derive(Debug, Clone)]
pub struct Agent {
    config: BrainConfig,
    tracker: TargetTracker,
    selector: ModeSelector,
    planner: MovementPlanner,
    ram: Option<RamResponse>,
    last_solution: Option<FiringSolution>,
}

impl Agent {
    /// Build an agent for an arena of the given size.
    pub fn new(
        config: BrainConfig,
        arena_width: f64,
        arena_height: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = ArenaBounds::from_arena(arena_width, arena_height, config.padding)?;
        Ok(Self {
            tracker: TargetTracker::new(),
            selector: ModeSelector::new(config.low_energy_threshold, config.mode_hysteresis),
            planner: MovementPlanner::new(config.clone(), bounds),
            ram: None,
            last_solution: None,
            config,
        })
    }

    pub fn config(&self) -> &BrainConfig {
        &self.config
    }

    pub fn bounds(&self) -> &ArenaBounds {
        self.planner.bounds()
    }

    pub fn mode(&self) -> MovementMode {
        self.selector.current()
    }

    pub fn planner_state(&self) -> PlannerState {
        self.planner.state()
    }

    pub fn planner(&self) -> &MovementPlanner {
        &self.planner
    }

    pub fn target(&self) -> Option<&TrackedTarget> {
        self.tracker.target()
    }

    /// Firing solution computed on the last tick, if a target was tracked.
    pub fn last_solution(&self) -> Option<&FiringSolution> {
        self.last_solution.as_ref()
    }

    pub fn on_event(&mut self, own: &OwnState, event: &BotEvent) {
        match *event {
            BotEvent::Scanned(obs) => {
                self.tracker.observe(obs);
            }
            BotEvent::HitByBullet { power, owner, .. } => {
                log::debug!("hit by {owner} (power {power:.2}), reversing strafe");
                self.planner.on_hit_by_bullet();
            }
            BotEvent::HitBot {
                bot_id,
                position,
                rammed,
                ..
            } => {
                log::debug!("collision with {bot_id} at {position:?} (rammed: {rammed})");
                self.planner.on_hit_bot();
                self.ram = Some(RamResponse {
                    bot_id,
                    position,
                    ticks_left: RAM_RESPONSE_TICKS,
                });
            }
            BotEvent::HitWall => self.planner.on_hit_wall(own),
        }
    }

    /// Decide this tick's commands.
    pub fn tick(&mut self, own: &OwnState) -> TickCommands {
        let mode = self.selector.select(own.energy);
        let target = self.tracker.target().copied();

        let mut cmds = self.planner.plan(own, mode, target.as_ref());
        cmds.radar_turn = Some(radar::radar_turn(own, target.as_ref(), &self.config));

        self.last_solution = None;
        if let Some(target) = &target {
            self.aim(own, target, &mut cmds);
        }
        self.respond_to_ram(own, &mut cmds);
        cmds
    }

    fn aim(&mut self, own: &OwnState, target: &TrackedTarget, cmds: &mut TickCommands) {
        let obs = &target.observation;
        let distance = own.position.distance_to(&obs.position);
        let power = fire_control::aim_power(distance, own.energy, obs.energy, &self.config);
        let solution = firing::solve(own, target, power, &self.config);

        cmds.gun_turn = Some(solution.gun_bearing_error);
        let decision = fire_control::decide(
            &FireInput {
                distance: solution.distance,
                confidence: solution.confidence,
                gun_bearing_error: solution.gun_bearing_error,
                weapon_ready: own.weapon_ready(),
                own_energy: own.energy,
                target_energy: obs.energy,
            },
            &self.config,
        );
        if decision.should_fire {
            log::debug!(
                "fire at {} power {:.2} (distance {:.0}, confidence {:.2})",
                obs.id,
                decision.power,
                solution.distance,
                solution.confidence
            );
            cmds.fire = Some(decision.power);
        }
        self.last_solution = Some(solution);
    }

    /// Point the gun at whoever collided with us and shoot once it bears.
    fn respond_to_ram(&mut self, own: &OwnState, cmds: &mut TickCommands) {
        let Some(ram) = self.ram.as_mut() else {
            return;
        };

        let error = turn_toward(own.gun_heading, own.position.bearing_to(&ram.position));
        cmds.gun_turn = Some(error);

        if own.weapon_ready()
            && own.energy >= MIN_FIRE_POWER
            && error.abs() <= self.config.point_blank_tolerance
        {
            let distance = own.position.distance_to(&ram.position);
            let power = fire_control::base_power(distance).min(own.energy);
            log::debug!("ram response: firing at {} power {power:.2}", ram.bot_id);
            cmds.fire = Some(power);
            self.ram = None;
            return;
        }

        ram.ticks_left -= 1;
        if ram.ticks_left == 0 {
            self.ram = None;
        }
    }
}
