//! Arena engine: the harness's main loop.
//!
//! `ArenaEngine` owns the hecs world, lets each controller decide, runs all
//! systems and produces `ArenaSnapshot`s. Headless and deterministic: the
//! same seed and the same spawns replay the same match.

use glam::DVec2;
use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_brain::agent::Agent;
use skirmish_core::config::{BrainConfig, ConfigError};

use crate::components::*;
use crate::rules::MIN_ARENA_SIZE;
use crate::scripts::OpponentScript;
use crate::systems;
use crate::systems::cleanup::Fallen;
use crate::systems::snapshot::ArenaSnapshot;
use crate::world_setup;

/// Configuration for a new arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// RNG seed for spawn placement. Same seed = same match.
    pub seed: u64,
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Final record of one bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotResult {
    pub id: u32,
    pub label: String,
    pub alive: bool,
    pub energy: f64,
    pub shots_fired: u32,
    pub bullet_hits: u32,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    /// Tick the bot was destroyed on.
    pub destroyed_at: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub ticks: u64,
    /// Last bot standing, if the match was decided.
    pub winner: Option<u32>,
    pub bots: Vec<BotResult>,
}

pub struct ArenaEngine {
    world: World,
    config: ArenaConfig,
    tick: u64,
    rng: ChaCha8Rng,
    next_bot_id: u32,
    despawn_buffer: Vec<hecs::Entity>,
    fallen: Vec<(u64, Fallen)>,
}

impl ArenaEngine {
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        if !(config.width >= MIN_ARENA_SIZE && config.height >= MIN_ARENA_SIZE) {
            return Err(ConfigError::Invalid(format!(
                "arena {}x{} is smaller than {MIN_ARENA_SIZE}",
                config.width, config.height
            )));
        }
        log::info!(
            "arena {}x{} seed {}",
            config.width,
            config.height,
            config.seed
        );
        Ok(Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            tick: 0,
            next_bot_id: 1,
            despawn_buffer: Vec::new(),
            fallen: Vec::new(),
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of bots still in the arena.
    pub fn bots_alive(&self) -> usize {
        self.world.query::<&Bot>().iter().count()
    }

    /// Spawn an agent at a random free spot. Returns its bot id.
    pub fn spawn_agent(&mut self, config: BrainConfig) -> Result<u32, ConfigError> {
        let position = self.random_spawn_point();
        let heading = self.rng.gen_range(0.0..360.0);
        self.spawn_agent_at(config, position, heading)
    }

    /// Spawn an agent at a fixed position and heading. Returns its bot id.
    pub fn spawn_agent_at(
        &mut self,
        config: BrainConfig,
        position: DVec2,
        heading: f64,
    ) -> Result<u32, ConfigError> {
        let agent = Agent::new(config, self.config.width, self.config.height)?;
        let id = self.allocate_id();
        world_setup::spawn_agent(&mut self.world, id, position, heading, agent);
        Ok(id)
    }

    /// Spawn a scripted opponent at a random free spot. Returns its bot id.
    pub fn spawn_opponent(&mut self, script: OpponentScript) -> u32 {
        let position = self.random_spawn_point();
        let heading = self.rng.gen_range(0.0..360.0);
        self.spawn_opponent_at(script, position, heading)
    }

    pub fn spawn_opponent_at(
        &mut self,
        script: OpponentScript,
        position: DVec2,
        heading: f64,
    ) -> u32 {
        let id = self.allocate_id();
        world_setup::spawn_opponent(&mut self.world, id, position, heading, script);
        id
    }

    /// Advance the arena by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> ArenaSnapshot {
        self.run_systems();
        self.tick += 1;
        systems::snapshot::build_snapshot(&self.world, self.tick)
    }

    /// Tick until at most one bot remains or `max_ticks` have elapsed.
    pub fn run(&mut self, max_ticks: u64) -> MatchSummary {
        while self.tick < max_ticks && self.bots_alive() > 1 {
            self.run_systems();
            self.tick += 1;
        }
        self.summary()
    }

    /// Results so far, survivors first, each group ordered by id.
    pub fn summary(&self) -> MatchSummary {
        let mut bots: Vec<BotResult> = self
            .world
            .query::<(&Bot, &Hull, &Stats)>()
            .iter()
            .map(|(_, (bot, hull, stats))| BotResult {
                id: bot.id,
                label: bot.label.clone(),
                alive: true,
                energy: hull.energy,
                shots_fired: stats.shots_fired,
                bullet_hits: stats.bullet_hits,
                damage_dealt: stats.damage_dealt,
                damage_taken: stats.damage_taken,
                destroyed_at: None,
            })
            .collect();
        bots.sort_by_key(|b| b.id);

        let winner = match bots.as_slice() {
            [only] if !self.fallen.is_empty() => Some(only.id),
            _ => None,
        };

        let mut fallen: Vec<BotResult> = self
            .fallen
            .iter()
            .map(|(tick, f)| BotResult {
                id: f.id,
                label: f.label.clone(),
                alive: false,
                energy: 0.0,
                shots_fired: f.stats.shots_fired,
                bullet_hits: f.stats.bullet_hits,
                damage_dealt: f.stats.damage_dealt,
                damage_taken: f.stats.damage_taken,
                destroyed_at: Some(*tick),
            })
            .collect();
        fallen.sort_by_key(|b| b.id);
        bots.extend(fallen);

        MatchSummary {
            seed: self.config.seed,
            ticks: self.tick,
            winner,
            bots,
        }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_bot_id;
        self.next_bot_id += 1;
        id
    }

    fn random_spawn_point(&mut self) -> DVec2 {
        world_setup::random_spawn_point(
            &self.world,
            &mut self.rng,
            self.config.width,
            self.config.height,
        )
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let (width, height) = (self.config.width, self.config.height);
        // 1. Controllers decide
        systems::commands::run(&mut self.world, self.tick);
        // 2. Turning and travel
        systems::movement::run(&mut self.world);
        // 3. Walls and rams
        systems::collisions::run(&mut self.world, width, height);
        // 4. Gun cooling and launches
        systems::gunnery::run(&mut self.world);
        // 5. Bullet flight and hits
        systems::bullets::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Radar arcs
        systems::scan::run(&mut self.world, self.tick);
        // 7. Remove spent bullets and destroyed bots
        let fallen =
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, width, height);
        let tick = self.tick;
        self.fallen.extend(fallen.into_iter().map(|f| (tick, f)));
    }
}
