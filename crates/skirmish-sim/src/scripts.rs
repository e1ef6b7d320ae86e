//! Scripted opponents with fixed behavior.
//!
//! Scripts see their own state plus the position of the nearest living bot,
//! which the harness hands them directly (no radar).

use serde::{Deserialize, Serialize};

use skirmish_core::commands::TickCommands;
use skirmish_core::geometry::turn_toward;
use skirmish_core::state::OwnState;
use skirmish_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpponentScript {
    /// Never moves or fires.
    Sitter,
    /// Drives in a circle, turning `turn` degrees per tick.
    Circler { turn: f64 },
    /// Drives back and forth along its heading.
    Shuttle {
        span: f64,
        #[serde(default)]
        reversing: bool,
    },
    /// Stands still and shoots at the nearest bot every `period` ticks.
    Gunner { period: u64, power: f64 },
}

impl OpponentScript {
    pub fn label(&self) -> &'static str {
        match self {
            OpponentScript::Sitter => "sitter",
            OpponentScript::Circler { .. } => "circler",
            OpponentScript::Shuttle { .. } => "shuttle",
            OpponentScript::Gunner { .. } => "gunner",
        }
    }

    pub fn commands(&mut self, own: &OwnState, nearest: Option<Position>) -> TickCommands {
        match self {
            OpponentScript::Sitter => TickCommands::default(),
            OpponentScript::Circler { turn } => TickCommands {
                body_turn: Some(*turn),
                travel: Some(100.0),
                ..Default::default()
            },
            OpponentScript::Shuttle { span, reversing } => {
                if own.distance_remaining != 0.0 {
                    return TickCommands::default();
                }
                *reversing = !*reversing;
                TickCommands {
                    travel: Some(if *reversing { -*span } else { *span }),
                    ..Default::default()
                }
            }
            OpponentScript::Gunner { period, power } => {
                let Some(target) = nearest else {
                    return TickCommands::default();
                };
                let gun_turn = turn_toward(own.gun_heading, own.position.bearing_to(&target));
                let fire = (*period > 0 && own.tick % *period == 0).then_some(*power);
                TickCommands {
                    gun_turn: Some(gun_turn),
                    fire,
                    ..Default::default()
                }
            }
        }
    }
}
