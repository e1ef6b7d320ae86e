//! Headless arena harness for SKIRMISH.
//!
//! A deterministic, simplified stand-in for the battle engine: a hecs world
//! of bots and bullets advanced one tick at a time, with agents and scripted
//! opponents issuing [`skirmish_core::commands::TickCommands`].

pub mod components;
pub mod engine;
pub mod rules;
pub mod scripts;
pub mod systems;
pub mod world_setup;
