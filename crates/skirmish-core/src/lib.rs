//! Core types and definitions for SKIRMISH.
//!
//! This crate defines the vocabulary shared across all other crates:
//! arena geometry, engine events, actuator commands, per-tick state,
//! tuning configuration and constants. It has no dependency on any
//! engine or runtime.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;
