//! Core types: entity IDs, RNG, configuration, game phase.

mod config;
mod entity;
mod phase;
mod rng;

pub use config::EngineConfig;
pub use entity::{CardInstanceId, EntityId};
pub use phase::GamePhase;
pub use rng::{GameRng, GameRngState};
