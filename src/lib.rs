//! # emberdeck
//!
//! A turn-based deck-combat engine: a single player with a hand of cards and
//! a small skill set fights waves of enemies across levels, spending energy
//! on card and skill plays that deal damage, grant block, heal, draw, and
//! apply timed status effects.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness (shuffles, targeting, intent rolls,
//!    reward picks) flows through one seeded [`core::GameRng`], so a run
//!    replays exactly from its seed.
//!
//! 2. **Virtual time**: deferred work (projectile travel, combo staggering,
//!    enemy action pacing) lives in an explicit [`engine::Scheduler`] with a
//!    virtual clock. Tests flush time; nothing touches a wall clock.
//!
//! 3. **Commands, not callbacks**: input arrives as [`engine::Command`]
//!    values on a queue that the engine drains synchronously on each tick.
//!    Invalid commands are rejected silently (surfaced as transient
//!    feedback), never as errors.
//!
//! ## Modules
//!
//! - `core`: entity IDs, RNG, engine configuration, game phase
//! - `combat`: statuses, combatants, pure damage math
//! - `cards`: card templates, registry, instances, built-in catalog
//! - `skills`: active/passive skill model
//! - `effects`: effect descriptors and the effect resolver
//! - `deck`: draw/hand/discard pile management
//! - `ai`: enemy intent selection
//! - `engine`: game state, turn state machine, scheduler, feedback stream

pub mod ai;
pub mod cards;
pub mod combat;
pub mod core;
pub mod deck;
pub mod effects;
pub mod engine;
pub mod error;
pub mod skills;

// Re-export commonly used types
pub use crate::core::{CardInstanceId, EngineConfig, EntityId, GamePhase, GameRng, GameRngState};

pub use crate::combat::{damage, Enemy, Player, Status, StatusKind, StatusLedger};

pub use crate::cards::{
    catalog, CardInstance, CardRegistry, CardTemplate, CardTheme, CardType, GroupTag, HandPassive,
    HandPassiveKind, TemplateId,
};

pub use crate::skills::{PassiveTag, Skill, SkillId, SkillKind};

pub use crate::effects::{Effect, EffectKind, EffectResolver, EffectSource, Target};

pub use crate::deck::Piles;

pub use crate::ai::{Intent, IntentRoll};

pub use crate::engine::{
    Command, CommandRecord, EnemyProfile, EnemyProfileSource, FeedbackQueue, FeedbackTarget,
    FloatingText, Game, GameState, MemoryProgress, PresetProfiles, ProgressStore, RewardChoice,
    Rewards, Scheduler, Snapshot, Task, TextTone, VfxEvent, VfxKind,
};

pub use crate::error::{ProfileError, ProgressError, Rejection};
