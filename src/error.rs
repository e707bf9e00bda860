//! Error and rejection types.
//!
//! `Rejection` is not a failure of the engine. Invalid commands are a normal
//! part of play (clicking an unaffordable card, releasing a drag with no
//! target) and are silently dropped after being recorded; the message text
//! doubles as player-facing feedback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted command was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Not available right now")]
    WrongPhase,
    #[error("Not enough energy")]
    NotEnoughEnergy,
    #[error("Card is not in hand")]
    CardNotInHand,
    #[error("Pick a target first")]
    MissingTarget,
    #[error("Invalid target")]
    InvalidTarget,
    #[error("Skill is on cooldown")]
    SkillOnCooldown,
    #[error("Passive skills cannot be played")]
    PassiveSkill,
    #[error("Unknown skill")]
    UnknownSkill,
    #[error("No reward to choose")]
    NoRewardPending,
    #[error("Invalid reward choice")]
    InvalidRewardChoice,
    #[error("Unknown character")]
    UnknownCharacter,
}

/// Failure from an enemy profile source.
///
/// The engine always recovers from these with a fallback profile so that
/// loading can never stall.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile generation failed: {0}")]
    Generation(String),
}

/// Failure from a progress store.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress storage failed: {0}")]
    Storage(String),
}
