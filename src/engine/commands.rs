//! Player input as data.
//!
//! Input events never mutate state directly. They are enqueued as commands
//! and drained synchronously by the engine on each tick, so handlers always
//! see current state and nothing needs mutable mirrors of it. A command
//! that fails validation is recorded with its rejection and dropped; it is
//! not an error.

use serde::{Deserialize, Serialize};

use crate::cards::CardTemplate;
use crate::core::{CardInstanceId, EntityId};
use crate::error::Rejection;
use crate::skills::{Skill, SkillId};

/// A player input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Leave the start screen for character selection.
    StartGame,
    /// Pick a character by roster index and start level 1.
    SelectCharacter { index: usize },
    /// Play one hand card, with a target when the card needs one.
    PlayCard {
        card: CardInstanceId,
        target: Option<EntityId>,
    },
    /// Play a hand card together with every same-group card in hand.
    PlayCombo {
        card: CardInstanceId,
        target: EntityId,
    },
    /// Use an active skill, with a target when it needs one.
    UseSkill {
        skill: SkillId,
        target: Option<EntityId>,
    },
    /// End the player turn.
    EndTurn,
    /// Claim a reward and start the next level.
    ChooseReward(RewardChoice),
    /// Leave the game-over screen for a fresh character selection.
    Restart,
}

/// What the player takes from a reward screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardChoice {
    /// One of the offered cards, by offer index.
    Card(usize),
    /// The offered bonus skill.
    Skill,
    /// Nothing. Still advances the level and heals.
    Skip,
}

/// Cards and optional skill offered after a victory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    pub cards: Vec<CardTemplate>,
    /// Present iff a boss was defeated.
    pub skill: Option<Skill>,
}

/// One processed command and how it went.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub at_ms: u64,
    pub command: Command,
    pub rejection: Option<Rejection>,
}

impl CommandRecord {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }
}
