//! Effect data: what a card or skill does when it resolves.
//!
//! Effects are pure data. Resolution order within a single play follows
//! declaration order on the template, regardless of any scheduling delays
//! applied between declaration and resolution.

use serde::{Deserialize, Serialize};

use crate::combat::StatusKind;
use crate::core::EntityId;

/// Who an effect applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The player.
    Player,
    /// One enemy chosen when the card is played.
    SingleEnemy,
    /// Every living enemy.
    AllEnemies,
    /// A uniformly random living enemy, rolled at resolution time.
    RandomEnemy,
}

/// The operation an effect performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Deal damage, run through the full damage pipeline.
    Damage(i32),
    /// Gain block.
    Block(i32),
    /// Restore HP, capped at max.
    Heal(i32),
    /// Draw cards, reshuffling the discard pile on an empty draw pile.
    Draw(u32),
    /// Add stacks of a status to the target's ledger.
    ApplyStatus { status: StatusKind, value: i32 },
    /// Gain energy this turn.
    GainEnergy(i32),
}

/// A single effect with its target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub target: Target,
}

impl Effect {
    /// Damage a chosen enemy.
    #[must_use]
    pub const fn damage(value: i32) -> Self {
        Self {
            kind: EffectKind::Damage(value),
            target: Target::SingleEnemy,
        }
    }

    /// Damage every living enemy.
    #[must_use]
    pub const fn damage_all(value: i32) -> Self {
        Self {
            kind: EffectKind::Damage(value),
            target: Target::AllEnemies,
        }
    }

    /// Damage a random living enemy, rolled when the effect resolves.
    #[must_use]
    pub const fn damage_random(value: i32) -> Self {
        Self {
            kind: EffectKind::Damage(value),
            target: Target::RandomEnemy,
        }
    }

    /// Gain block.
    #[must_use]
    pub const fn block(value: i32) -> Self {
        Self {
            kind: EffectKind::Block(value),
            target: Target::Player,
        }
    }

    /// Heal the player.
    #[must_use]
    pub const fn heal(value: i32) -> Self {
        Self {
            kind: EffectKind::Heal(value),
            target: Target::Player,
        }
    }

    /// Draw cards.
    #[must_use]
    pub const fn draw(count: u32) -> Self {
        Self {
            kind: EffectKind::Draw(count),
            target: Target::Player,
        }
    }

    /// Gain energy.
    #[must_use]
    pub const fn gain_energy(value: i32) -> Self {
        Self {
            kind: EffectKind::GainEnergy(value),
            target: Target::Player,
        }
    }

    /// Apply a status to a chosen enemy.
    #[must_use]
    pub const fn status_enemy(status: StatusKind, value: i32) -> Self {
        Self {
            kind: EffectKind::ApplyStatus { status, value },
            target: Target::SingleEnemy,
        }
    }

    /// Apply a status to every living enemy.
    #[must_use]
    pub const fn status_all(status: StatusKind, value: i32) -> Self {
        Self {
            kind: EffectKind::ApplyStatus { status, value },
            target: Target::AllEnemies,
        }
    }

    /// Apply a status to the player.
    #[must_use]
    pub const fn status_self(status: StatusKind, value: i32) -> Self {
        Self {
            kind: EffectKind::ApplyStatus { status, value },
            target: Target::Player,
        }
    }

    /// Grant the player Strength stacks.
    #[must_use]
    pub const fn strength_self(value: i32) -> Self {
        Self::status_self(StatusKind::Strength, value)
    }

    /// Whether this effect needs an enemy picked at play time.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        self.target == Target::SingleEnemy
    }
}

/// Where an effect came from, carried through scheduling for attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectSource {
    /// A card played by the player.
    Card,
    /// An active skill used by the player.
    Skill,
    /// An enemy acting on its intent.
    Enemy(EntityId),
}
