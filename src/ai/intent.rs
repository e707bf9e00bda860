//! Intent selection: what an enemy telegraphs it will do next turn.
//!
//! Execution of an intent is deterministic; randomness lives only in the
//! selection here and in minion template picks. Weight bands for boss units
//! shift with the live enemy count so a boss at the enemy cap never rolls
//! Summon.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, GameRng};

/// An enemy's pre-announced action, shown to the player before it executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Deal `intent_value` damage to the player.
    Attack,
    /// Gain self block.
    Defend,
    /// Gain self block.
    Buff,
    /// Spawn a minion, no-op at the enemy cap.
    Summon,
    /// Deal `special_multiplier * intent_value` damage.
    Special,
}

impl Intent {
    /// Emoji shown next to the enemy while the intent is telegraphed.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Intent::Attack => "⚔️",
            Intent::Defend | Intent::Buff => "🛡️",
            Intent::Summon => "✨",
            Intent::Special => "💥",
        }
    }
}

/// A rolled intent plus its numeric payload.
///
/// The payload is meaningful for Attack and Special; other intents carry 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRoll {
    pub intent: Intent,
    pub value: i32,
}

impl IntentRoll {
    /// Opening intent for a freshly spawned enemy.
    #[must_use]
    pub fn opening(config: &EngineConfig, level: u32) -> Self {
        Self {
            intent: Intent::Attack,
            value: config.intent_base_attack + level as i32,
        }
    }

    /// Reroll after an enemy acts.
    ///
    /// Boss weights depend on the current live enemy count; Summon drops to
    /// zero weight at the cap. Non-boss units only attack or buff.
    pub fn reroll(
        rng: &mut GameRng,
        config: &EngineConfig,
        level: u32,
        is_boss: bool,
        live_enemies: usize,
    ) -> Self {
        let attack_value = rerolled_attack_value(config, level);
        let intent = if is_boss {
            let summon_weight = if live_enemies < config.max_enemies {
                0.25
            } else {
                0.0
            };
            let weights = [0.40, 0.15, summon_weight, 0.20];
            match rng.choose_weighted(&weights) {
                Some(0) => Intent::Attack,
                Some(1) => Intent::Buff,
                Some(2) => Intent::Summon,
                _ => Intent::Special,
            }
        } else if rng.gen_bool(0.70) {
            Intent::Attack
        } else {
            Intent::Buff
        };

        let value = match intent {
            Intent::Attack | Intent::Special => attack_value,
            Intent::Defend | Intent::Buff | Intent::Summon => 0,
        };
        Self { intent, value }
    }
}

fn rerolled_attack_value(config: &EngineConfig, level: u32) -> i32 {
    5 + (f64::from(level) * config.intent_attack_scale).floor() as i32
}
