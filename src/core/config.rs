//! Engine configuration.
//!
//! Every numeric tunable and every artificial delay lives here as explicit
//! configuration. The engine never reads ambient state; a presentation
//! layer that wants different pacing passes a different config.
//!
//! Delays are virtual milliseconds on the scheduler clock. They stagger
//! visible feedback only; final state is identical whether the clock is
//! advanced step by step or flushed in one call.

use serde::{Deserialize, Serialize};

/// Engine tunables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    // === Enemy scaling ===
    /// Base HP for a boss-tier enemy before level growth.
    pub boss_base_hp: u32,
    /// Base HP for a normal enemy before level growth.
    pub normal_base_hp: u32,
    /// Per-level HP growth factor, applied as `base * growth^(level-1)`.
    pub level_hp_growth: f64,
    /// Minion HP as a fraction of the boss's max HP.
    pub minion_hp_ratio: f64,
    /// Maximum simultaneous enemies. Summon at the cap is a no-op.
    pub max_enemies: usize,
    /// A boss appears every this many levels.
    pub boss_level_interval: u32,

    // === Enrage ===
    /// Enemy turns after this turn count grant every living enemy Strength.
    pub enrage_turn: u32,
    /// Strength gained per enraged enemy turn.
    pub enrage_strength: i32,

    // === Rewards ===
    /// Cards offered after a victory.
    pub reward_card_count: usize,
    /// HP restored when any reward choice is made.
    pub reward_heal: i32,

    // === Intents ===
    /// Opening attack intent value is this plus the level.
    pub intent_base_attack: i32,
    /// Rerolled attack intent value is `5 + floor(level * scale)`.
    pub intent_attack_scale: f64,
    /// Block gained by a Defend/Buff intent.
    pub buff_block: i32,
    /// Damage multiplier for a Special intent.
    pub special_multiplier: f64,

    // === Virtual delays (ms) ===
    /// Delay between a play being accepted and its payloads landing.
    pub projectile_delay_ms: u64,
    /// Stagger between cards of one combo batch.
    pub combo_gap_ms: u64,
    /// Stagger between consecutive enemy actions.
    pub enemy_act_gap_ms: u64,
    /// Delay between the last enemy dying and the reward screen.
    pub victory_delay_ms: u64,
    /// Grace period before a turn with no playable action is auto-passed.
    pub auto_pass_delay_ms: u64,
    /// Lifetime of a VFX event in the feedback stream.
    pub vfx_lifetime_ms: u64,
    /// Lifetime of a floating-text entry in the feedback stream.
    pub floating_text_lifetime_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            boss_base_hp: 100,
            normal_base_hp: 30,
            level_hp_growth: 1.15,
            minion_hp_ratio: 0.30,
            max_enemies: 4,
            boss_level_interval: 5,

            enrage_turn: 10,
            enrage_strength: 1,

            reward_card_count: 3,
            reward_heal: 10,

            intent_base_attack: 6,
            intent_attack_scale: 1.2,
            buff_block: 10,
            special_multiplier: 1.5,

            projectile_delay_ms: 300,
            combo_gap_ms: 200,
            enemy_act_gap_ms: 600,
            victory_delay_ms: 800,
            auto_pass_delay_ms: 1500,
            vfx_lifetime_ms: 500,
            floating_text_lifetime_ms: 1200,
        }
    }
}

impl EngineConfig {
    /// Whether the given level hosts a boss.
    #[must_use]
    pub fn is_boss_level(&self, level: u32) -> bool {
        level % self.boss_level_interval == 0
    }

    /// Enemy max HP for a level: `base * growth^(level-1)`, rounded.
    #[must_use]
    pub fn enemy_hp(&self, level: u32, is_boss: bool) -> i32 {
        let base = if is_boss {
            self.boss_base_hp
        } else {
            self.normal_base_hp
        };
        let scaled = f64::from(base) * self.level_hp_growth.powi(level.saturating_sub(1) as i32);
        scaled.round() as i32
    }

    /// Minion max HP derived from a boss's max HP.
    #[must_use]
    pub fn minion_hp(&self, boss_max_hp: i32) -> i32 {
        ((f64::from(boss_max_hp) * self.minion_hp_ratio).round() as i32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_levels() {
        let cfg = EngineConfig::default();
        assert!(!cfg.is_boss_level(1));
        assert!(!cfg.is_boss_level(4));
        assert!(cfg.is_boss_level(5));
        assert!(cfg.is_boss_level(10));
    }

    #[test]
    fn test_enemy_hp_growth() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.enemy_hp(1, true), 100);
        assert_eq!(cfg.enemy_hp(2, true), 115);
        assert_eq!(cfg.enemy_hp(1, false), 30);
        // Monotone in level
        assert!(cfg.enemy_hp(7, false) > cfg.enemy_hp(6, false));
    }

    #[test]
    fn test_minion_hp() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.minion_hp(100), 30);
        assert_eq!(cfg.minion_hp(1), 1); // floor of 1
    }
}
