//! Combatants: the player and enemies.
//!
//! Both share the same HP/block model: block soaks damage first and resets
//! at the start of its owner's turn; HP floors at zero. Invariants
//! (`0 <= hp <= max_hp`, `block >= 0`) are debug-asserted and clamped
//! defensively in release builds.

use serde::{Deserialize, Serialize};

use super::status::{StatusKind, StatusLedger};
use crate::ai::Intent;
use crate::cards::TemplateId;
use crate::core::EntityId;
use crate::skills::{PassiveTag, Skill, SkillKind};

/// How a hit was split between block and HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Amount absorbed by block.
    pub blocked: i32,
    /// Amount that landed on HP.
    pub landed: i32,
}

impl DamageOutcome {
    /// Whether the hit was fully absorbed.
    #[must_use]
    pub fn fully_blocked(&self) -> bool {
        self.landed == 0 && self.blocked > 0
    }
}

/// Block-then-HP absorption, shared by player and enemies.
///
/// If block covers the hit, only block is reduced. Otherwise the excess
/// lands on HP (floored at 0) and block resets to 0.
fn absorb(block: &mut i32, hp: &mut i32, dmg: i32) -> DamageOutcome {
    debug_assert!(dmg >= 0, "damage must be non-negative, got {dmg}");
    let dmg = dmg.max(0);

    if *block >= dmg {
        *block -= dmg;
        DamageOutcome {
            blocked: dmg,
            landed: 0,
        }
    } else {
        let landed = dmg - *block;
        let blocked = *block;
        *block = 0;
        *hp = (*hp - landed).max(0);
        DamageOutcome { blocked, landed }
    }
}

/// The player character.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub max_hp: i32,
    pub current_hp: i32,
    pub max_energy: i32,
    pub current_energy: i32,
    pub block: i32,
    pub statuses: StatusLedger,
    /// Owned skills, order-stable for the whole run.
    pub skills: Vec<Skill>,
    /// Hand-size target each turn.
    pub base_draw_count: usize,
    /// Template IDs guaranteed in the opening hand of each level.
    pub fixed_starting_hand: Vec<TemplateId>,
}

impl Player {
    /// Create a player at full HP and energy.
    #[must_use]
    pub fn new(max_hp: i32, max_energy: i32, base_draw_count: usize) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
            max_energy,
            current_energy: max_energy,
            block: 0,
            statuses: StatusLedger::new(),
            skills: Vec::new(),
            base_draw_count,
            fixed_starting_hand: Vec::new(),
        }
    }

    /// Apply damage with block absorption.
    pub fn take_damage(&mut self, dmg: i32) -> DamageOutcome {
        let outcome = absorb(&mut self.block, &mut self.current_hp, dmg);
        self.assert_invariants();
        outcome
    }

    /// Lose HP directly, bypassing block (Burn ticks).
    pub fn lose_hp(&mut self, amount: i32) {
        self.current_hp = (self.current_hp - amount.max(0)).max(0);
        self.assert_invariants();
    }

    /// Heal, capped at max HP. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount.max(0)).min(self.max_hp);
        self.assert_invariants();
        self.current_hp - before
    }

    /// Gain block.
    pub fn gain_block(&mut self, amount: i32) {
        self.block += amount.max(0);
    }

    /// Whether the run is lost.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_hp <= 0
    }

    /// Whether any owned passive skill carries the given tag.
    #[must_use]
    pub fn has_passive(&self, tag: PassiveTag) -> bool {
        self.skills
            .iter()
            .any(|s| matches!(&s.kind, SkillKind::Passive { tag: t } if *t == tag))
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.current_hp >= 0 && self.current_hp <= self.max_hp,
            "player hp {} outside [0, {}]",
            self.current_hp,
            self.max_hp
        );
        debug_assert!(self.block >= 0, "player block {} negative", self.block);
    }
}

/// A single enemy.
///
/// Name, emoji, and description come from the profile source and are opaque
/// to the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub max_hp: i32,
    pub current_hp: i32,
    pub block: i32,
    pub statuses: StatusLedger,
    /// Pre-announced action for the upcoming enemy turn.
    pub intent: Intent,
    /// Numeric payload, meaningful for Attack and Special.
    pub intent_value: i32,
    /// Gates reward tier and the minion-scaling rules.
    pub is_boss: bool,
}

impl Enemy {
    /// Create an enemy at full HP.
    #[must_use]
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
        max_hp: i32,
        is_boss: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            description: description.into(),
            max_hp,
            current_hp: max_hp,
            block: 0,
            statuses: StatusLedger::new(),
            intent: Intent::Attack,
            intent_value: 0,
            is_boss,
        }
    }

    /// Apply damage with block absorption.
    pub fn take_damage(&mut self, dmg: i32) -> DamageOutcome {
        let outcome = absorb(&mut self.block, &mut self.current_hp, dmg);
        self.assert_invariants();
        outcome
    }

    /// Lose HP directly, bypassing block (Burn ticks).
    pub fn lose_hp(&mut self, amount: i32) {
        self.current_hp = (self.current_hp - amount.max(0)).max(0);
        self.assert_invariants();
    }

    /// Gain block.
    pub fn gain_block(&mut self, amount: i32) {
        self.block += amount.max(0);
    }

    /// Whether this enemy is still in the fight.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Whether this enemy's action is skipped this turn.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.statuses.get(StatusKind::Freeze) > 0
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.current_hp >= 0 && self.current_hp <= self.max_hp,
            "enemy {} hp {} outside [0, {}]",
            self.id,
            self.current_hp,
            self.max_hp
        );
        debug_assert!(self.block >= 0, "enemy {} block negative", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(hp: i32) -> Enemy {
        Enemy::new(EntityId::new(1), "Slime", "🟢", "A blob.", hp, false)
    }

    #[test]
    fn test_block_fully_absorbs() {
        let mut e = enemy(20);
        e.gain_block(15);

        let outcome = e.take_damage(10);

        assert_eq!(e.block, 5);
        assert_eq!(e.current_hp, 20);
        assert_eq!(outcome, DamageOutcome { blocked: 10, landed: 0 });
        assert!(outcome.fully_blocked());
    }

    #[test]
    fn test_block_partial_absorb() {
        let mut e = enemy(20);
        e.gain_block(4);

        let outcome = e.take_damage(10);

        assert_eq!(e.block, 0);
        assert_eq!(e.current_hp, 14);
        assert_eq!(outcome, DamageOutcome { blocked: 4, landed: 6 });
    }

    #[test]
    fn test_hp_floors_at_zero() {
        let mut e = enemy(5);
        e.take_damage(100);
        assert_eq!(e.current_hp, 0);
        assert!(!e.is_alive());
    }

    #[test]
    fn test_player_heal_caps() {
        let mut p = Player::new(50, 3, 4);
        p.current_hp = 45;
        p.heal(10);
        assert_eq!(p.current_hp, 50);
    }

    #[test]
    fn test_player_lose_hp_bypasses_block() {
        let mut p = Player::new(50, 3, 4);
        p.gain_block(10);
        p.lose_hp(3);
        assert_eq!(p.block, 10);
        assert_eq!(p.current_hp, 47);
    }

    #[test]
    fn test_frozen_enemy() {
        let mut e = enemy(20);
        assert!(!e.is_frozen());
        e.statuses.apply(StatusKind::Freeze, 1);
        assert!(e.is_frozen());
    }
}
