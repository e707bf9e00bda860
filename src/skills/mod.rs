//! Skills: always-on passives and cooldown-gated actives.
//!
//! A skill is either Active (cost, cooldown, effects - playable when the
//! cooldown is at zero and energy suffices) or Passive (a tag the damage
//! calculator interprets). Cooldowns tick down by one at the start of every
//! player turn, floored at zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Unique identifier for a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub u32);

impl SkillId {
    /// Create a new skill ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Tags interpreted by the damage calculator for passive skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassiveTag {
    /// +1 on all player damage effects.
    DamageBoost,
}

/// Active vs passive payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SkillKind {
    /// Cooldown-gated, energy-costed, resolves effects like a card play.
    Active {
        cost: i32,
        cooldown: u32,
        current_cooldown: u32,
        effects: SmallVec<[Effect; 2]>,
    },
    /// Always-on modifier referenced by tag.
    Passive { tag: PassiveTag },
}

/// A skill owned by the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub emoji: String,
    pub kind: SkillKind,
}

impl Skill {
    /// Create an active skill, off cooldown.
    #[must_use]
    pub fn active(
        id: SkillId,
        name: impl Into<String>,
        emoji: impl Into<String>,
        cost: i32,
        cooldown: u32,
        effects: impl IntoIterator<Item = Effect>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            kind: SkillKind::Active {
                cost,
                cooldown,
                current_cooldown: 0,
                effects: effects.into_iter().collect(),
            },
        }
    }

    /// Create a passive skill.
    #[must_use]
    pub fn passive(
        id: SkillId,
        name: impl Into<String>,
        emoji: impl Into<String>,
        tag: PassiveTag,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            kind: SkillKind::Passive { tag },
        }
    }

    /// Check if this is a passive skill.
    #[must_use]
    pub fn is_passive(&self) -> bool {
        matches!(self.kind, SkillKind::Passive { .. })
    }

    /// Whether this skill can be used right now with the given energy.
    ///
    /// Passives are never "usable" - they are always on.
    #[must_use]
    pub fn usable(&self, energy: i32) -> bool {
        match &self.kind {
            SkillKind::Active {
                cost,
                current_cooldown,
                ..
            } => *current_cooldown == 0 && *cost <= energy,
            SkillKind::Passive { .. } => false,
        }
    }

    /// Start-of-turn cooldown tick, floored at zero.
    pub fn tick_cooldown(&mut self) {
        if let SkillKind::Active {
            current_cooldown, ..
        } = &mut self.kind
        {
            *current_cooldown = current_cooldown.saturating_sub(1);
        }
    }

    /// Put the skill on cooldown after use.
    pub fn trigger_cooldown(&mut self) {
        if let SkillKind::Active {
            cooldown,
            current_cooldown,
            ..
        } = &mut self.kind
        {
            *current_cooldown = *cooldown;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    fn shout() -> Skill {
        Skill::active(
            SkillId::new(1),
            "Battle Shout",
            "📣",
            1,
            3,
            [Effect::strength_self(2)],
        )
    }

    #[test]
    fn test_active_usable() {
        let skill = shout();
        assert!(skill.usable(1));
        assert!(!skill.usable(0));
    }

    #[test]
    fn test_cooldown_cycle() {
        let mut skill = shout();
        skill.trigger_cooldown();
        assert!(!skill.usable(3));

        skill.tick_cooldown();
        skill.tick_cooldown();
        assert!(!skill.usable(3));

        skill.tick_cooldown();
        assert!(skill.usable(3));

        // Floored at zero
        skill.tick_cooldown();
        assert!(skill.usable(3));
    }

    #[test]
    fn test_passive_never_usable() {
        let skill = Skill::passive(SkillId::new(2), "Arcane Surge", "🔮", PassiveTag::DamageBoost);
        assert!(skill.is_passive());
        assert!(!skill.usable(99));
    }
}
