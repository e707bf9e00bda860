//! Built-in card set, character roster, and reward pools.
//!
//! Everything here is plain data assembled through the template builders.
//! The engine itself never hardcodes a card; swapping this module out for
//! a loaded card set changes the game without touching any rule code.

use crate::cards::{
    CardRegistry, CardTemplate, CardTheme, CardType, GroupTag, HandPassive, HandPassiveKind,
    TemplateId,
};
use crate::combat::StatusKind;
use crate::effects::Effect;
use crate::skills::{PassiveTag, Skill, SkillId};

pub const STRIKE: TemplateId = TemplateId(1);
pub const SHURIKEN: TemplateId = TemplateId(2);
pub const GUARD: TemplateId = TemplateId(3);
pub const UPPERCUT: TemplateId = TemplateId(4);
pub const FIREBALL: TemplateId = TemplateId(5);
pub const FROST_NOVA: TemplateId = TemplateId(6);
pub const FLASH_FREEZE: TemplateId = TemplateId(7);
pub const MAGIC_SHIELD: TemplateId = TemplateId(8);
pub const MEDITATE: TemplateId = TemplateId(9);
pub const CLAW: TemplateId = TemplateId(10);
pub const DRAIN_LIFE: TemplateId = TemplateId(11);
pub const DARK_PACT: TemplateId = TemplateId(12);
pub const BOMB_TOSS: TemplateId = TemplateId(13);
pub const FLEX: TemplateId = TemplateId(14);
pub const WAR_BANNER: TemplateId = TemplateId(15);
pub const HOLY_LIGHT: TemplateId = TemplateId(16);
pub const WEAKEN: TemplateId = TemplateId(17);
pub const BLIZZARD: TemplateId = TemplateId(18);

/// Shuriken cards in hand fly together as one volley.
pub const SHURIKEN_GROUP: GroupTag = GroupTag(1);
/// Claw cards in hand rake together as one flurry.
pub const CLAW_GROUP: GroupTag = GroupTag(2);

pub const ARCANE_SURGE: SkillId = SkillId(1);
pub const BATTLE_SHOUT: SkillId = SkillId(2);
pub const BLOODLUST: SkillId = SkillId(3);
pub const IRON_SKIN: SkillId = SkillId(4);

/// All built-in templates, registered.
#[must_use]
pub fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for template in templates() {
        registry.register(template);
    }
    registry
}

fn templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate::new(STRIKE, "Strike", 1, CardType::Attack)
            .with_emoji("🗡️")
            .with_theme(CardTheme::Physical)
            .with_effect(Effect::damage(6)),
        CardTemplate::new(SHURIKEN, "Shuriken", 1, CardType::Attack)
            .with_emoji("🌀")
            .with_theme(CardTheme::Physical)
            .with_group_tag(SHURIKEN_GROUP)
            .with_effect(Effect::damage(3)),
        CardTemplate::new(GUARD, "Guard", 1, CardType::Skill)
            .with_emoji("🛡️")
            .with_effect(Effect::block(6)),
        CardTemplate::new(UPPERCUT, "Uppercut", 2, CardType::Attack)
            .with_emoji("👊")
            .with_theme(CardTheme::Physical)
            .with_effect(Effect::damage(8))
            .with_effect(Effect::status_enemy(StatusKind::Vulnerable, 2)),
        CardTemplate::new(FIREBALL, "Fireball", 2, CardType::Attack)
            .with_emoji("🔥")
            .with_theme(CardTheme::Fire)
            .with_effect(Effect::damage(10))
            .with_effect(Effect::status_enemy(StatusKind::Burn, 2)),
        CardTemplate::new(FROST_NOVA, "Frost Nova", 2, CardType::Attack)
            .with_emoji("❄️")
            .with_theme(CardTheme::Ice)
            .with_effect(Effect::damage_all(4)),
        CardTemplate::new(FLASH_FREEZE, "Flash Freeze", 1, CardType::Skill)
            .with_emoji("🧊")
            .with_theme(CardTheme::Ice)
            .with_effect(Effect::status_enemy(StatusKind::Freeze, 1)),
        CardTemplate::new(MAGIC_SHIELD, "Magic Shield", 2, CardType::Skill)
            .with_emoji("✨")
            .with_theme(CardTheme::Holy)
            .with_effect(Effect::block(12)),
        CardTemplate::new(MEDITATE, "Meditate", 1, CardType::Skill)
            .with_emoji("🧘")
            .with_effect(Effect::draw(2)),
        CardTemplate::new(CLAW, "Claw", 0, CardType::Attack)
            .with_emoji("🐾")
            .with_theme(CardTheme::Dark)
            .with_group_tag(CLAW_GROUP)
            .with_effect(Effect::damage(3)),
        CardTemplate::new(DRAIN_LIFE, "Drain Life", 2, CardType::Attack)
            .with_emoji("🩸")
            .with_theme(CardTheme::Dark)
            .with_effect(Effect::damage(7))
            .with_effect(Effect::heal(4)),
        CardTemplate::new(DARK_PACT, "Dark Pact", 0, CardType::Skill)
            .with_emoji("😈")
            .with_theme(CardTheme::Dark)
            .with_effect(Effect::draw(1))
            .with_effect(Effect::gain_energy(1)),
        CardTemplate::new(BOMB_TOSS, "Bomb Toss", 1, CardType::Attack)
            .with_emoji("💣")
            .with_effect(Effect::damage_random(8)),
        CardTemplate::new(FLEX, "Flex", 1, CardType::Power)
            .with_emoji("💪")
            .with_effect(Effect::strength_self(2))
            .with_hand_passive(HandPassive {
                kind: HandPassiveKind::DamageBoost,
                value: 1,
            }),
        CardTemplate::new(WAR_BANNER, "War Banner", 1, CardType::Power)
            .with_emoji("🚩")
            .with_effect(Effect::block(3))
            .with_hand_passive(HandPassive {
                kind: HandPassiveKind::BlockOnTurnEnd,
                value: 2,
            }),
        CardTemplate::new(HOLY_LIGHT, "Holy Light", 1, CardType::Skill)
            .with_emoji("🙏")
            .with_theme(CardTheme::Holy)
            .with_effect(Effect::heal(5))
            .with_hand_passive(HandPassive {
                kind: HandPassiveKind::HealOnTurnEnd,
                value: 1,
            }),
        CardTemplate::new(WEAKEN, "Weaken", 1, CardType::Skill)
            .with_emoji("🥀")
            .with_theme(CardTheme::Poison)
            .with_effect(Effect::status_enemy(StatusKind::Weak, 2)),
        CardTemplate::new(BLIZZARD, "Blizzard", 3, CardType::Attack)
            .with_emoji("🌨️")
            .with_theme(CardTheme::Ice)
            .with_effect(Effect::damage_all(7)),
    ]
}

/// Templates eligible to appear as victory rewards.
#[must_use]
pub fn reward_card_pool() -> Vec<TemplateId> {
    vec![
        SHURIKEN, UPPERCUT, FIREBALL, FROST_NOVA, FLASH_FREEZE, MAGIC_SHIELD, MEDITATE, CLAW,
        DRAIN_LIFE, DARK_PACT, BOMB_TOSS, FLEX, WAR_BANNER, HOLY_LIGHT, WEAKEN, BLIZZARD,
    ]
}

/// Skills eligible to appear as boss rewards.
#[must_use]
pub fn reward_skill_pool() -> Vec<Skill> {
    vec![
        Skill::active(
            BATTLE_SHOUT,
            "Battle Shout",
            "📣",
            1,
            3,
            [Effect::strength_self(2)],
        ),
        Skill::active(
            BLOODLUST,
            "Bloodlust",
            "🧛",
            1,
            4,
            [Effect::status_self(StatusKind::DoubleNextAttack, 1)],
        ),
        Skill::active(IRON_SKIN, "Iron Skin", "🪨", 1, 3, [Effect::block(10)]),
        Skill::passive(ARCANE_SURGE, "Arcane Surge", "🔮", PassiveTag::DamageBoost),
    ]
}

/// A playable character: stats, starting deck, starting skills.
#[derive(Clone, Debug)]
pub struct CharacterSpec {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub max_hp: i32,
    pub max_energy: i32,
    pub base_draw_count: usize,
    pub deck: Vec<TemplateId>,
    pub fixed_starting_hand: Vec<TemplateId>,
    pub skills: Vec<Skill>,
}

/// The selectable character roster.
#[must_use]
pub fn roster() -> Vec<CharacterSpec> {
    vec![
        CharacterSpec {
            name: "Warrior",
            emoji: "⚔️",
            description: "Hits hard and hides behind a wall of block.",
            max_hp: 60,
            max_energy: 3,
            base_draw_count: 4,
            deck: vec![
                STRIKE, STRIKE, STRIKE, STRIKE, GUARD, GUARD, UPPERCUT, FLEX, WAR_BANNER,
                BOMB_TOSS,
            ],
            fixed_starting_hand: vec![STRIKE, GUARD],
            skills: vec![Skill::active(
                BATTLE_SHOUT,
                "Battle Shout",
                "📣",
                1,
                3,
                [Effect::strength_self(2)],
            )],
        },
        CharacterSpec {
            name: "Mage",
            emoji: "🧙",
            description: "Fragile, but every spell hits a little harder.",
            max_hp: 50,
            max_energy: 3,
            base_draw_count: 4,
            deck: vec![
                STRIKE, STRIKE, FIREBALL, FIREBALL, FROST_NOVA, FLASH_FREEZE, MAGIC_SHIELD,
                MEDITATE, BLIZZARD, GUARD,
            ],
            fixed_starting_hand: vec![FIREBALL],
            skills: vec![Skill::passive(
                ARCANE_SURGE,
                "Arcane Surge",
                "🔮",
                PassiveTag::DamageBoost,
            )],
        },
        CharacterSpec {
            name: "Vampire",
            emoji: "🧛",
            description: "Bleeds enemies dry with cheap, stacking claws.",
            max_hp: 45,
            max_energy: 3,
            base_draw_count: 5,
            deck: vec![
                CLAW, CLAW, CLAW, DRAIN_LIFE, DRAIN_LIFE, DARK_PACT, WEAKEN, GUARD, STRIKE,
            ],
            fixed_starting_hand: vec![CLAW],
            skills: vec![Skill::active(
                BLOODLUST,
                "Bloodlust",
                "🧛",
                1,
                4,
                [Effect::status_self(StatusKind::DoubleNextAttack, 1)],
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_all_deck_cards() {
        let registry = registry();
        for character in roster() {
            for id in character.deck.iter().chain(&character.fixed_starting_hand) {
                assert!(registry.get(*id).is_some(), "missing template {id:?}");
            }
        }
    }

    #[test]
    fn test_reward_pool_is_registered() {
        let registry = registry();
        for id in reward_card_pool() {
            assert!(registry.get(id).is_some());
        }
    }

    #[test]
    fn test_fixed_hand_is_subset_of_deck() {
        for character in roster() {
            for id in &character.fixed_starting_hand {
                assert!(character.deck.contains(id), "{} missing {id:?}", character.name);
            }
        }
    }

    #[test]
    fn test_combo_groups_share_tags() {
        let registry = registry();
        assert_eq!(
            registry.get(SHURIKEN).unwrap().group_tag,
            Some(SHURIKEN_GROUP)
        );
        assert_eq!(registry.get(CLAW).unwrap().group_tag, Some(CLAW_GROUP));
    }
}
