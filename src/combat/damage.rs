//! Pure damage math.
//!
//! Player pipeline, in order:
//! 1. base + Strength stacks
//! 2. +1 if a DamageBoost passive skill is owned
//! 3. + sum of DamageBoost hand passives, read at resolution time - a
//!    boosting card only counts while it is physically in hand
//! 4. x2 if DoubleNextAttack is held
//! 5. x0.75 floored if Weak
//! 6. x1.5 floored if the target is Vulnerable
//!
//! The enemy pipeline is steps 1, 5, 6 only: hand passives and
//! DoubleNextAttack are player mechanics.
//!
//! Every multiplicative step truncates toward zero (integer floor for
//! non-negative values); nothing rounds to nearest.

use super::combatant::Player;
use super::status::{StatusKind, StatusLedger};
use crate::cards::{CardInstance, HandPassiveKind};
use crate::skills::PassiveTag;

/// Final damage for a player-sourced damage effect.
#[must_use]
pub fn player_damage(
    base: i32,
    player: &Player,
    hand: &[CardInstance],
    target: &StatusLedger,
) -> i32 {
    let mut dmg = base + player.statuses.get(StatusKind::Strength);

    if player.has_passive(PassiveTag::DamageBoost) {
        dmg += 1;
    }

    dmg += hand_damage_bonus(hand);

    if player.statuses.has(StatusKind::DoubleNextAttack) {
        dmg *= 2;
    }
    if player.statuses.has(StatusKind::Weak) {
        dmg = dmg * 3 / 4;
    }
    if target.has(StatusKind::Vulnerable) {
        dmg = dmg * 3 / 2;
    }

    dmg.max(0)
}

/// Final damage for an enemy-sourced attack against the player.
#[must_use]
pub fn enemy_damage(base: i32, source: &StatusLedger, target: &StatusLedger) -> i32 {
    let mut dmg = base + source.get(StatusKind::Strength);

    if source.has(StatusKind::Weak) {
        dmg = dmg * 3 / 4;
    }
    if target.has(StatusKind::Vulnerable) {
        dmg = dmg * 3 / 2;
    }

    dmg.max(0)
}

/// Sum of DamageBoost hand passives across cards currently in hand.
#[must_use]
pub fn hand_damage_bonus(hand: &[CardInstance]) -> i32 {
    hand.iter()
        .filter_map(|card| card.template.hand_passive.as_ref())
        .filter(|p| p.kind == HandPassiveKind::DamageBoost)
        .map(|p| p.value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardTemplate, CardType, HandPassive, TemplateId};
    use crate::core::CardInstanceId;
    use crate::effects::Effect;
    use crate::skills::{Skill, SkillId};

    fn bare_player() -> Player {
        Player::new(50, 3, 4)
    }

    fn boost_card(value: i32) -> CardInstance {
        let template = CardTemplate::new(TemplateId::new(900), "Totem", 1, CardType::Power)
            .with_effect(Effect::block(1))
            .with_hand_passive(HandPassive {
                kind: HandPassiveKind::DamageBoost,
                value,
            });
        CardInstance::new(CardInstanceId::new(1), template)
    }

    #[test]
    fn test_base_damage() {
        let p = bare_player();
        assert_eq!(player_damage(6, &p, &[], &StatusLedger::new()), 6);
    }

    #[test]
    fn test_strength_adds() {
        let mut p = bare_player();
        p.statuses.apply(StatusKind::Strength, 3);
        assert_eq!(player_damage(6, &p, &[], &StatusLedger::new()), 9);
    }

    #[test]
    fn test_passive_skill_adds_one() {
        let mut p = bare_player();
        p.skills.push(Skill::passive(
            SkillId::new(1),
            "Arcane Surge",
            "🔮",
            PassiveTag::DamageBoost,
        ));
        assert_eq!(player_damage(6, &p, &[], &StatusLedger::new()), 7);
    }

    #[test]
    fn test_hand_passive_adds() {
        let p = bare_player();
        let hand = vec![boost_card(1), boost_card(2)];
        assert_eq!(player_damage(6, &p, &hand, &StatusLedger::new()), 9);
    }

    #[test]
    fn test_double_before_weak() {
        let mut p = bare_player();
        p.statuses.apply(StatusKind::DoubleNextAttack, 1);
        p.statuses.apply(StatusKind::Weak, 1);
        // (6 * 2) * 0.75 = 9, not floor(6 * 0.75) * 2 = 8
        assert_eq!(player_damage(6, &p, &[], &StatusLedger::new()), 9);
    }

    #[test]
    fn test_weak_floors() {
        let mut p = bare_player();
        p.statuses.apply(StatusKind::Weak, 1);
        // 7 * 0.75 = 5.25 -> 5
        assert_eq!(player_damage(7, &p, &[], &StatusLedger::new()), 5);
    }

    #[test]
    fn test_vulnerable_floors() {
        let p = bare_player();
        let mut target = StatusLedger::new();
        target.apply(StatusKind::Vulnerable, 1);
        // 5 * 1.5 = 7.5 -> 7
        assert_eq!(player_damage(5, &p, &[], &target), 7);
    }

    #[test]
    fn test_full_pipeline_order() {
        let mut p = bare_player();
        p.statuses.apply(StatusKind::Strength, 2);
        p.statuses.apply(StatusKind::DoubleNextAttack, 1);
        let hand = vec![boost_card(1)];
        let mut target = StatusLedger::new();
        target.apply(StatusKind::Vulnerable, 1);

        // ((6 + 2 + 1) * 2) * 1.5 = 27
        assert_eq!(player_damage(6, &p, &hand, &target), 27);
    }

    #[test]
    fn test_enemy_damage_ignores_player_mechanics() {
        let mut source = StatusLedger::new();
        source.apply(StatusKind::Strength, 2);
        // Enemies have no hand passives or DoubleNextAttack path.
        assert_eq!(enemy_damage(6, &source, &StatusLedger::new()), 8);
    }

    #[test]
    fn test_enemy_weak_then_vulnerable() {
        let mut source = StatusLedger::new();
        source.apply(StatusKind::Weak, 1);
        let mut target = StatusLedger::new();
        target.apply(StatusKind::Vulnerable, 1);
        // floor(10 * 0.75) = 7, floor(7 * 1.5) = 10
        assert_eq!(enemy_damage(10, &source, &target), 10);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_monotone_in_strength(base in 0i32..40, strength in 0i32..20) {
                let target = StatusLedger::new();
                let mut weaker = bare_player();
                weaker.statuses.apply(StatusKind::Strength, strength);
                let mut stronger = bare_player();
                stronger.statuses.apply(StatusKind::Strength, strength + 1);

                prop_assert!(
                    player_damage(base, &stronger, &[], &target)
                        >= player_damage(base, &weaker, &[], &target)
                );
            }

            #[test]
            fn prop_vulnerable_never_decreases_damage(base in 0i32..40, stacks in 1i32..5) {
                let p = bare_player();
                let plain = StatusLedger::new();
                let mut vulnerable = StatusLedger::new();
                vulnerable.apply(StatusKind::Vulnerable, stacks);

                prop_assert!(
                    player_damage(base, &p, &[], &vulnerable)
                        >= player_damage(base, &p, &[], &plain)
                );
            }
        }
    }
}
