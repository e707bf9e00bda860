//! Effect resolution against game state.
//!
//! The resolver applies one effect payload at a time. It owns the block
//! absorption rule (through `take_damage`) and the DoubleNextAttack
//! consumption rule, and it emits feedback events for every visible change.
//!
//! A payload whose chosen target died between declaration and resolution is
//! skipped silently. Partial plays do not exist: the play's logical cost
//! (energy, card movement) was already paid synchronously when the command
//! was accepted, and a dead target only wastes the payload.

use crate::combat::{damage, StatusKind};
use crate::core::EntityId;
use crate::engine::{FeedbackTarget, GameState, TextTone, VfxKind};

use super::{Effect, EffectKind, EffectSource, Target};

/// Applies effect payloads to state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one effect.
    ///
    /// `chosen` carries the enemy picked at play time for single-target
    /// effects; other targets ignore it.
    pub fn resolve(
        state: &mut GameState,
        effect: Effect,
        source: EffectSource,
        chosen: Option<EntityId>,
    ) {
        match effect.target {
            Target::Player => Self::resolve_on_player(state, effect.kind, source),
            Target::SingleEnemy => {
                if let Some(id) = chosen.filter(|id| state.is_valid_target(*id)) {
                    Self::resolve_on_enemy(state, id, effect.kind);
                }
            }
            Target::AllEnemies => {
                for id in state.living_enemy_ids() {
                    Self::resolve_on_enemy(state, id, effect.kind);
                }
            }
            Target::RandomEnemy => {
                let living = state.living_enemy_ids();
                if let Some(&id) = state.rng.choose(&living) {
                    Self::resolve_on_enemy(state, id, effect.kind);
                }
            }
        }
    }

    /// Remove the player's DoubleNextAttack stacks.
    ///
    /// Scheduled to land after the doubled play's own damage payloads, so
    /// the play it doubled still sees the status while later plays do not.
    pub fn consume_double_attack(state: &mut GameState) {
        state.player.statuses.remove(StatusKind::DoubleNextAttack);
    }

    fn resolve_on_player(state: &mut GameState, kind: EffectKind, source: EffectSource) {
        let text_expiry = state.now_ms + state.config.floating_text_lifetime_ms;
        let vfx_expiry = state.now_ms + state.config.vfx_lifetime_ms;
        match kind {
            EffectKind::Damage(base) => {
                // Damage aimed at the player only comes from enemy acts.
                let EffectSource::Enemy(attacker) = source else {
                    return;
                };
                let Some(enemy) = state.enemy(attacker) else {
                    return;
                };
                let dmg = damage::enemy_damage(base, &enemy.statuses, &state.player.statuses);
                let outcome = state.player.take_damage(dmg);
                if outcome.landed > 0 {
                    state.feedback.push_text(
                        FeedbackTarget::Player,
                        format!("-{}", outcome.landed),
                        TextTone::Damage,
                        text_expiry,
                    );
                    state
                        .feedback
                        .push_vfx(FeedbackTarget::Player, VfxKind::Shake, vfx_expiry);
                } else {
                    state.feedback.push_text(
                        FeedbackTarget::Player,
                        "Blocked",
                        TextTone::Block,
                        text_expiry,
                    );
                }
            }
            EffectKind::Block(value) => {
                state.player.gain_block(value);
                state.feedback.push_text(
                    FeedbackTarget::Player,
                    format!("+{value} Block"),
                    TextTone::Block,
                    text_expiry,
                );
            }
            EffectKind::Heal(value) => {
                let healed = state.player.heal(value);
                if healed > 0 {
                    state.feedback.push_text(
                        FeedbackTarget::Player,
                        format!("+{healed}"),
                        TextTone::Heal,
                        text_expiry,
                    );
                }
            }
            EffectKind::Draw(count) => {
                state.piles.draw(count as usize, &mut state.rng);
            }
            EffectKind::GainEnergy(value) => {
                state.player.current_energy += value;
            }
            EffectKind::ApplyStatus { status, value } => {
                state.player.statuses.apply(status, value);
                state.feedback.push_text(
                    FeedbackTarget::Player,
                    format!("+{value} {}", status.name()),
                    TextTone::Status,
                    text_expiry,
                );
            }
        }
    }

    fn resolve_on_enemy(state: &mut GameState, id: EntityId, kind: EffectKind) {
        let text_expiry = state.now_ms + state.config.floating_text_lifetime_ms;
        let vfx_expiry = state.now_ms + state.config.vfx_lifetime_ms;
        match kind {
            EffectKind::Damage(base) => {
                let dmg = {
                    let Some(enemy) = state.enemy(id) else { return };
                    damage::player_damage(base, &state.player, &state.piles.hand, &enemy.statuses)
                };
                let Some(enemy) = state.enemy_mut(id) else {
                    return;
                };
                let outcome = enemy.take_damage(dmg);
                if outcome.landed > 0 {
                    state.feedback.push_text(
                        FeedbackTarget::Enemy(id),
                        format!("-{}", outcome.landed),
                        TextTone::Damage,
                        text_expiry,
                    );
                    state
                        .feedback
                        .push_vfx(FeedbackTarget::Enemy(id), VfxKind::Shake, vfx_expiry);
                } else {
                    state.feedback.push_text(
                        FeedbackTarget::Enemy(id),
                        "Blocked",
                        TextTone::Block,
                        text_expiry,
                    );
                }
            }
            EffectKind::ApplyStatus { status, value } => {
                let Some(enemy) = state.enemy_mut(id) else {
                    return;
                };
                enemy.statuses.apply(status, value);
                state.feedback.push_text(
                    FeedbackTarget::Enemy(id),
                    format!("+{value} {}", status.name()),
                    TextTone::Status,
                    text_expiry,
                );
                state
                    .feedback
                    .push_vfx(FeedbackTarget::Enemy(id), VfxKind::Flash, vfx_expiry);
            }
            // Player-only operations aimed at an enemy do nothing.
            EffectKind::Block(_)
            | EffectKind::Heal(_)
            | EffectKind::Draw(_)
            | EffectKind::GainEnergy(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Intent;
    use crate::combat::Enemy;
    use crate::core::EngineConfig;

    fn state_with_enemy(hp: i32) -> (GameState, EntityId) {
        let mut state = GameState::new(EngineConfig::default(), 1);
        state.player = crate::combat::Player::new(50, 3, 4);
        let id = state.mint_entity_id();
        let mut enemy = Enemy::new(id, "Dummy", "🎯", "", hp, false);
        enemy.intent = Intent::Attack;
        state.enemies.push(enemy);
        (state, id)
    }

    #[test]
    fn test_damage_lands_on_chosen_enemy() {
        let (mut state, id) = state_with_enemy(20);
        EffectResolver::resolve(&mut state, Effect::damage(6), EffectSource::Card, Some(id));
        assert_eq!(state.enemy(id).unwrap().current_hp, 14);
    }

    #[test]
    fn test_dead_target_is_skipped() {
        let (mut state, id) = state_with_enemy(20);
        state.enemy_mut(id).unwrap().current_hp = 0;
        EffectResolver::resolve(&mut state, Effect::damage(6), EffectSource::Card, Some(id));
        assert_eq!(state.enemy(id).unwrap().current_hp, 0);
    }

    #[test]
    fn test_enemy_block_absorbs_first() {
        let (mut state, id) = state_with_enemy(20);
        state.enemy_mut(id).unwrap().block = 4;
        EffectResolver::resolve(&mut state, Effect::damage(6), EffectSource::Card, Some(id));
        let enemy = state.enemy(id).unwrap();
        assert_eq!(enemy.block, 0);
        assert_eq!(enemy.current_hp, 18);
    }

    #[test]
    fn test_all_enemies_hit() {
        let (mut state, first) = state_with_enemy(10);
        let second = state.mint_entity_id();
        state
            .enemies
            .push(Enemy::new(second, "Other", "👾", "", 10, false));
        EffectResolver::resolve(&mut state, Effect::damage_all(4), EffectSource::Card, None);
        assert_eq!(state.enemy(first).unwrap().current_hp, 6);
        assert_eq!(state.enemy(second).unwrap().current_hp, 6);
    }

    #[test]
    fn test_enemy_attack_respects_player_block() {
        let (mut state, id) = state_with_enemy(20);
        state.player.block = 4;
        EffectResolver::resolve(
            &mut state,
            Effect {
                kind: EffectKind::Damage(7),
                target: Target::Player,
            },
            EffectSource::Enemy(id),
            None,
        );
        assert_eq!(state.player.block, 0);
        assert_eq!(state.player.current_hp, 47);
    }

    #[test]
    fn test_consume_double_attack() {
        let (mut state, id) = state_with_enemy(30);
        state.player.statuses.apply(StatusKind::DoubleNextAttack, 1);

        EffectResolver::resolve(&mut state, Effect::damage(6), EffectSource::Card, Some(id));
        assert_eq!(state.enemy(id).unwrap().current_hp, 18);

        EffectResolver::consume_double_attack(&mut state);
        EffectResolver::resolve(&mut state, Effect::damage(6), EffectSource::Card, Some(id));
        assert_eq!(state.enemy(id).unwrap().current_hp, 12);
    }

    #[test]
    fn test_heal_is_capped() {
        let (mut state, _) = state_with_enemy(10);
        state.player.current_hp = 48;
        EffectResolver::resolve(&mut state, Effect::heal(5), EffectSource::Card, None);
        assert_eq!(state.player.current_hp, 50);
    }
}
