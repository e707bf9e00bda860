//! Read-only presentation view.
//!
//! A snapshot is everything a renderer needs for one frame, flattened into
//! plain serializable data. It is captured on demand and never holds a
//! borrow into the engine, so a UI thread can keep one while the engine
//! ticks the next.

use serde::{Deserialize, Serialize};

use crate::ai::Intent;
use crate::cards::{CardInstance, CardType};
use crate::combat::Status;
use crate::core::{CardInstanceId, EntityId, GamePhase, GameRngState};
use crate::skills::{SkillId, SkillKind};

use super::commands::Rewards;
use super::events::{FloatingText, VfxEvent};
use super::state::GameState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub current_hp: i32,
    pub max_hp: i32,
    pub current_energy: i32,
    pub max_energy: i32,
    pub block: i32,
    pub statuses: Vec<Status>,
    pub skills: Vec<SkillView>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillView {
    pub id: SkillId,
    pub name: String,
    pub emoji: String,
    pub passive: bool,
    pub current_cooldown: u32,
    pub usable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub current_hp: i32,
    pub max_hp: i32,
    pub block: i32,
    pub intent: Intent,
    pub intent_value: i32,
    pub is_boss: bool,
    pub statuses: Vec<Status>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub instance_id: CardInstanceId,
    pub name: String,
    pub emoji: String,
    pub cost: i32,
    pub card_type: CardType,
    pub playable: bool,
    pub needs_target: bool,
}

/// A card sitting in the draw or discard pile. No playability flags;
/// those only apply to the hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PileCardView {
    pub instance_id: CardInstanceId,
    pub name: String,
    pub emoji: String,
    pub cost: i32,
    pub card_type: CardType,
}

/// One frame of game state for a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level: u32,
    pub turn_count: u32,
    pub now_ms: u64,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub hand: Vec<CardView>,
    pub draw_pile: Vec<PileCardView>,
    pub discard_pile: Vec<PileCardView>,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub rewards: Option<Rewards>,
    pub floating_texts: Vec<FloatingText>,
    pub vfx: Vec<VfxEvent>,
    pub rng: GameRngState,
    pub best_level: Option<u32>,
}

impl Snapshot {
    /// Flatten the current state.
    #[must_use]
    pub fn capture(state: &GameState, best_level: Option<u32>) -> Self {
        let energy = state.player.current_energy;
        let pile_view = |c: &CardInstance| PileCardView {
            instance_id: c.instance_id,
            name: c.template.name.clone(),
            emoji: c.template.emoji.clone(),
            cost: c.cost(),
            card_type: c.card_type(),
        };
        Self {
            phase: state.phase,
            level: state.level,
            turn_count: state.turn_count,
            now_ms: state.now_ms,
            player: PlayerView {
                current_hp: state.player.current_hp,
                max_hp: state.player.max_hp,
                current_energy: energy,
                max_energy: state.player.max_energy,
                block: state.player.block,
                statuses: state.player.statuses.iter().copied().collect(),
                skills: state
                    .player
                    .skills
                    .iter()
                    .map(|s| SkillView {
                        id: s.id,
                        name: s.name.clone(),
                        emoji: s.emoji.clone(),
                        passive: s.is_passive(),
                        current_cooldown: match &s.kind {
                            SkillKind::Active {
                                current_cooldown, ..
                            } => *current_cooldown,
                            SkillKind::Passive { .. } => 0,
                        },
                        usable: s.usable(energy),
                    })
                    .collect(),
            },
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    name: e.name.clone(),
                    emoji: e.emoji.clone(),
                    description: e.description.clone(),
                    current_hp: e.current_hp,
                    max_hp: e.max_hp,
                    block: e.block,
                    intent: e.intent,
                    intent_value: e.intent_value,
                    is_boss: e.is_boss,
                    statuses: e.statuses.iter().copied().collect(),
                })
                .collect(),
            hand: state
                .piles
                .hand
                .iter()
                .map(|c| CardView {
                    instance_id: c.instance_id,
                    name: c.template.name.clone(),
                    emoji: c.template.emoji.clone(),
                    cost: c.cost(),
                    card_type: c.card_type(),
                    playable: state.phase == GamePhase::PlayerTurn && c.cost() <= energy,
                    needs_target: c.template.needs_target(),
                })
                .collect(),
            draw_pile: state.piles.draw_pile.iter().map(pile_view).collect(),
            discard_pile: state.piles.discard_pile.iter().map(pile_view).collect(),
            draw_pile_count: state.piles.draw_pile.len(),
            discard_pile_count: state.piles.discard_pile.len(),
            rewards: state.rewards.clone(),
            floating_texts: state.feedback.texts.clone(),
            vfx: state.feedback.vfx.clone(),
            rng: state.rng.state(),
            best_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(EngineConfig::default(), 5);
        let snapshot = Snapshot::capture(&state, Some(3));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
