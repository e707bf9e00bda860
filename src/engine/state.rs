//! Complete game state.
//!
//! Everything the rules read or write lives here, behind one `&mut`.
//! The orchestrator in `game.rs` owns the scheduler and collaborators;
//! this struct is the pure data they all operate on, and it serializes
//! whole for snapshot tests.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::TemplateId;
use crate::combat::{Enemy, Player};
use crate::core::{CardInstanceId, EngineConfig, EntityId, GamePhase, GameRng};
use crate::deck::Piles;
use crate::engine::commands::{CommandRecord, Rewards};
use crate::engine::events::FeedbackQueue;

/// All mutable game data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub config: EngineConfig,
    pub phase: GamePhase,
    pub level: u32,
    pub turn_count: u32,
    /// Mirror of the scheduler clock, for feedback expiry stamps.
    pub now_ms: u64,
    pub player: Player,
    /// Defeated enemies stay in the list at 0 HP until the level ends.
    pub enemies: Vec<Enemy>,
    pub piles: Piles,
    /// The run deck as template IDs; instances are minted per level.
    pub deck: Vec<TemplateId>,
    /// Pending reward offer, present only in the Reward phase.
    pub rewards: Option<Rewards>,
    pub feedback: FeedbackQueue,
    /// Append-only log of processed commands.
    pub history: Vector<CommandRecord>,
    pub rng: GameRng,
    next_instance_id: u32,
    next_entity_id: u32,
}

impl GameState {
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            phase: GamePhase::StartScreen,
            level: 1,
            turn_count: 1,
            now_ms: 0,
            player: Player::new(1, 0, 0),
            enemies: Vec::new(),
            piles: Piles::default(),
            deck: Vec::new(),
            rewards: None,
            feedback: FeedbackQueue::default(),
            history: Vector::new(),
            rng: GameRng::new(seed),
            next_instance_id: 0,
            // EntityId 0 is the player.
            next_entity_id: 1,
        }
    }

    pub fn mint_instance_id(&mut self) -> CardInstanceId {
        let id = CardInstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }

    pub fn mint_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    #[must_use]
    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Living enemies in list order.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    #[must_use]
    pub fn living_enemy_ids(&self) -> Vec<EntityId> {
        self.living_enemies().map(|e| e.id).collect()
    }

    #[must_use]
    pub fn living_enemy_count(&self) -> usize {
        self.living_enemies().count()
    }

    /// Victory condition: a non-empty enemy list, all at 0 HP.
    #[must_use]
    pub fn all_enemies_defeated(&self) -> bool {
        !self.enemies.is_empty() && self.enemies.iter().all(|e| !e.is_alive())
    }

    /// Whether the current level hosted a boss.
    #[must_use]
    pub fn boss_present(&self) -> bool {
        self.enemies.iter().any(|e| e.is_boss)
    }

    /// Whether any card or active skill is playable right now.
    ///
    /// Drives the auto-pass rule: a player turn with nothing playable and a
    /// living enemy is ended for the player after a grace delay.
    #[must_use]
    pub fn has_playable_action(&self) -> bool {
        let energy = self.player.current_energy;
        if self.piles.hand.iter().any(|c| c.cost() <= energy) {
            return true;
        }
        self.player.skills.iter().any(|s| s.usable(energy))
    }

    /// Valid target check for single-enemy effects.
    #[must_use]
    pub fn is_valid_target(&self, id: EntityId) -> bool {
        self.enemy(id).is_some_and(|e| e.is_alive())
    }
}
