//! Entity identification.
//!
//! Two ID spaces exist in a run:
//! - `EntityId` for combatants. The player is always entity 0; enemies are
//!   allocated from a counter on the game state.
//! - `CardInstanceId` for card instances. A template can appear many times
//!   in a deck; every copy gets its own instance ID for its whole run.

use serde::{Deserialize, Serialize};

/// Unique identifier for a combatant.
///
/// Entity 0 is reserved for the player; enemies get IDs from 1 upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The player's entity ID.
    pub const PLAYER: EntityId = EntityId(0);

    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this ID refers to the player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 == 0
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_player() {
            write!(f, "Player")
        } else {
            write!(f, "Enemy({})", self.0)
        }
    }
}

/// Unique identifier for a card instance within a run.
///
/// Instances in the draw pile, hand, and discard pile all carry one of
/// these; the three piles partition the deck with no duplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl CardInstanceId {
    /// Create a new card instance ID.
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

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardInstance({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_entity() {
        assert!(EntityId::PLAYER.is_player());
        assert!(!EntityId::new(1).is_player());
        assert_eq!(EntityId::PLAYER.raw(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId::PLAYER), "Player");
        assert_eq!(format!("{}", EntityId::new(3)), "Enemy(3)");
        assert_eq!(format!("{}", CardInstanceId::new(42)), "CardInstance(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
