//! Game phase.
//!
//! Phases form a small state machine:
//!
//! ```text
//! StartScreen -> CharacterSelect -> Loading -> PlayerTurn <-> EnemyTurn
//!                                      ^            |
//!                                      |            v
//!                                      +--------- Reward        GameOver
//! ```
//!
//! `GameOver` is terminal; only a full restart re-enters character select.

use serde::{Deserialize, Serialize};

/// The current phase of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; nothing is in play.
    StartScreen,
    /// Picking a character; deck and skills are decided here.
    CharacterSelect,
    /// Waiting on the enemy profile source for the next level.
    Loading,
    /// The player may play cards and skills.
    PlayerTurn,
    /// Enemies execute their telegraphed intents in order.
    EnemyTurn,
    /// Victory: pick one of the offered rewards (or skip).
    Reward,
    /// Defeat. Terminal.
    GameOver,
}

impl GamePhase {
    /// Check whether this phase is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    /// Check whether combat is in progress.
    #[must_use]
    pub const fn in_combat(self) -> bool {
        matches!(self, GamePhase::PlayerTurn | GamePhase::EnemyTurn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal() {
        assert!(GamePhase::GameOver.is_terminal());
        assert!(!GamePhase::Reward.is_terminal());
        assert!(!GamePhase::PlayerTurn.is_terminal());
    }

    #[test]
    fn test_in_combat() {
        assert!(GamePhase::PlayerTurn.in_combat());
        assert!(GamePhase::EnemyTurn.in_combat());
        assert!(!GamePhase::Loading.in_combat());
        assert!(!GamePhase::Reward.in_combat());
    }
}
