//! Timed status effects.
//!
//! Statuses stack by numeric addition when the same kind is reapplied, and
//! decay by one at the start of each player turn. Two kinds are exempt from
//! decay: Strength (permanent until changed) and DoubleNextAttack (consumed
//! by the next attack card instead).
//!
//! Pruning quirk: entries at value <= 0 are removed, except Strength, which
//! persists at zero as a no-op record. This asymmetry is intentional -
//! Strength never "disappears", it only floors at zero.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The kinds of status a combatant can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Takes 1.5x damage (floored).
    Vulnerable,
    /// Deals 0.75x damage (floored).
    Weak,
    /// Flat bonus added to every damage effect.
    Strength,
    /// Loses its value in HP at the start of its owner's turn, bypassing block.
    Burn,
    /// A frozen enemy skips its action for the turn.
    Freeze,
    /// The next attack card deals double damage, then the status is consumed.
    DoubleNextAttack,
}

impl StatusKind {
    /// Whether this kind ticks down at the start of the player turn.
    #[must_use]
    pub const fn decays(self) -> bool {
        !matches!(self, StatusKind::Strength | StatusKind::DoubleNextAttack)
    }

    /// Display name used in feedback popups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusKind::Vulnerable => "Vulnerable",
            StatusKind::Weak => "Weak",
            StatusKind::Strength => "Strength",
            StatusKind::Burn => "Burn",
            StatusKind::Freeze => "Freeze",
            StatusKind::DoubleNextAttack => "Double Attack",
        }
    }
}

/// A single status entry: kind plus stack value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub kind: StatusKind,
    pub value: i32,
}

/// Per-combatant collection of statuses.
///
/// Backed by a SmallVec: combatants rarely carry more than a handful of
/// statuses at once, so the common case never allocates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLedger {
    entries: SmallVec<[Status; 4]>,
}

impl StatusLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a status, stacking by addition if the kind is already present.
    pub fn apply(&mut self, kind: StatusKind, value: i32) {
        if let Some(existing) = self.entries.iter_mut().find(|s| s.kind == kind) {
            existing.value += value;
        } else {
            self.entries.push(Status { kind, value });
        }
    }

    /// Get the stack value of a kind, or 0 if absent.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> i32 {
        self.entries
            .iter()
            .find(|s| s.kind == kind)
            .map_or(0, |s| s.value)
    }

    /// Check if a kind is present (at any value, including Strength at 0).
    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.entries.iter().any(|s| s.kind == kind)
    }

    /// Remove a kind entirely. Returns true if it was present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.kind != kind);
        self.entries.len() != before
    }

    /// Start-of-turn decay: decaying kinds tick down by 1, then entries at
    /// value <= 0 are pruned - except Strength, which is kept at zero.
    pub fn tick_decay(&mut self) {
        for status in self.entries.iter_mut() {
            if status.kind.decays() {
                status.value = (status.value - 1).max(0);
            }
        }
        self.entries
            .retain(|s| s.value > 0 || s.kind == StatusKind::Strength);
    }

    /// Iterate over entries.
    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.entries.iter()
    }

    /// Check if no statuses are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_stacks() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Vulnerable, 2);
        ledger.apply(StatusKind::Vulnerable, 3);

        assert_eq!(ledger.get(StatusKind::Vulnerable), 5);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_get_absent_is_zero() {
        let ledger = StatusLedger::new();
        assert_eq!(ledger.get(StatusKind::Weak), 0);
        assert!(!ledger.has(StatusKind::Weak));
    }

    #[test]
    fn test_decay_prunes_at_zero() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Weak, 1);
        ledger.apply(StatusKind::Vulnerable, 2);

        ledger.tick_decay();

        assert!(!ledger.has(StatusKind::Weak));
        assert_eq!(ledger.get(StatusKind::Vulnerable), 1);
    }

    #[test]
    fn test_strength_does_not_decay() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Strength, 3);

        ledger.tick_decay();
        ledger.tick_decay();

        assert_eq!(ledger.get(StatusKind::Strength), 3);
    }

    #[test]
    fn test_strength_persists_at_zero() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::Strength, 2);
        ledger.apply(StatusKind::Strength, -2);

        ledger.tick_decay();

        // Every other kind would be pruned; Strength stays as a zero record.
        assert!(ledger.has(StatusKind::Strength));
        assert_eq!(ledger.get(StatusKind::Strength), 0);
    }

    #[test]
    fn test_double_next_attack_does_not_decay() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::DoubleNextAttack, 1);

        ledger.tick_decay();

        assert!(ledger.has(StatusKind::DoubleNextAttack));
        assert_eq!(ledger.get(StatusKind::DoubleNextAttack), 1);
    }

    #[test]
    fn test_remove() {
        let mut ledger = StatusLedger::new();
        ledger.apply(StatusKind::DoubleNextAttack, 1);

        assert!(ledger.remove(StatusKind::DoubleNextAttack));
        assert!(!ledger.has(StatusKind::DoubleNextAttack));
        assert!(!ledger.remove(StatusKind::DoubleNextAttack));
    }
}
