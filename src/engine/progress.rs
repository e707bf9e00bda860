//! Run progress persistence.
//!
//! The engine records the highest level reached whenever a reward is
//! claimed. Storage failures are logged and swallowed; losing a best-level
//! record must never interrupt play.

use tracing::warn;

use crate::error::ProgressError;

/// Where best-level progress is kept.
pub trait ProgressStore {
    fn best_level(&self) -> Result<Option<u32>, ProgressError>;
    fn record_level(&mut self, level: u32) -> Result<(), ProgressError>;
}

/// In-process store, the default for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryProgress {
    best: Option<u32>,
}

impl ProgressStore for MemoryProgress {
    fn best_level(&self) -> Result<Option<u32>, ProgressError> {
        Ok(self.best)
    }

    fn record_level(&mut self, level: u32) -> Result<(), ProgressError> {
        if self.best.map_or(true, |b| level > b) {
            self.best = Some(level);
        }
        Ok(())
    }
}

/// Record a level, logging instead of propagating storage failures.
pub fn record_level_best_effort(store: &mut dyn ProgressStore, level: u32) {
    if let Err(err) = store.record_level(level) {
        warn!(level, %err, "failed to record progress");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_level_only_rises() {
        let mut store = MemoryProgress::default();
        assert_eq!(store.best_level().unwrap(), None);

        store.record_level(3).unwrap();
        store.record_level(2).unwrap();
        assert_eq!(store.best_level().unwrap(), Some(3));

        store.record_level(7).unwrap();
        assert_eq!(store.best_level().unwrap(), Some(7));
    }
}
