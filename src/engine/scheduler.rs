//! Virtual-clock scheduler for deferred effect work.
//!
//! Artificial delays stagger visible feedback; they never change outcomes.
//! Tasks execute in `(due_ms, seq)` order, where `seq` is the scheduling
//! order, so two tasks due at the same instant resolve in the order they
//! were declared. Tests run the clock forward with `advance` or jump it
//! straight to the next due time, and final state is identical either way.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::effects::{Effect, EffectSource};

/// Deferred work item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Task {
    /// Apply one effect payload.
    ResolveEffect {
        effect: Effect,
        source: EffectSource,
        chosen: Option<EntityId>,
    },
    /// Remove the player's DoubleNextAttack stacks after a doubled play.
    ConsumeDoubleAttack,
    /// Execute the next enemy in the acting queue.
    EnemyAct,
    /// Transition to the reward phase after the victory delay.
    EnterReward,
    /// Force end of turn if the player still has no playable action.
    AutoPass { token: u64 },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Entry {
    due_ms: u64,
    seq: u64,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

/// Priority queue of tasks on a virtual millisecond clock.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Schedule a task `delay_ms` from now.
    pub fn schedule_in(&mut self, delay_ms: u64, task: Task) {
        let entry = Entry {
            due_ms: self.now_ms + delay_ms,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Advance the clock. Due tasks become poppable, not executed.
    pub fn advance(&mut self, dt_ms: u64) {
        self.now_ms += dt_ms;
    }

    /// Jump the clock forward to `at_ms` if that is in the future.
    pub fn jump_to(&mut self, at_ms: u64) {
        self.now_ms = self.now_ms.max(at_ms);
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(e)| e.due_ms)
    }

    /// Pop the earliest task that is due at the current time.
    pub fn pop_due(&mut self) -> Option<Task> {
        if self.next_due()? <= self.now_ms {
            self.queue.pop().map(|Reverse(e)| e.task)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop all pending tasks. The clock keeps its position.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    fn effect_task(value: i32) -> Task {
        Task::ResolveEffect {
            effect: Effect::damage_all(value),
            source: EffectSource::Card,
            chosen: None,
        }
    }

    #[test]
    fn test_nothing_due_before_time() {
        let mut s = Scheduler::new();
        s.schedule_in(300, effect_task(1));
        assert!(s.pop_due().is_none());

        s.advance(299);
        assert!(s.pop_due().is_none());

        s.advance(1);
        assert!(s.pop_due().is_some());
        assert!(s.is_idle());
    }

    #[test]
    fn test_same_due_preserves_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule_in(100, effect_task(1));
        s.schedule_in(100, Task::ConsumeDoubleAttack);
        s.schedule_in(100, effect_task(3));

        s.advance(100);
        assert_eq!(s.pop_due(), Some(effect_task(1)));
        assert_eq!(s.pop_due(), Some(Task::ConsumeDoubleAttack));
        assert_eq!(s.pop_due(), Some(effect_task(3)));
    }

    #[test]
    fn test_earlier_due_wins_regardless_of_insert_order() {
        let mut s = Scheduler::new();
        s.schedule_in(500, effect_task(1));
        s.schedule_in(200, effect_task(2));

        s.advance(500);
        assert_eq!(s.pop_due(), Some(effect_task(2)));
        assert_eq!(s.pop_due(), Some(effect_task(1)));
    }

    #[test]
    fn test_jump_to_never_rewinds() {
        let mut s = Scheduler::new();
        s.advance(400);
        s.jump_to(100);
        assert_eq!(s.now(), 400);
        s.jump_to(900);
        assert_eq!(s.now(), 900);
    }
}
