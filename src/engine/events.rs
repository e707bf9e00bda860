//! Feedback stream for a presentation layer.
//!
//! The engine never draws anything. Damage numbers, heals, status popups,
//! shakes and flashes are appended here with an expiry on the virtual clock;
//! a renderer reads them from the snapshot and the engine prunes expired
//! entries as the clock advances.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

/// Who a feedback event is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTarget {
    Player,
    Enemy(EntityId),
}

/// Visual tone of a floating text entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextTone {
    Damage,
    Heal,
    Block,
    Status,
    Info,
}

/// A short-lived text popup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatingText {
    pub target: FeedbackTarget,
    pub text: String,
    pub tone: TextTone,
    pub expires_at_ms: u64,
}

/// Kind of a visual effect request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VfxKind {
    /// Impact shake on the target.
    Shake,
    /// Hit flash on the target.
    Flash,
    /// Buff/summon sparkle on the target.
    Sparkle,
}

/// A short-lived visual effect request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfxEvent {
    pub target: FeedbackTarget,
    pub kind: VfxKind,
    pub expires_at_ms: u64,
}

/// Pending feedback, pruned against the virtual clock.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackQueue {
    pub texts: Vec<FloatingText>,
    pub vfx: Vec<VfxEvent>,
}

impl FeedbackQueue {
    pub fn push_text(
        &mut self,
        target: FeedbackTarget,
        text: impl Into<String>,
        tone: TextTone,
        expires_at_ms: u64,
    ) {
        self.texts.push(FloatingText {
            target,
            text: text.into(),
            tone,
            expires_at_ms,
        });
    }

    pub fn push_vfx(&mut self, target: FeedbackTarget, kind: VfxKind, expires_at_ms: u64) {
        self.vfx.push(VfxEvent {
            target,
            kind,
            expires_at_ms,
        });
    }

    /// Drop everything that has expired at `now_ms`.
    pub fn prune(&mut self, now_ms: u64) {
        self.texts.retain(|t| t.expires_at_ms > now_ms);
        self.vfx.retain(|v| v.expires_at_ms > now_ms);
    }

    pub fn clear(&mut self) {
        self.texts.clear();
        self.vfx.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_drops_expired() {
        let mut q = FeedbackQueue::default();
        q.push_text(FeedbackTarget::Player, "-5", TextTone::Damage, 1200);
        q.push_text(FeedbackTarget::Player, "+3", TextTone::Heal, 800);
        q.push_vfx(FeedbackTarget::Player, VfxKind::Shake, 500);

        q.prune(800);
        assert_eq!(q.texts.len(), 1);
        assert!(q.vfx.is_empty());

        q.prune(1200);
        assert!(q.texts.is_empty());
    }
}
