//! Card templates - static card data.
//!
//! A `CardTemplate` holds the immutable properties of a card: cost, type,
//! effects, theme, and optional combo/hand-passive markers. Run state
//! (which pile a copy sits in) lives on `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Unique identifier for a card template.
///
/// Identifies the "kind" of card (e.g. Fireball), not a specific copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
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

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Deals damage; interacts with DoubleNextAttack.
    Attack,
    /// Utility: block, heal, draw, energy, statuses.
    Skill,
    /// Passive-leaning cards (hand passives and the like).
    Power,
}

/// Visual theme, opaque to the engine but carried through to VFX events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTheme {
    Physical,
    Fire,
    Ice,
    Poison,
    Holy,
    Dark,
}

/// Shared identifier letting several hand cards be played together as one
/// combo batch against a single target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupTag(pub u32);

impl GroupTag {
    /// Create a new group tag.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// What a hand passive does while its card stays in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandPassiveKind {
    /// Adds to every player damage effect while in hand.
    DamageBoost,
    /// Heals the player when the turn ends with this card in hand.
    HealOnTurnEnd,
    /// Grants block when the turn ends with this card in hand.
    BlockOnTurnEnd,
}

/// A passive bonus that applies only while the card physically remains in
/// hand (not yet played).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPassive {
    pub kind: HandPassiveKind,
    pub value: i32,
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use emberdeck::cards::{CardTemplate, CardTheme, CardType, TemplateId};
/// use emberdeck::effects::Effect;
///
/// let fireball = CardTemplate::new(TemplateId::new(1), "Fireball", 1, CardType::Attack)
///     .with_theme(CardTheme::Fire)
///     .with_effect(Effect::damage(6));
///
/// assert_eq!(fireball.cost, 1);
/// assert_eq!(fireball.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this template.
    pub id: TemplateId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Display emoji.
    pub emoji: String,

    /// Energy cost to play.
    pub cost: i32,

    /// Card category.
    pub card_type: CardType,

    /// Visual theme carried through to VFX events.
    pub theme: Option<CardTheme>,

    /// Effects resolved in declaration order when played.
    pub effects: SmallVec<[Effect; 2]>,

    /// Combo batch marker.
    pub group_tag: Option<GroupTag>,

    /// Bonus active while the card stays in hand.
    pub hand_passive: Option<HandPassive>,
}

impl CardTemplate {
    /// Create a new template with no effects.
    #[must_use]
    pub fn new(id: TemplateId, name: impl Into<String>, cost: i32, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: String::new(),
            cost,
            card_type,
            theme: None,
            effects: SmallVec::new(),
            group_tag: None,
            hand_passive: None,
        }
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the visual theme.
    #[must_use]
    pub fn with_theme(mut self, theme: CardTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the display emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Set the combo group tag.
    #[must_use]
    pub fn with_group_tag(mut self, tag: GroupTag) -> Self {
        self.group_tag = Some(tag);
        self
    }

    /// Set the hand passive.
    #[must_use]
    pub fn with_hand_passive(mut self, passive: HandPassive) -> Self {
        self.hand_passive = Some(passive);
        self
    }

    /// Whether any effect needs an explicit single-enemy target.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.target == crate::effects::Target::SingleEnemy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Effect;

    #[test]
    fn test_builder() {
        let card = CardTemplate::new(TemplateId::new(1), "Strike", 1, CardType::Attack)
            .with_theme(CardTheme::Physical)
            .with_emoji("👊")
            .with_effect(Effect::damage(6));

        assert_eq!(card.name, "Strike");
        assert_eq!(card.cost, 1);
        assert_eq!(card.theme, Some(CardTheme::Physical));
        assert!(card.needs_target());
    }

    #[test]
    fn test_needs_target() {
        let aoe = CardTemplate::new(TemplateId::new(2), "Nova", 2, CardType::Attack)
            .with_effect(Effect::damage_all(4));
        assert!(!aoe.needs_target());

        let shield = CardTemplate::new(TemplateId::new(3), "Shield", 1, CardType::Skill)
            .with_effect(Effect::block(6));
        assert!(!shield.needs_target());
    }

    #[test]
    fn test_serialization() {
        let card = CardTemplate::new(TemplateId::new(1), "Strike", 1, CardType::Attack)
            .with_effect(Effect::damage(6));
        let json = serde_json::to_string(&card).unwrap();
        let back: CardTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
