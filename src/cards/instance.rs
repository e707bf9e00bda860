//! Card instances - run-unique copies of templates.
//!
//! A deck may contain ten Fireballs; each copy is its own instance with its
//! own ID. An instance belongs to exactly one of the three piles (draw,
//! hand, discard) at any moment.

use serde::{Deserialize, Serialize};

use super::template::{CardTemplate, CardType, GroupTag, HandPassive, TemplateId};
use crate::core::CardInstanceId;

/// A card instance: a template copy with a run-unique ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique instance ID for the whole run.
    pub instance_id: CardInstanceId,

    /// The template this instance was stamped from.
    pub template: CardTemplate,
}

impl CardInstance {
    /// Create an instance of a template.
    #[must_use]
    pub fn new(instance_id: CardInstanceId, template: CardTemplate) -> Self {
        Self {
            instance_id,
            template,
        }
    }

    /// Template identity of this instance.
    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.template.id
    }

    /// Energy cost to play.
    #[must_use]
    pub fn cost(&self) -> i32 {
        self.template.cost
    }

    /// Card category.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.template.card_type
    }

    /// Combo group, if any.
    #[must_use]
    pub fn group_tag(&self) -> Option<GroupTag> {
        self.template.group_tag
    }

    /// In-hand passive, if any.
    #[must_use]
    pub fn hand_passive(&self) -> Option<HandPassive> {
        self.template.hand_passive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardType;
    use crate::effects::Effect;

    #[test]
    fn test_instance_identity() {
        let template = CardTemplate::new(TemplateId::new(1), "Strike", 1, CardType::Attack)
            .with_effect(Effect::damage(6));

        let a = CardInstance::new(CardInstanceId::new(10), template.clone());
        let b = CardInstance::new(CardInstanceId::new(11), template);

        assert_eq!(a.template_id(), b.template_id());
        assert_ne!(a.instance_id, b.instance_id);
        assert_eq!(a.cost(), 1);
        assert_eq!(a.card_type(), CardType::Attack);
    }
}
