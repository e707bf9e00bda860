//! Draw pile, hand, and discard pile.
//!
//! The three piles partition the deck: every card instance lives in exactly
//! one of them, and the sum of their lengths is constant across all draw and
//! discard operations within a level. The top of the draw pile is the end of
//! its `Vec`.
//!
//! Draws that find the draw pile empty reshuffle the discard pile back in
//! and continue. A draw with both piles empty yields fewer cards than asked,
//! which is the documented behavior rather than an error.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, TemplateId};
use crate::core::{CardInstanceId, GameRng};

/// The three deck piles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Piles {
    pub draw_pile: Vec<CardInstance>,
    pub hand: Vec<CardInstance>,
    pub discard_pile: Vec<CardInstance>,
}

impl Piles {
    /// Deal a level's opening piles.
    ///
    /// The deck is shuffled into the draw pile, the fixed starting hand is
    /// pulled out by first template match (missing templates are silently
    /// skipped), and the hand is topped up to `draw_count`.
    #[must_use]
    pub fn deal(
        deck: Vec<CardInstance>,
        fixed_starting_hand: &[TemplateId],
        draw_count: usize,
        rng: &mut GameRng,
    ) -> Self {
        let mut piles = Self {
            draw_pile: deck,
            hand: Vec::new(),
            discard_pile: Vec::new(),
        };
        rng.shuffle(&mut piles.draw_pile);

        for template_id in fixed_starting_hand {
            if let Some(pos) = piles
                .draw_pile
                .iter()
                .position(|c| c.template_id() == *template_id)
            {
                let card = piles.draw_pile.remove(pos);
                piles.hand.push(card);
            }
        }

        piles.top_up(draw_count, rng);
        piles
    }

    /// Draw one card into the hand, reshuffling the discard pile if needed.
    ///
    /// Returns `false` when both piles are exhausted.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> bool {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return false;
            }
            self.draw_pile.append(&mut self.discard_pile);
            rng.shuffle(&mut self.draw_pile);
        }
        match self.draw_pile.pop() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Draw up to `count` cards.
    ///
    /// Returns how many were actually drawn.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            if !self.draw_one(rng) {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Top the hand up to `target` cards. Never discards down.
    pub fn top_up(&mut self, target: usize, rng: &mut GameRng) {
        while self.hand.len() < target {
            if !self.draw_one(rng) {
                break;
            }
        }
    }

    /// Remove a specific card from the hand.
    pub fn remove_from_hand(&mut self, id: CardInstanceId) -> Option<CardInstance> {
        let pos = self.hand.iter().position(|c| c.instance_id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: CardInstance) {
        self.discard_pile.push(card);
    }

    /// Look up a hand card without moving it.
    #[must_use]
    pub fn hand_card(&self, id: CardInstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance_id == id)
    }

    /// All hand cards sharing a group tag with the given card, the card
    /// itself first.
    #[must_use]
    pub fn combo_batch(&self, id: CardInstanceId) -> Vec<CardInstanceId> {
        let Some(lead) = self.hand_card(id) else {
            return Vec::new();
        };
        let Some(tag) = lead.group_tag() else {
            return vec![id];
        };
        let mut batch = vec![id];
        batch.extend(
            self.hand
                .iter()
                .filter(|c| c.instance_id != id && c.group_tag() == Some(tag))
                .map(|c| c.instance_id),
        );
        batch
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len()
    }
}
