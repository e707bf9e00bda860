//! Property tests for the deck piles.
//!
//! Cards are conserved: whatever sequence of draws, discards, and top-ups
//! runs, every instance stays in exactly one of the three piles.

use proptest::prelude::*;

use emberdeck::cards::catalog;
use emberdeck::core::GameRng;
use emberdeck::{CardInstance, CardInstanceId, Piles, TemplateId};

fn build_deck(size: usize) -> Vec<CardInstance> {
    let registry = catalog::registry();
    let pool = catalog::reward_card_pool();
    (0..size)
        .map(|i| {
            let template = registry.get_unchecked(pool[i % pool.len()]).clone();
            CardInstance::new(CardInstanceId::new(i as u32), template)
        })
        .collect()
}

fn instance_ids(piles: &Piles) -> Vec<CardInstanceId> {
    piles
        .draw_pile
        .iter()
        .chain(&piles.hand)
        .chain(&piles.discard_pile)
        .map(|c| c.instance_id)
        .collect()
}

proptest! {
    #[test]
    fn prop_deal_partitions_the_deck(
        deck_size in 0usize..30,
        draw_count in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let piles = Piles::deal(build_deck(deck_size), &[], draw_count, &mut rng);

        prop_assert_eq!(piles.total(), deck_size);
        prop_assert_eq!(piles.hand.len(), draw_count.min(deck_size));
        prop_assert!(piles.discard_pile.is_empty());

        let mut ids = instance_ids(&piles);
        ids.sort_unstable_by_key(|id| id.raw());
        ids.dedup();
        prop_assert_eq!(ids.len(), deck_size);
    }

    #[test]
    fn prop_pile_churn_conserves_cards(
        deck_size in 1usize..25,
        draw_count in 1usize..6,
        ops in prop::collection::vec(0u8..3, 0..60),
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut piles = Piles::deal(build_deck(deck_size), &[], draw_count, &mut rng);

        for op in ops {
            match op {
                0 => {
                    piles.draw_one(&mut rng);
                }
                1 => {
                    if let Some(id) = piles.hand.first().map(|c| c.instance_id) {
                        if let Some(card) = piles.remove_from_hand(id) {
                            piles.discard(card);
                        }
                    }
                }
                _ => piles.top_up(draw_count, &mut rng),
            }

            prop_assert_eq!(piles.total(), deck_size);
            let mut ids = instance_ids(&piles);
            ids.sort_unstable_by_key(|id| id.raw());
            ids.dedup();
            prop_assert_eq!(ids.len(), deck_size);
        }
    }

    #[test]
    fn prop_fixed_hand_pulls_at_most_one_copy_each(
        seed in any::<u64>(),
    ) {
        let registry = catalog::registry();
        let strike = registry.get_unchecked(catalog::STRIKE).clone();
        let deck: Vec<CardInstance> = (0..4)
            .map(|i| CardInstance::new(CardInstanceId::new(i), strike.clone()))
            .collect();

        let mut rng = GameRng::new(seed);
        let fixed: Vec<TemplateId> = vec![catalog::STRIKE];
        let piles = Piles::deal(deck, &fixed, 1, &mut rng);

        // One copy is forced into the hand; the rest stay in the draw pile.
        prop_assert_eq!(piles.hand.len(), 1);
        prop_assert_eq!(piles.draw_pile.len(), 3);
    }
}

#[test]
fn test_drawing_past_both_piles_stops_short() {
    let mut rng = GameRng::new(7);
    let mut piles = Piles::deal(build_deck(3), &[], 0, &mut rng);

    assert_eq!(piles.draw(10, &mut rng), 3);
    assert_eq!(piles.hand.len(), 3);
    assert!(piles.draw_pile.is_empty());
    assert!(piles.discard_pile.is_empty());
}

#[test]
fn test_empty_draw_pile_reshuffles_discard() {
    let mut rng = GameRng::new(11);
    let mut piles = Piles::deal(build_deck(2), &[], 2, &mut rng);

    // Discard everything, then draw: the discard pile must cycle back in.
    while let Some(id) = piles.hand.first().map(|c| c.instance_id) {
        let card = piles.remove_from_hand(id).unwrap();
        piles.discard(card);
    }
    assert_eq!(piles.discard_pile.len(), 2);

    assert!(piles.draw_one(&mut rng));
    assert_eq!(piles.hand.len(), 1);
    assert_eq!(piles.total(), 2);
}
