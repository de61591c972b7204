//! Deck lifecycle: generation, drawing, recycling.
//!
//! Suits and ranks are rolled once at generation and never change, so a
//! recycled card keeps its identity. Drawing from an empty pile shuffles
//! the discard pile back in; when both piles are dry the draw shorts.

use crate::catalog::{Catalog, InstanceId, PlayingCard, Suit, DECK_COUNTS};
use crate::core::{GameRng, LogKind};
use crate::state::{GameState, PlayerId};

/// Build and shuffle the standard draw pile.
///
/// Each copy gets a fresh instance id plus a random suit and rank.
#[must_use]
pub fn build_draw_pile(catalog: &Catalog, rng: &mut GameRng) -> Vec<PlayingCard> {
    let mut pile = Vec::with_capacity(crate::catalog::standard_deck_size());
    let mut next_instance = 0u32;

    for &(card_id, count) in DECK_COUNTS {
        let Some(definition) = catalog.card(card_id) else {
            continue;
        };
        for _ in 0..count {
            let suit = *rng
                .choose(&Suit::ALL)
                .unwrap_or(&Suit::Spade);
            pile.push(PlayingCard {
                instance: InstanceId::new(next_instance),
                card: card_id,
                kind: definition.kind,
                suit,
                rank: rng.gen_range_u8(1..14),
            });
            next_instance += 1;
        }
    }

    rng.shuffle(&mut pile);
    pile
}

/// Move the discard pile back into the draw pile and shuffle.
fn recycle(state: &mut GameState) {
    if state.discard_pile.is_empty() {
        return;
    }
    state.draw_pile.append(&mut state.discard_pile);
    state.rng.shuffle(&mut state.draw_pile);
    state
        .log
        .push(LogKind::Info, "the discard pile is shuffled back in");
}

/// Draw up to `count` cards into a seat's hand.
///
/// Returns the number actually drawn, which falls short only when both
/// piles are empty.
pub fn draw(state: &mut GameState, seat: PlayerId, count: usize) -> usize {
    let mut drawn = 0;
    for _ in 0..count {
        if state.draw_pile.is_empty() {
            recycle(state);
        }
        let Some(card) = state.draw_pile.pop() else {
            break;
        };
        state.player_mut(seat).hand.push(card);
        drawn += 1;
    }
    drawn
}

/// Draw until a seat's hand holds `target` cards.
pub fn draw_up_to(state: &mut GameState, seat: PlayerId, target: usize) -> usize {
    let held = state.player(seat).hand_size();
    if held >= target {
        return 0;
    }
    draw(state, seat, target - held)
}

/// Put a card on the discard pile.
pub fn discard(state: &mut GameState, card: PlayingCard) {
    state.discard_pile.push(card);
}
