//! Effect resolution primitives: damage, healing, card movement.
//!
//! Everything that actually changes hp or moves cards between zones
//! lives here. The pending-action machinery and the ultimate scripts
//! both bottom out in these functions.

use crate::catalog::{Catalog, Passive};
use crate::core::LogKind;
use crate::rules::deck;
use crate::state::{EquipSlot, GameState, PlayerId};

/// Damage dealt by one attack card from this seat.
#[must_use]
pub fn attack_damage(state: &GameState, catalog: &Catalog, source: PlayerId) -> i32 {
    if catalog.has_passive(state.player(source).character, Passive::DamageBoost) {
        2
    } else {
        1
    }
}

/// Damage dealt by this seat's single-target damage scroll.
///
/// The same character bonus that boosts attacks boosts the scroll.
#[must_use]
pub fn scroll_damage(state: &GameState, catalog: &Catalog, source: PlayerId) -> i32 {
    attack_damage(state, catalog, source)
}

/// Hp restored by one heal card played by this seat.
#[must_use]
pub fn heal_amount(state: &GameState, catalog: &Catalog, seat: PlayerId) -> i32 {
    if catalog.has_passive(state.player(seat).character, Passive::HealBoost) {
        2
    } else {
        1
    }
}

/// Restore hp, clamped to the seat's maximum.
pub fn heal(state: &mut GameState, catalog: &Catalog, seat: PlayerId, amount: i32) {
    let player = state.player_mut(seat);
    let before = player.hp;
    player.hp = (player.hp + amount).min(player.max_hp);
    let gained = state.player(seat).hp - before;
    if gained > 0 {
        let name = catalog.character_name(state.player(seat).character).to_string();
        state
            .log
            .push(LogKind::Heal, format!("{} recovers {} hp", name, gained));
    }
}

/// Deal damage and handle elimination and victory.
pub fn apply_damage(state: &mut GameState, catalog: &Catalog, target: PlayerId, amount: i32) {
    if amount <= 0 || !state.is_alive(target) {
        return;
    }

    let name = catalog.character_name(state.player(target).character).to_string();
    let player = state.player_mut(target);
    player.hp = (player.hp - amount).max(0);
    state
        .log
        .push(LogKind::Damage, format!("{} takes {} damage", name, amount));

    if !state.is_alive(target) {
        eliminate(state, catalog, target);
    }
}

/// An eliminated seat surrenders its hand and equipment to the discard
/// pile; victory is declared once a single seat remains.
fn eliminate(state: &mut GameState, catalog: &Catalog, seat: PlayerId) {
    let name = catalog.character_name(state.player(seat).character).to_string();
    state
        .log
        .push(LogKind::Important, format!("{} is eliminated!", name));

    let player = state.player_mut(seat);
    let mut released = std::mem::take(&mut player.hand);
    released.extend(player.equipment.take_all());
    state.discard_pile.append(&mut released);

    if state.alive_count() == 1 {
        let winner = state.alive_players()[0];
        state.winner = Some(winner);
        let winner_name = catalog
            .character_name(state.player(winner).character)
            .to_string();
        state
            .log
            .push(LogKind::Important, format!("{} wins the game!", winner_name));
    }
}

/// Draw two cards (the draw card's effect).
pub fn play_draw(state: &mut GameState, catalog: &Catalog, seat: PlayerId) {
    let name = catalog.character_name(state.player(seat).character).to_string();
    let drawn = deck::draw(state, seat, 2);
    state
        .log
        .push(LogKind::Info, format!("{} draws {} cards", name, drawn));
}

/// Equip a card, discarding any displaced occupant of its slot.
///
/// Callers guarantee the card's kind maps to a slot.
pub fn equip(state: &mut GameState, catalog: &Catalog, seat: PlayerId, card: crate::catalog::PlayingCard) {
    let Some(slot) = EquipSlot::for_kind(card.kind) else {
        // Not an equipment card; send it to the discard pile unchanged.
        deck::discard(state, card);
        return;
    };
    let name = catalog.character_name(state.player(seat).character).to_string();
    let card_name = catalog.card_name(card.card).to_string();
    if let Some(displaced) = state.player_mut(seat).equipment.set(slot, card) {
        deck::discard(state, displaced);
    }
    state
        .log
        .push(LogKind::Info, format!("{} equips {}", name, card_name));
}

/// Mark the target to sit out their next turn.
pub fn resolve_skip(state: &mut GameState, catalog: &Catalog, target: PlayerId) {
    let name = catalog.character_name(state.player(target).character).to_string();
    state.player_mut(target).skipped_turn = true;
    state
        .log
        .push(LogKind::Info, format!("{} will skip their next turn", name));
}

/// Take a card from the target: a random hand card, else the first
/// piece of equipment. The taken card joins the source's hand.
pub fn resolve_steal(state: &mut GameState, catalog: &Catalog, source: PlayerId, target: PlayerId) {
    let Some(card) = remove_victim_card(state, target) else {
        return;
    };
    let source_name = catalog.character_name(state.player(source).character).to_string();
    let target_name = catalog.character_name(state.player(target).character).to_string();
    state.player_mut(source).hand.push(card);
    state.log.push(
        LogKind::Info,
        format!("{} snatches a card from {}", source_name, target_name),
    );
}

/// Force the target to lose a card: a random hand card, else the first
/// piece of equipment. The card is discarded.
pub fn resolve_dismantle(
    state: &mut GameState,
    catalog: &Catalog,
    source: PlayerId,
    target: PlayerId,
) {
    let Some(card) = remove_victim_card(state, target) else {
        return;
    };
    let source_name = catalog.character_name(state.player(source).character).to_string();
    let target_name = catalog.character_name(state.player(target).character).to_string();
    deck::discard(state, card);
    state.log.push(
        LogKind::Info,
        format!("{} dismantles a card of {}", source_name, target_name),
    );
}

fn remove_victim_card(
    state: &mut GameState,
    target: PlayerId,
) -> Option<crate::catalog::PlayingCard> {
    let hand_size = state.player(target).hand_size();
    if hand_size > 0 {
        let pick = state.rng.gen_range_usize(0..hand_size);
        return Some(state.player_mut(target).hand.remove(pick));
    }
    let player = state.player_mut(target);
    for slot in EquipSlot::ALL {
        if let Some(card) = player.equipment.take(slot) {
            return Some(card);
        }
    }
    None
}

/// Discard up to `count` random cards from a seat's hand.
pub fn discard_random(state: &mut GameState, seat: PlayerId, count: usize) -> usize {
    let mut discarded = 0;
    for _ in 0..count {
        let hand_size = state.player(seat).hand_size();
        if hand_size == 0 {
            break;
        }
        let pick = state.rng.gen_range_usize(0..hand_size);
        let card = state.player_mut(seat).hand.remove(pick);
        deck::discard(state, card);
        discarded += 1;
    }
    discarded
}
