//! Seat distance, attack reach, and armor immunity.
//!
//! Distance is measured around the circle of living players only;
//! eliminated seats do not count. Character passives and mounts adjust
//! the raw ring distance in a fixed order, and the result never drops
//! below 1.

use crate::catalog::{Catalog, Passive, PlayingCard};
use crate::state::{GameState, PlayerId};

/// Distance from `source` to `target` around the alive circle.
///
/// Adjustments apply in order: the source's distance override, then the
/// source's reductions (passive, offense mount), then the target's
/// additions (passive with more than two players alive, defense mount),
/// then the floor of 1. Distance to self is 0.
#[must_use]
pub fn distance(state: &GameState, catalog: &Catalog, source: PlayerId, target: PlayerId) -> u8 {
    if source == target {
        return 0;
    }

    let source_player = state.player(source);
    if catalog.has_passive(source_player.character, Passive::DistanceAlwaysOne) {
        return 1;
    }

    let alive = state.alive_players();
    let (Some(from), Some(to)) = (
        alive.iter().position(|&p| p == source),
        alive.iter().position(|&p| p == target),
    ) else {
        // An eliminated endpoint is unreachable.
        return u8::MAX;
    };

    // Head-to-head, modifiers are meaningless.
    if alive.len() == 2 {
        return 1;
    }

    let n = alive.len();
    let gap = from.abs_diff(to);
    let mut dist = gap.min(n - gap) as i32;

    if catalog.has_passive(source_player.character, Passive::DistanceMinusOne) {
        dist -= 1;
    }
    if source_player.equipment.offense_mount.is_some() {
        dist -= 1;
    }

    let target_player = state.player(target);
    if n > 2 && catalog.has_passive(target_player.character, Passive::OthersDistancePlusOne) {
        dist += 1;
    }
    if target_player.equipment.defense_mount.is_some() {
        dist += 1;
    }

    dist.max(1) as u8
}

/// How far a seat's attack cards reach: weapon reach or 1, plus any
/// range passive.
#[must_use]
pub fn attack_range(state: &GameState, catalog: &Catalog, seat: PlayerId) -> u8 {
    let player = state.player(seat);
    let base = player
        .equipment
        .weapon
        .as_ref()
        .and_then(|w| catalog.weapon_range(w.card))
        .unwrap_or(1);
    if catalog.has_passive(player.character, Passive::AttackRangePlusOne) {
        base + 1
    } else {
        base
    }
}

/// Is `target` within `source`'s attack reach?
#[must_use]
pub fn in_attack_range(
    state: &GameState,
    catalog: &Catalog,
    source: PlayerId,
    target: PlayerId,
) -> bool {
    distance(state, catalog, source, target) <= attack_range(state, catalog, source)
}

/// Does the target's armor turn this attack card away?
///
/// Black-blocking armor stops black-suited attacks unless the attacker
/// pierces armor.
#[must_use]
pub fn is_immune_to_attack(
    state: &GameState,
    catalog: &Catalog,
    source: PlayerId,
    target: PlayerId,
    card: &PlayingCard,
) -> bool {
    if !card.suit.is_black() {
        return false;
    }
    if catalog.has_passive(state.player(source).character, Passive::PierceArmor) {
        return false;
    }
    state
        .player(target)
        .equipment
        .armor
        .as_ref()
        .is_some_and(|armor| catalog.blocks_black_attacks(armor.card))
}
