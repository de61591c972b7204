//! Heuristic AI policy.
//!
//! The policy only reads state and returns decisions; the engine
//! executes them through the same command paths a human uses, so the
//! AI can never do anything a human could not.

use crate::catalog::{CardKind, Catalog, InstanceId, Passive};
use crate::rules::targeting;
use crate::state::{GameState, Player, PlayerId};

/// Attack cards an AI seat will play in one turn.
pub const AI_ATTACK_LIMIT: u8 = 2;

/// One play-phase decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiAction {
    PlayCard {
        card: InstanceId,
        target: Option<PlayerId>,
    },
    EndPhase,
}

/// How appealing a target is. Wounded, card-rich seats score high;
/// armored or mounted seats score low, and the human seat gets a small
/// aggro discount.
fn threat(state: &GameState, catalog: &Catalog, attacker: PlayerId, target: &Player) -> i32 {
    let mut score = if target.hp == 1 {
        50
    } else {
        (target.max_hp - target.hp) * 5
    };
    score += target.hand_size() as i32 * 2;

    let pierces = catalog.has_passive(state.player(attacker).character, Passive::PierceArmor);
    if target.equipment.armor.is_some() && !pierces {
        score -= 15;
    }
    if target.equipment.defense_mount.is_some() {
        score -= 5;
    }
    if !target.is_ai {
        score -= 15;
    }
    score
}

fn best_target<'a, F>(
    state: &'a GameState,
    catalog: &Catalog,
    seat: PlayerId,
    mut eligible: F,
) -> Option<&'a Player>
where
    F: FnMut(&Player) -> bool,
{
    state
        .players
        .iter()
        .filter(|p| p.is_alive() && p.id != seat && eligible(p))
        .max_by_key(|p| threat(state, catalog, seat, p))
}

/// Pick the next play for an AI seat in its play phase.
///
/// A fixed priority ladder: emergency heal, equip, turn control,
/// attack, offensive scrolls, steal and dismantle, then area damage and
/// hand top-ups. Returns [`AiAction::EndPhase`] when nothing applies.
#[must_use]
pub fn decide(state: &GameState, catalog: &Catalog, seat: PlayerId) -> AiAction {
    let player = state.player(seat);

    let play = |card: &crate::catalog::PlayingCard, target: Option<PlayerId>| AiAction::PlayCard {
        card: card.instance,
        target,
    };

    // Emergency: patch up or dig for answers when low.
    if player.hp <= 2 {
        if player.hp < player.max_hp {
            if let Some(card) = player.first_of_kind(CardKind::Heal) {
                return play(card, None);
            }
        }
        if let Some(card) = player.first_of_kind(CardKind::Draw) {
            return play(card, None);
        }
    }

    // Equipment is free value; play the first piece held.
    if let Some(card) = player.hand.iter().find(|c| c.kind.is_equipment()) {
        return play(card, None);
    }

    // Turn control on the scariest opponent.
    if let Some(card) = player.first_of_kind(CardKind::SkipTurn) {
        if let Some(target) = best_target(state, catalog, seat, |_| true) {
            return play(card, Some(target.id));
        }
    }

    // Attack inside reach, respecting the per-turn cap.
    if player.attacks_played < AI_ATTACK_LIMIT {
        if let Some(card) = player.first_of_kind(CardKind::Attack) {
            let reach = targeting::attack_range(state, catalog, seat);
            let target = best_target(state, catalog, seat, |p| {
                targeting::distance(state, catalog, seat, p.id) <= reach
                    && !targeting::is_immune_to_attack(state, catalog, seat, p.id, card)
            });
            if let Some(target) = target {
                return play(card, Some(target.id));
            }
        }
    }

    // Single-target scrolls and duels go to the scariest seat anywhere.
    if let Some(card) = player
        .first_of_kind(CardKind::DamageScroll)
        .or_else(|| player.first_of_kind(CardKind::Duel))
    {
        if let Some(target) = best_target(state, catalog, seat, |_| true) {
            return play(card, Some(target.id));
        }
    }

    // Steal from an adjacent seat that has anything worth taking.
    if let Some(card) = player.first_of_kind(CardKind::StealScroll) {
        let target = best_target(state, catalog, seat, |p| {
            targeting::distance(state, catalog, seat, p.id) <= 1
                && (p.hand_size() > 0 || p.equipment.any())
        });
        if let Some(target) = target {
            return play(card, Some(target.id));
        }
    }

    if let Some(card) = player.first_of_kind(CardKind::DiscardScroll) {
        if let Some(target) = best_target(state, catalog, seat, |_| true) {
            return play(card, Some(target.id));
        }
    }

    if let Some(card) = player.first_of_kind(CardKind::Aoe) {
        return play(card, None);
    }

    if let Some(card) = player.first_of_kind(CardKind::Draw) {
        return play(card, None);
    }

    if player.hp < player.max_hp {
        if let Some(card) = player.first_of_kind(CardKind::Heal) {
            return play(card, None);
        }
    }

    AiAction::EndPhase
}

/// Answer an open response window: play the first card of the demanded
/// kind, or decline.
#[must_use]
pub fn decide_response(state: &GameState, seat: PlayerId, demanded: CardKind) -> Option<InstanceId> {
    state
        .player(seat)
        .first_of_kind(demanded)
        .map(|c| c.instance)
}

/// Pick `count` cards to give up, cheapest first.
///
/// Healing and dodges are hoarded; attacks and equipment sit in the
/// middle; everything else goes first.
#[must_use]
pub fn choose_discards(state: &GameState, seat: PlayerId, count: usize) -> Vec<InstanceId> {
    fn keep_value(kind: CardKind) -> i32 {
        match kind {
            CardKind::Heal => 10,
            CardKind::Dodge => 8,
            k if k.is_equipment() => 6,
            CardKind::Attack => 5,
            _ => 1,
        }
    }

    let mut hand: Vec<_> = state.player(seat).hand.iter().collect();
    hand.sort_by_key(|c| keep_value(c.kind));
    hand.into_iter().take(count).map(|c| c.instance).collect()
}

/// Decide whether to sit out of the play phase entirely; the ladder in
/// [`decide`] already ends the phase when the hand offers nothing, so
/// this only caps runaway turns.
#[must_use]
pub fn should_keep_playing(plays_this_turn: usize) -> bool {
    // One AI turn can never need more plays than this.
    plays_this_turn < 32
}
