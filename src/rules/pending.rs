//! Card resolution and the interactive pause machinery.
//!
//! Playing a card either resolves on the spot (heal, draw, equipment)
//! or freezes the game behind a [`PendingAction`]: a response window
//! the addressed player must answer, or a judgement reveal. Responses
//! can chain — a duel alternates attack demands until one side runs
//! dry — and every chain bottoms out in the effect primitives.

use crate::catalog::{CardKind, Catalog, PlayingCard, Suit};
use crate::core::LogKind;
use crate::rules::{deck, effects};
use crate::state::{FollowUp, GameState, JudgementStep, PendingAction, PlayerId};

/// Resolve a card the engine has already lifted out of a hand.
///
/// The card is placed (equipment slot or discard pile) and its effect
/// either runs immediately or opens a pending action.
pub fn resolve_play(
    state: &mut GameState,
    catalog: &Catalog,
    source: PlayerId,
    card: PlayingCard,
    target: Option<PlayerId>,
) {
    let source_name = catalog.character_name(state.player(source).character).to_string();
    let card_name = catalog.card_name(card.card).to_string();

    match card.kind {
        CardKind::Attack => {
            // Target presence and reach were validated at the surface.
            let Some(target) = target else { return };
            let target_name = catalog.character_name(state.player(target).character).to_string();
            state.player_mut(source).attacks_played += 1;
            state.log.push(
                LogKind::Info,
                format!("{} attacks {}", source_name, target_name),
            );
            let damage = effects::attack_damage(state, catalog, source);
            deck::discard(state, card.clone());
            state.pending = Some(PendingAction::ResponseWindow {
                source,
                target,
                card,
                demanded: CardKind::Dodge,
                on_decline: FollowUp::Damage(damage),
            });
        }
        CardKind::Heal => {
            deck::discard(state, card);
            let amount = effects::heal_amount(state, catalog, source);
            effects::heal(state, catalog, source, amount);
        }
        CardKind::Draw => {
            deck::discard(state, card);
            effects::play_draw(state, catalog, source);
        }
        CardKind::Aoe => {
            state.log.push(
                LogKind::Info,
                format!("{} unleashes {}", source_name, card_name),
            );
            deck::discard(state, card.clone());
            state.pending = Some(PendingAction::Judgement {
                source,
                target: None,
                card,
                step: JudgementStep::Reveal,
                revealed: None,
            });
        }
        CardKind::DamageScroll => {
            let Some(target) = target else { return };
            open_negate_window(state, catalog, source, target, card, FollowUp::Judgement);
        }
        CardKind::Duel => {
            let Some(target) = target else { return };
            open_negate_window(state, catalog, source, target, card, FollowUp::StartDuel);
        }
        CardKind::StealScroll | CardKind::DiscardScroll | CardKind::SkipTurn => {
            let Some(target) = target else { return };
            open_negate_window(state, catalog, source, target, card, FollowUp::Resolve);
        }
        CardKind::EquipWeapon
        | CardKind::EquipArmor
        | CardKind::EquipOffenseMount
        | CardKind::EquipDefenseMount => {
            effects::equip(state, catalog, source, card);
        }
        // Response-only cards never reach here; the surface rejects them.
        CardKind::Dodge | CardKind::Negate => {
            deck::discard(state, card);
        }
    }
}

fn open_negate_window(
    state: &mut GameState,
    catalog: &Catalog,
    source: PlayerId,
    target: PlayerId,
    card: PlayingCard,
    on_decline: FollowUp,
) {
    let source_name = catalog.character_name(state.player(source).character).to_string();
    let target_name = catalog.character_name(state.player(target).character).to_string();
    let card_name = catalog.card_name(card.card).to_string();
    state.log.push(
        LogKind::Info,
        format!("{} plays {} on {}", source_name, card_name, target_name),
    );
    deck::discard(state, card.clone());
    state.pending = Some(PendingAction::ResponseWindow {
        source,
        target,
        card,
        demanded: CardKind::Negate,
        on_decline,
    });
}

/// Answer the open response window.
///
/// `response` is the played answer card, already lifted from the
/// responder's hand; `None` declines. The engine validates addressing
/// and card kind before calling.
pub fn answer_window(state: &mut GameState, catalog: &Catalog, response: Option<PlayingCard>) {
    let Some(PendingAction::ResponseWindow {
        source,
        target,
        card,
        demanded,
        on_decline,
    }) = state.pending.take()
    else {
        return;
    };

    let responder_name = catalog.character_name(state.player(target).character).to_string();

    if let Some(answer) = response {
        deck::discard(state, answer);
        match demanded {
            CardKind::Dodge => {
                state.log.push(
                    LogKind::Info,
                    format!("{} dodges the attack", responder_name),
                );
            }
            CardKind::Negate => {
                let card_name = catalog.card_name(card.card).to_string();
                state.log.push(
                    LogKind::Info,
                    format!("{} nullifies {}", responder_name, card_name),
                );
            }
            // A duel round: the demand bounces back at the other side.
            CardKind::Attack => {
                state.log.push(
                    LogKind::Info,
                    format!("{} answers in the duel", responder_name),
                );
                state.pending = Some(PendingAction::ResponseWindow {
                    source: target,
                    target: source,
                    card,
                    demanded: CardKind::Attack,
                    on_decline: FollowUp::DuelRound,
                });
            }
            _ => {}
        }
        return;
    }

    match on_decline {
        FollowUp::Damage(amount) => {
            effects::apply_damage(state, catalog, target, amount);
        }
        FollowUp::Resolve => match card.kind {
            CardKind::StealScroll => effects::resolve_steal(state, catalog, source, target),
            CardKind::DiscardScroll => effects::resolve_dismantle(state, catalog, source, target),
            CardKind::SkipTurn => effects::resolve_skip(state, catalog, target),
            _ => {}
        },
        FollowUp::Judgement => {
            state.pending = Some(PendingAction::Judgement {
                source,
                target: Some(target),
                card,
                step: JudgementStep::Reveal,
                revealed: None,
            });
        }
        FollowUp::StartDuel => {
            let source_name = catalog.character_name(state.player(source).character).to_string();
            state.log.push(
                LogKind::Important,
                format!("{} and {} cross blades!", source_name, responder_name),
            );
            state.pending = Some(PendingAction::ResponseWindow {
                source,
                target,
                card,
                demanded: CardKind::Attack,
                on_decline: FollowUp::DuelRound,
            });
        }
        FollowUp::DuelRound => {
            state.log.push(
                LogKind::Damage,
                format!("{} loses the duel", responder_name),
            );
            effects::apply_damage(state, catalog, target, 1);
        }
    }
}

/// Advance the open judgement by one step.
///
/// The first call reveals a suit and rank; the second applies or
/// fizzles the scroll's effect.
pub fn step_judgement(state: &mut GameState, catalog: &Catalog) {
    let Some(PendingAction::Judgement {
        source,
        target,
        card,
        step,
        revealed,
    }) = state.pending.take()
    else {
        return;
    };

    match step {
        JudgementStep::Reveal => {
            let suit = *state.rng.choose(&Suit::ALL).unwrap_or(&Suit::Spade);
            let rank = state.rng.gen_range_u8(1..14);
            state.log.push(
                LogKind::Judgement,
                format!("judgement reveals {}{}", suit, rank),
            );
            state.pending = Some(PendingAction::Judgement {
                source,
                target,
                card,
                step: JudgementStep::Draw,
                revealed: Some((suit, rank)),
            });
        }
        JudgementStep::Draw => {
            let card_name = catalog.card_name(card.card).to_string();
            let Some((suit, _)) = revealed else { return };
            let success = catalog
                .judgement_rule(card.card)
                .is_some_and(|rule| rule.succeeds(suit));

            if !success {
                state
                    .log
                    .push(LogKind::Judgement, format!("{} fizzles", card_name));
                return;
            }

            match target {
                Some(target) => {
                    let damage = effects::scroll_damage(state, catalog, source);
                    state
                        .log
                        .push(LogKind::Judgement, format!("{} strikes true", card_name));
                    effects::apply_damage(state, catalog, target, damage);
                }
                None => {
                    state
                        .log
                        .push(LogKind::Judgement, format!("{} crackles overhead", card_name));
                    for seat in state.opponents(source) {
                        effects::apply_damage(state, catalog, seat, 1);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{card_ids, character_ids, CardId, InstanceId};
    use crate::state::Player;

    fn card(instance: u32, id: CardId, kind: CardKind, suit: Suit) -> PlayingCard {
        PlayingCard {
            instance: InstanceId::new(instance),
            card: id,
            kind,
            suit,
            rank: 6,
        }
    }

    fn fresh_state() -> GameState {
        let players = vec![
            Player::new(PlayerId::new(0), character_ids::BLOSSOM, 4, false),
            Player::new(PlayerId::new(1), character_ids::HERMIT, 4, true),
            Player::new(PlayerId::new(2), character_ids::RAVEN, 3, true),
        ];
        GameState::new(players, Vec::new(), 21)
    }

    #[test]
    fn test_attack_opens_dodge_window() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let attack = card(1, card_ids::STRIKE, CardKind::Attack, Suit::Heart);

        resolve_play(&mut state, &catalog, PlayerId::new(0), attack, Some(PlayerId::new(1)));

        assert_eq!(state.player(PlayerId::new(0)).attacks_played, 1);
        match &state.pending {
            Some(PendingAction::ResponseWindow {
                target,
                demanded,
                on_decline,
                ..
            }) => {
                assert_eq!(*target, PlayerId::new(1));
                assert_eq!(*demanded, CardKind::Dodge);
                assert_eq!(*on_decline, FollowUp::Damage(1));
            }
            other => panic!("unexpected pending: {:?}", other),
        }
    }

    #[test]
    fn test_boosted_attack_demands_two_damage() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let attack = card(1, card_ids::STRIKE, CardKind::Attack, Suit::Heart);

        // Seat 2 has the damage bonus.
        resolve_play(&mut state, &catalog, PlayerId::new(2), attack, Some(PlayerId::new(1)));

        match &state.pending {
            Some(PendingAction::ResponseWindow { on_decline, .. }) => {
                assert_eq!(*on_decline, FollowUp::Damage(2));
            }
            other => panic!("unexpected pending: {:?}", other),
        }

        answer_window(&mut state, &catalog, None);
        assert_eq!(state.player(PlayerId::new(1)).hp, 2);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_dodge_cancels_the_attack() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let attack = card(1, card_ids::STRIKE, CardKind::Attack, Suit::Heart);
        resolve_play(&mut state, &catalog, PlayerId::new(0), attack, Some(PlayerId::new(1)));

        let dodge = card(2, card_ids::SHADOW_STEP, CardKind::Dodge, Suit::Diamond);
        answer_window(&mut state, &catalog, Some(dodge));

        assert_eq!(state.player(PlayerId::new(1)).hp, 4);
        assert!(state.pending.is_none());
        assert_eq!(state.discard_pile.len(), 2);
    }

    #[test]
    fn test_heal_resolves_immediately() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        state.players[0].hp = 2;

        let salve = card(1, card_ids::HEALING_SALVE, CardKind::Heal, Suit::Heart);
        resolve_play(&mut state, &catalog, PlayerId::new(0), salve, None);

        assert_eq!(state.players[0].hp, 3);
        assert!(state.pending.is_none());
        assert_eq!(state.discard_pile.len(), 1);
    }

    #[test]
    fn test_duel_alternates_until_a_side_folds() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let duel = card(1, card_ids::SHOWDOWN, CardKind::Duel, Suit::Spade);
        resolve_play(&mut state, &catalog, PlayerId::new(0), duel, Some(PlayerId::new(1)));

        // Target declines to negate: the duel starts, target must attack.
        answer_window(&mut state, &catalog, None);
        match &state.pending {
            Some(PendingAction::ResponseWindow { target, demanded, .. }) => {
                assert_eq!(*target, PlayerId::new(1));
                assert_eq!(*demanded, CardKind::Attack);
            }
            other => panic!("unexpected pending: {:?}", other),
        }

        // Target produces an attack: the demand flips to the initiator.
        let answer = card(2, card_ids::STRIKE, CardKind::Attack, Suit::Club);
        answer_window(&mut state, &catalog, Some(answer));
        match &state.pending {
            Some(PendingAction::ResponseWindow { target, demanded, .. }) => {
                assert_eq!(*target, PlayerId::new(0));
                assert_eq!(*demanded, CardKind::Attack);
            }
            other => panic!("unexpected pending: {:?}", other),
        }

        // The initiator folds and takes the duel damage.
        answer_window(&mut state, &catalog, None);
        assert_eq!(state.players[0].hp, 3);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_negate_stops_a_scroll() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let snatch = card(1, card_ids::SNATCH, CardKind::StealScroll, Suit::Diamond);
        state.players[1].hand.push(card(2, card_ids::STRIKE, CardKind::Attack, Suit::Heart));

        resolve_play(&mut state, &catalog, PlayerId::new(0), snatch, Some(PlayerId::new(1)));
        let nullify = card(3, card_ids::NULLIFY, CardKind::Negate, Suit::Club);
        answer_window(&mut state, &catalog, Some(nullify));

        // Nothing was stolen.
        assert_eq!(state.player(PlayerId::new(1)).hand_size(), 1);
        assert_eq!(state.player(PlayerId::new(0)).hand_size(), 0);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_declined_skip_marks_the_target() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let trance = card(1, card_ids::TRANCE, CardKind::SkipTurn, Suit::Heart);

        resolve_play(&mut state, &catalog, PlayerId::new(0), trance, Some(PlayerId::new(2)));
        answer_window(&mut state, &catalog, None);

        assert!(state.player(PlayerId::new(2)).skipped_turn);
    }

    #[test]
    fn test_judgement_two_step_applies_fire_scroll() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let scroll = card(1, card_ids::FIRE_SCROLL, CardKind::DamageScroll, Suit::Heart);

        resolve_play(&mut state, &catalog, PlayerId::new(0), scroll, Some(PlayerId::new(1)));
        answer_window(&mut state, &catalog, None);

        let Some(PendingAction::Judgement { step, .. }) = &state.pending else {
            panic!("expected a judgement");
        };
        assert_eq!(*step, JudgementStep::Reveal);

        step_judgement(&mut state, &catalog);
        let Some(PendingAction::Judgement { step, revealed, .. }) = &state.pending else {
            panic!("expected the draw step");
        };
        assert_eq!(*step, JudgementStep::Draw);
        let (suit, _) = revealed.expect("reveal recorded");

        step_judgement(&mut state, &catalog);
        assert!(state.pending.is_none());
        if suit.is_red() {
            assert_eq!(state.player(PlayerId::new(1)).hp, 3);
        } else {
            assert_eq!(state.player(PlayerId::new(1)).hp, 4);
        }
    }

    #[test]
    fn test_aoe_judgement_spares_the_caster() {
        let catalog = Catalog::standard();
        let mut state = fresh_state();
        let scroll = card(1, card_ids::LIGHTNING_SCROLL, CardKind::Aoe, Suit::Spade);

        resolve_play(&mut state, &catalog, PlayerId::new(1), scroll, None);
        step_judgement(&mut state, &catalog);

        let Some(PendingAction::Judgement { revealed, .. }) = &state.pending else {
            panic!("expected the draw step");
        };
        let (suit, _) = revealed.expect("reveal recorded");

        step_judgement(&mut state, &catalog);
        assert_eq!(state.player(PlayerId::new(1)).hp, 4);
        if suit.is_black() {
            assert_eq!(state.player(PlayerId::new(0)).hp, 3);
            assert_eq!(state.player(PlayerId::new(2)).hp, 2);
        } else {
            assert_eq!(state.player(PlayerId::new(0)).hp, 4);
            assert_eq!(state.player(PlayerId::new(2)).hp, 3);
        }
    }
}
