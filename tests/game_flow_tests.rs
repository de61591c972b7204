//! Rules-level flow tests built directly on `GameState`.
//!
//! The in-file unit tests cover each rules module alone; these check
//! the flows that cross modules: attack windows into damage, duels
//! into elimination, judgement scrolls into area damage, and the
//! draw-pile recycle under pressure.

use shinobi_brawl::catalog::{
    card_ids, character_ids, CardId, CardKind, Catalog, InstanceId, PlayingCard, Suit,
};
use shinobi_brawl::rules::{deck, pending, turn};
use shinobi_brawl::state::{GameState, PendingAction, Phase, Player, PlayerId};

fn card(instance: u32, id: CardId, kind: CardKind, suit: Suit) -> PlayingCard {
    PlayingCard {
        instance: InstanceId::new(instance),
        card: id,
        kind,
        suit,
        rank: 5,
    }
}

fn small_game() -> (Catalog, GameState) {
    let catalog = Catalog::standard();
    let players = vec![
        Player::new(PlayerId::new(0), character_ids::BLOSSOM, 4, false),
        Player::new(PlayerId::new(1), character_ids::HERMIT, 4, true),
        Player::new(PlayerId::new(2), character_ids::RAVEN, 3, true),
    ];
    (catalog, GameState::new(players, Vec::new(), 77))
}

#[test]
fn test_attack_through_decline_deals_damage() {
    let (catalog, mut state) = small_game();
    let strike = card(1, card_ids::STRIKE, CardKind::Attack, Suit::Heart);

    pending::resolve_play(&mut state, &catalog, PlayerId::new(0), strike, Some(PlayerId::new(1)));
    pending::answer_window(&mut state, &catalog, None);

    assert_eq!(state.player(PlayerId::new(1)).hp, 3);
    assert!(state.pending.is_none());
    state.check_invariants();
}

#[test]
fn test_duel_to_the_death_releases_cards() {
    let (catalog, mut state) = small_game();
    state.players[2].hp = 1;
    state.players[2].hand.push(card(10, card_ids::SHADOW_STEP, CardKind::Dodge, Suit::Heart));

    let duel = card(1, card_ids::SHOWDOWN, CardKind::Duel, Suit::Spade);
    pending::resolve_play(&mut state, &catalog, PlayerId::new(0), duel, Some(PlayerId::new(2)));
    // No negate, no attack card: the duel costs the target its last hp.
    pending::answer_window(&mut state, &catalog, None);
    pending::answer_window(&mut state, &catalog, None);

    assert!(!state.is_alive(PlayerId::new(2)));
    // The dodge left the dead hand for the discard pile.
    assert!(state
        .discard_pile
        .iter()
        .any(|c| c.instance == InstanceId::new(10)));
    state.check_invariants();
}

#[test]
fn test_long_duel_exchanges_attacks() {
    let (catalog, mut state) = small_game();
    let duel = card(1, card_ids::SHOWDOWN, CardKind::Duel, Suit::Club);
    pending::resolve_play(&mut state, &catalog, PlayerId::new(0), duel, Some(PlayerId::new(1)));
    pending::answer_window(&mut state, &catalog, None); // no negate

    // Four attack answers bounce the demand back and forth.
    for i in 0..4u32 {
        let expected_side = if i % 2 == 0 { 1 } else { 0 };
        match &state.pending {
            Some(PendingAction::ResponseWindow { target, demanded, .. }) => {
                assert_eq!(*target, PlayerId::new(expected_side));
                assert_eq!(*demanded, CardKind::Attack);
            }
            other => panic!("unexpected pending: {:?}", other),
        }
        let answer = card(20 + i, card_ids::STRIKE, CardKind::Attack, Suit::Spade);
        pending::answer_window(&mut state, &catalog, Some(answer));
    }

    // The fifth demand lands on the target again; it folds and pays.
    pending::answer_window(&mut state, &catalog, None);
    assert_eq!(state.player(PlayerId::new(1)).hp, 3);
    assert_eq!(state.player(PlayerId::new(0)).hp, 4);
}

#[test]
fn test_aoe_chains_eliminations_to_victory() {
    let (catalog, mut state) = small_game();
    state.players[0].hp = 1;
    state.players[2].hp = 1;

    // Force a black reveal by trying seeds until one cooperates would
    // be flaky; instead walk both possible outcomes.
    let scroll = card(1, card_ids::LIGHTNING_SCROLL, CardKind::Aoe, Suit::Spade);
    pending::resolve_play(&mut state, &catalog, PlayerId::new(1), scroll, None);
    pending::step_judgement(&mut state, &catalog);

    let Some(PendingAction::Judgement { revealed, .. }) = &state.pending else {
        panic!("expected the draw step");
    };
    let black = revealed.expect("revealed").0.is_black();

    pending::step_judgement(&mut state, &catalog);
    if black {
        assert_eq!(state.winner, Some(PlayerId::new(1)));
        assert!(!state.is_alive(PlayerId::new(0)));
        assert!(!state.is_alive(PlayerId::new(2)));
    } else {
        assert!(state.winner.is_none());
        assert!(state.is_alive(PlayerId::new(0)));
    }
    state.check_invariants();
}

#[test]
fn test_turn_cycle_with_draw_pressure() {
    let (catalog, mut state) = small_game();
    // One card to draw, the rest waiting in the discard pile.
    let mut cards: Vec<_> = (0..12)
        .map(|i| card(100 + i, card_ids::STRIKE, CardKind::Attack, Suit::Heart))
        .collect();
    state.draw_pile = cards.split_off(11);
    state.discard_pile = cards;

    turn::begin_turn(&mut state, &catalog);
    assert_eq!(state.phase, Phase::Draw);
    turn::draw_step(&mut state, &catalog);

    // The human drew three: one off the top, two after the recycle.
    assert_eq!(state.player(PlayerId::new(0)).hand_size(), 3);
    assert_eq!(state.draw_pile.len(), 9);
    assert!(state.discard_pile.is_empty());
    assert_eq!(state.phase, Phase::Play);
    state.check_invariants();
}

#[test]
fn test_eliminated_seat_is_skipped_by_the_turn_order() {
    let (_catalog, mut state) = small_game();
    state.players[1].hp = 0;
    state.phase = Phase::End;

    turn::end_turn(&mut state);
    assert_eq!(state.turn_index, 2);
}

#[test]
fn test_hand_limit_discard_requirement_matches_hp() {
    let (_catalog, mut state) = small_game();
    state.players[0].hp = 2;
    for i in 0..6 {
        state.players[0]
            .hand
            .push(card(200 + i, card_ids::SHADOW_STEP, CardKind::Dodge, Suit::Club));
    }

    turn::leave_play_phase(&mut state);
    // Human limit is hp + 1 = 3, so three cards must go.
    assert_eq!(state.phase, Phase::Discard { required: 3 });
}

#[test]
fn test_recycle_preserves_card_identity() {
    let (_catalog, mut state) = small_game();
    let marked = card(555, card_ids::WAR_FAN, CardKind::EquipWeapon, Suit::Diamond);
    state.discard_pile.push(marked.clone());

    deck::draw(&mut state, PlayerId::new(0), 1);

    let held = &state.player(PlayerId::new(0)).hand[0];
    assert_eq!(held, &marked);
}
