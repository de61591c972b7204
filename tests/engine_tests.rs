//! Engine command-surface tests.
//!
//! These drive full games through the public commands only, the way a
//! UI would, and verify that refusals never mutate state and accepted
//! commands keep the game internally consistent.

use shinobi_brawl::ai;
use shinobi_brawl::catalog::{character_ids, CharacterId, InstanceId};
use shinobi_brawl::engine::{Engine, AI_OPENING_HAND, HUMAN_OPENING_HAND, PLAYER_COUNT};
use shinobi_brawl::state::{PendingAction, Phase, PlayerId};
use shinobi_brawl::EngineError;

const HUMAN: PlayerId = PlayerId::new(0);

/// Drive the human seat with the same policy the AI uses until the
/// game ends or the step budget runs out. Asserts invariants after
/// every accepted command.
fn drive_human(engine: &mut Engine, max_steps: usize) {
    for _ in 0..max_steps {
        engine.state().check_invariants();
        if engine.winner().is_some() {
            return;
        }

        if let Some(PendingAction::ResponseWindow {
            target, demanded, ..
        }) = engine.state().pending
        {
            assert_eq!(target, HUMAN, "driver only stops on the human's window");
            let pick = ai::decide_response(engine.state(), HUMAN, demanded);
            engine.respond(HUMAN, pick).unwrap();
            continue;
        }

        match engine.state().phase {
            Phase::Play => match ai::decide(engine.state(), engine.catalog(), HUMAN) {
                ai::AiAction::PlayCard { card, target } => {
                    if engine.play_card(HUMAN, card, target).is_err() {
                        engine.end_play_phase(HUMAN).unwrap();
                    }
                }
                ai::AiAction::EndPhase => engine.end_play_phase(HUMAN).unwrap(),
            },
            Phase::Discard { required } => {
                let picks = ai::choose_discards(engine.state(), HUMAN, required);
                engine.confirm_discard(HUMAN, &picks).unwrap();
            }
            // Human eliminated (AI finish among themselves) or the
            // stalemate guard tripped; either way the drive is over.
            _ => return,
        }
    }
}

#[test]
fn test_opening_deal_and_first_turn() {
    let engine = Engine::start_game(character_ids::BLOSSOM, 11).unwrap();
    let state = engine.state();

    assert_eq!(state.player_count(), PLAYER_COUNT);
    assert_eq!(state.phase, Phase::Play);
    assert_eq!(state.active_seat(), HUMAN);
    assert_eq!(state.players[0].hand_size(), HUMAN_OPENING_HAND + 3);
    for ai_seat in &state.players[1..] {
        assert_eq!(ai_seat.hand_size(), AI_OPENING_HAND);
    }
    state.check_invariants();
}

#[test]
fn test_armored_character_opens_with_a_vest() {
    let engine = Engine::start_game(character_ids::DUNE, 11).unwrap();
    assert!(engine.state().players[0].equipment.armor.is_some());
}

#[test]
fn test_refusals_leave_state_untouched() {
    let mut engine = Engine::start_game(character_ids::BLOSSOM, 42).unwrap();
    let before = engine.state().clone();

    assert_eq!(
        engine.end_play_phase(PlayerId::new(3)),
        Err(EngineError::NotYourTurn(3))
    );
    assert_eq!(
        engine.play_card(HUMAN, InstanceId::new(999_999), None),
        Err(EngineError::CardNotInHand)
    );
    assert_eq!(engine.respond(HUMAN, None), Err(EngineError::NothingPending));
    assert_eq!(
        engine.confirm_discard(HUMAN, &[]),
        Err(EngineError::WrongPhase)
    );
    // Blossom's ultimate needs a wound; the opener has none.
    assert_eq!(
        engine.trigger_ultimate(HUMAN, None),
        Err(EngineError::UltimateUnavailable)
    );

    let after = engine.state();
    assert_eq!(after.phase, before.phase);
    assert_eq!(after.players, before.players);
    assert_eq!(after.draw_pile, before.draw_pile);
    assert_eq!(after.discard_pile, before.discard_pile);
}

#[test]
fn test_full_game_stays_consistent() {
    let mut engine = Engine::start_game(character_ids::GALE, 7).unwrap();
    let expected_universe = engine.state().card_universe();

    drive_human(&mut engine, 5_000);

    let state = engine.state();
    state.check_invariants();
    // Every card that existed at the deal still exists somewhere.
    assert_eq!(state.card_universe(), expected_universe);
}

#[test]
fn test_full_games_across_characters() {
    for character in [
        character_ids::STORM,
        character_ids::RAVEN,
        character_ids::FLASH,
        character_ids::WARDEN,
    ] {
        let mut engine = Engine::start_game(character, 123).unwrap();
        drive_human(&mut engine, 5_000);
        engine.state().check_invariants();
    }
}

#[test]
fn test_replay_is_deterministic() {
    let mut a = Engine::start_game(character_ids::VIPER, 2024).unwrap();
    let mut b = Engine::start_game(character_ids::VIPER, 2024).unwrap();

    drive_human(&mut a, 5_000);
    drive_human(&mut b, 5_000);

    assert_eq!(a.winner(), b.winner());
    assert_eq!(a.state().players, b.state().players);
    assert_eq!(a.state().turn_index, b.state().turn_index);
}

#[test]
fn test_commands_after_victory_are_refused() {
    let mut engine = Engine::start_exhibition(8).unwrap();
    if engine.winner().is_none() {
        return; // stalemate limit; nothing to assert here
    }
    assert_eq!(engine.end_play_phase(HUMAN), Err(EngineError::GameOver));
    assert_eq!(engine.respond(HUMAN, None), Err(EngineError::GameOver));
}

#[test]
fn test_unknown_character_refused() {
    assert!(matches!(
        Engine::start_game(CharacterId::new(404), 1),
        Err(EngineError::UnknownCharacter)
    ));
}
