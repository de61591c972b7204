//! Turn phase steps: start housekeeping, drawing, hand-limit discard,
//! and passing the turn along the alive circle.

use crate::catalog::{Catalog, Passive};
use crate::core::LogKind;
use crate::rules::deck;
use crate::state::{GameState, Phase, Player};

/// Cards drawn in the draw phase by a human seat.
pub const HUMAN_DRAW: usize = 3;
/// Cards drawn in the draw phase by an AI seat.
pub const AI_DRAW: usize = 2;

/// Maximum hand size at end of turn. Humans get one card of slack.
#[must_use]
pub fn hand_limit(player: &Player) -> usize {
    let hp = player.hp.max(0) as usize;
    if player.is_ai {
        hp
    } else {
        hp + 1
    }
}

/// Start-of-turn housekeeping: reset the attack counter, tick the
/// ultimate cooldown, consume a pending turn skip.
///
/// Leaves the phase at Draw, or End for a skipped turn.
pub fn begin_turn(state: &mut GameState, catalog: &Catalog) {
    let seat = state.active_seat();
    let name = catalog.character_name(state.player(seat).character).to_string();

    let player = state.player_mut(seat);
    player.attacks_played = 0;
    player.ultimate.cooldown = player.ultimate.cooldown.saturating_sub(1);

    if player.skipped_turn {
        player.skipped_turn = false;
        state
            .log
            .push(LogKind::Info, format!("{} is entranced and skips the turn", name));
        state.phase = Phase::End;
        return;
    }

    state.log.push(LogKind::Info, format!("{}'s turn", name));
    state.phase = Phase::Draw;
}

/// Draw-phase step; leaves the phase at Play.
pub fn draw_step(state: &mut GameState, catalog: &Catalog) {
    let seat = state.active_seat();
    let player = state.player(seat);
    let mut count = if player.is_ai { AI_DRAW } else { HUMAN_DRAW };
    if catalog.has_passive(player.character, Passive::ExtraDrawWhenHurt) && player.hp <= 2 {
        count += 1;
    }
    let name = catalog.character_name(player.character).to_string();
    let drawn = deck::draw(state, seat, count);
    state
        .log
        .push(LogKind::Info, format!("{} draws {} cards", name, drawn));
    state.phase = Phase::Play;
}

/// Leave the play phase: enter the discard phase when over the hand
/// limit, otherwise go straight to End.
pub fn leave_play_phase(state: &mut GameState) {
    let player = state.active_player();
    let over = player.hand_size().saturating_sub(hand_limit(player));
    state.phase = if over > 0 {
        Phase::Discard { required: over }
    } else {
        Phase::End
    };
}

/// Pass the turn to the next living seat.
pub fn end_turn(state: &mut GameState) {
    if let Some(next) = state.next_alive_seat(state.turn_index) {
        state.turn_index = next.index();
        state.phase = Phase::Start;
    }
}
