//! Whole-game state: seats, piles, phase, pending interaction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerId};
use crate::catalog::{CardKind, InstanceId, PlayingCard, Suit};
use crate::core::{GameLog, GameRng};

/// Turn phase of the active seat.
///
/// The phase machine cycles Start → Draw → Play → (Discard) → End per
/// active player. While a [`PendingAction`] is open no phase transition
/// occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Draw,
    Play,
    /// The active player must discard down to their hand limit.
    Discard { required: usize },
    End,
}

/// What happens when a response window is declined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUp {
    /// The addressed player takes this much damage.
    Damage(i32),
    /// The triggering card's effect resolves directly.
    Resolve,
    /// The triggering card moves to a judgement draw.
    Judgement,
    /// A duel begins: the addressed player must produce an attack card.
    StartDuel,
    /// A duel round: failing to produce an attack card costs 1 hp.
    DuelRound,
}

/// Judgement progress: the reveal pause, then the draw.
///
/// The pause exists so an observer can pace the reveal; a headless
/// driver steps through both instantly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JudgementStep {
    Reveal,
    Draw,
}

/// An interactive pause the turn machine is frozen behind.
///
/// The triggering card is stored by value for reference only; the card
/// itself has already moved to the discard pile when the window opened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingAction {
    /// `target` may play one card of kind `demanded`; declining fires
    /// `on_decline`.
    ResponseWindow {
        source: PlayerId,
        target: PlayerId,
        card: PlayingCard,
        demanded: CardKind,
        on_decline: FollowUp,
    },
    /// An automatic suit/rank reveal gating the card's effect.
    /// `target` of `None` means the effect hits all other players.
    Judgement {
        source: PlayerId,
        target: Option<PlayerId>,
        card: PlayingCard,
        step: JudgementStep,
        /// Filled in by the reveal step, consumed by the draw step.
        revealed: Option<(Suit, u8)>,
    },
}

/// Complete game state.
///
/// All mutation flows through the rules modules; observers get a shared
/// reference and the log stream.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Fixed seating order. Eliminated players stay seated.
    pub players: Vec<Player>,
    /// Face-down draw pile, top at the end.
    pub draw_pile: Vec<PlayingCard>,
    /// Face-up discard pile, order irrelevant.
    pub discard_pile: Vec<PlayingCard>,
    /// Seat currently acting.
    pub turn_index: usize,
    pub phase: Phase,
    pub pending: Option<PendingAction>,
    /// Set once exactly one player remains; terminal.
    pub winner: Option<PlayerId>,
    pub rng: GameRng,
    pub log: GameLog,
}

impl GameState {
    /// Create a game state at the first player's turn start.
    #[must_use]
    pub fn new(players: Vec<Player>, draw_pile: Vec<PlayingCard>, seed: u64) -> Self {
        Self {
            players,
            draw_pile,
            discard_pile: Vec::new(),
            turn_index: 0,
            phase: Phase::Start,
            pending: None,
            winner: None,
            rng: GameRng::new(seed),
            log: GameLog::new(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Access a player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to a player by seat.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The seat currently acting.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.turn_index]
    }

    /// Seat id of the active player.
    #[must_use]
    pub fn active_seat(&self) -> PlayerId {
        PlayerId::new(self.turn_index as u8)
    }

    /// Is a seat still in the game?
    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.player(id).is_alive()
    }

    /// Seats with hp > 0, in seating order (the alive circle).
    #[must_use]
    pub fn alive_players(&self) -> SmallVec<[PlayerId; 5]> {
        self.players
            .iter()
            .filter(|p| p.is_alive())
            .map(|p| p.id)
            .collect()
    }

    /// Number of living players.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Living opponents of a seat, in seating order.
    #[must_use]
    pub fn opponents(&self, of: PlayerId) -> SmallVec<[PlayerId; 5]> {
        self.players
            .iter()
            .filter(|p| p.is_alive() && p.id != of)
            .map(|p| p.id)
            .collect()
    }

    /// Next living seat clockwise after `from`.
    ///
    /// The scan is bounded by the seat count; `None` means no other
    /// living seat exists, which implies the game has already ended.
    #[must_use]
    pub fn next_alive_seat(&self, from: usize) -> Option<PlayerId> {
        let n = self.player_count();
        for step in 1..=n {
            let idx = (from + step) % n;
            if self.players[idx].is_alive() {
                return Some(PlayerId::new(idx as u8));
            }
        }
        None
    }

    /// Sorted instance ids of every card in the state: piles, hands,
    /// equipment. Used to verify conservation against the initial
    /// universe.
    #[must_use]
    pub fn card_universe(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self
            .draw_pile
            .iter()
            .chain(self.discard_pile.iter())
            .map(|c| c.instance)
            .collect();
        for player in &self.players {
            ids.extend(player.hand.iter().map(|c| c.instance));
            ids.extend(player.equipment.iter().map(|c| c.instance));
        }
        ids.sort();
        ids
    }

    /// Assert structural invariants. Panics on violation; a violation
    /// is an engine bug, unreachable through the command surface.
    pub fn check_invariants(&self) {
        for player in &self.players {
            assert!(
                player.hp >= 0 && player.hp <= player.max_hp,
                "{} hp {} outside 0..={}",
                player.id,
                player.hp,
                player.max_hp
            );
        }

        let universe = self.card_universe();
        for pair in universe.windows(2) {
            assert!(pair[0] != pair[1], "card {} present twice", pair[0]);
        }

        assert!(self.turn_index < self.player_count(), "turn index out of range");

        if let Some(winner) = self.winner {
            assert!(self.is_alive(winner), "winner {} is eliminated", winner);
            assert_eq!(self.alive_count(), 1, "winner set with multiple players alive");
        }
    }
}
