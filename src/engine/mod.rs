//! The engine: command surface and driver loop.
//!
//! [`Engine`] owns the catalog and the game state. Humans act through
//! the command methods; after every accepted command the engine runs
//! its driver loop, which plays out AI turns, AI responses, and
//! judgement steps until the game either needs human input again or
//! ends. Refused commands return an [`EngineError`] and change nothing.

use crate::ai::{self, AiAction};
use crate::catalog::{
    card_ids, CardKind, Catalog, CharacterId, InstanceId, PlayingCard, Suit,
};
use crate::core::{EngineError, GameLog, GameRng, LogKind};
use crate::rules::{deck, pending, targeting, turn, ultimates};
use crate::state::{
    GameState, PendingAction, Phase, Player, PlayerId,
};

/// Seats in a standard game.
pub const PLAYER_COUNT: usize = 5;
/// Opening hand of the human seat.
pub const HUMAN_OPENING_HAND: usize = 6;
/// Opening hand of each AI seat.
pub const AI_OPENING_HAND: usize = 5;
/// Attack cards any seat may play per turn.
pub const ATTACK_LIMIT: u8 = 2;

/// Turns after which a game is abandoned as a stalemate. Reached only
/// in AI-only play; a game waiting on a human never ticks unattended.
const TURN_LIMIT: u32 = 400;

/// A full five-player game.
pub struct Engine {
    catalog: Catalog,
    state: GameState,
    plays_this_turn: usize,
    turns_taken: u32,
}

impl Engine {
    /// Start a standard game: the chosen character at seat 0, four AI
    /// seats drafted from the rest of the roster.
    ///
    /// The opening runs up to the human's first decision point.
    pub fn start_game(character: CharacterId, seed: u64) -> Result<Self, EngineError> {
        let catalog = Catalog::standard();
        if catalog.character(character).is_none() {
            return Err(EngineError::UnknownCharacter);
        }

        let mut rng = GameRng::new(seed);
        let mut roster: Vec<CharacterId> = catalog
            .characters()
            .map(|c| c.id)
            .filter(|&id| id != character)
            .collect();
        roster.sort_by_key(|id| id.raw());
        rng.shuffle(&mut roster);

        let mut picks = vec![character];
        picks.extend(roster.into_iter().take(PLAYER_COUNT - 1));

        let mut engine = Self::assemble(catalog, picks, false, seed, rng);
        engine.advance();
        Ok(engine)
    }

    /// Start an AI-only exhibition game and play it out.
    ///
    /// Ends with a winner or at the stalemate turn limit.
    pub fn start_exhibition(seed: u64) -> Result<Self, EngineError> {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(seed);
        let mut roster: Vec<CharacterId> = catalog.characters().map(|c| c.id).collect();
        roster.sort_by_key(|id| id.raw());
        rng.shuffle(&mut roster);
        roster.truncate(PLAYER_COUNT);

        let mut engine = Self::assemble(catalog, roster, true, seed, rng);
        engine.advance();
        Ok(engine)
    }

    fn assemble(
        catalog: Catalog,
        characters: Vec<CharacterId>,
        all_ai: bool,
        seed: u64,
        mut rng: GameRng,
    ) -> Self {
        let players: Vec<Player> = characters
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Player::new(
                    PlayerId::new(i as u8),
                    c,
                    catalog.character_max_hp(c),
                    all_ai || i != 0,
                )
            })
            .collect();

        let draw_pile = deck::build_draw_pile(&catalog, &mut rng);
        let mut state = GameState::new(players, draw_pile, seed);
        state.rng = rng;
        state
            .log
            .push(LogKind::Important, "Five-way brawl! Defeat every rival!");

        let mut engine = Self {
            catalog,
            state,
            plays_this_turn: 0,
            turns_taken: 0,
        };
        engine.deal_opening_hands();
        engine.apply_opening_passives();
        engine
    }

    fn deal_opening_hands(&mut self) {
        for seat in PlayerId::all(self.state.player_count()) {
            let count = if self.state.player(seat).is_ai {
                AI_OPENING_HAND
            } else {
                HUMAN_OPENING_HAND
            };
            deck::draw(&mut self.state, seat, count);
        }
    }

    fn apply_opening_passives(&mut self) {
        use crate::catalog::Passive;

        // Conjured armor is its own card instance, outside the deck.
        let mut conjured = 10_000u32;
        for seat in PlayerId::all(self.state.player_count()) {
            let character = self.state.player(seat).character;
            if self.catalog.has_passive(character, Passive::StartsArmored) {
                let vest = PlayingCard {
                    instance: InstanceId::new(conjured),
                    card: card_ids::IRON_VEST,
                    kind: CardKind::EquipArmor,
                    suit: Suit::Diamond,
                    rank: 1,
                };
                conjured += 1;
                self.state
                    .player_mut(seat)
                    .equipment
                    .set(crate::state::EquipSlot::Armor, vest);
            }
        }

        // The opening shockwave bruises but never eliminates.
        for seat in PlayerId::all(self.state.player_count()) {
            let character = self.state.player(seat).character;
            if !self.catalog.has_passive(character, Passive::OpeningShockwave) {
                continue;
            }
            let name = self.catalog.character_name(character).to_string();
            self.state.log.push(
                LogKind::Important,
                format!("{}'s arrival shakes the battlefield!", name),
            );
            for other in PlayerId::all(self.state.player_count()) {
                if other == seat {
                    continue;
                }
                let player = self.state.player_mut(other);
                player.hp = (player.hp - 1).max(1);
            }
        }
    }

    // === Observation ===

    /// The full game state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The static catalog backing this game.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The narrative log.
    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.state.log
    }

    /// The winning seat, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    // === Commands ===

    /// Play a card from the active seat's hand during its play phase.
    pub fn play_card(
        &mut self,
        seat: PlayerId,
        card: InstanceId,
        target: Option<PlayerId>,
    ) -> Result<(), EngineError> {
        self.require_play_phase(seat)?;

        let Some(played) = self.state.player(seat).card_in_hand(card) else {
            return Err(EngineError::CardNotInHand);
        };
        let played = played.clone();

        if !played.kind.is_proactive() {
            return Err(EngineError::WrongPhase);
        }

        let target = self.validate_target(seat, &played, target)?;

        // Everything checked; the play cannot fail from here.
        let lifted = self
            .state
            .player_mut(seat)
            .take_from_hand(card)
            .ok_or(EngineError::CardNotInHand)?;
        pending::resolve_play(&mut self.state, &self.catalog, seat, lifted, target);
        self.advance();
        Ok(())
    }

    fn validate_target(
        &self,
        seat: PlayerId,
        card: &PlayingCard,
        target: Option<PlayerId>,
    ) -> Result<Option<PlayerId>, EngineError> {
        if !card.kind.needs_target() {
            return Ok(None);
        }
        let Some(target) = target else {
            return Err(EngineError::TargetRequired);
        };
        if target == seat {
            return Err(EngineError::SelfTarget);
        }
        if !self.state.is_alive(target) {
            return Err(EngineError::TargetEliminated);
        }

        match card.kind {
            CardKind::Attack => {
                if self.state.player(seat).attacks_played >= ATTACK_LIMIT {
                    return Err(EngineError::AttackLimitReached);
                }
                if !targeting::in_attack_range(&self.state, &self.catalog, seat, target) {
                    return Err(EngineError::OutOfRange);
                }
                if targeting::is_immune_to_attack(&self.state, &self.catalog, seat, target, card) {
                    return Err(EngineError::TargetImmune);
                }
            }
            CardKind::StealScroll => {
                if targeting::distance(&self.state, &self.catalog, seat, target) > 1 {
                    return Err(EngineError::OutOfRange);
                }
            }
            _ => {}
        }
        Ok(Some(target))
    }

    /// Answer the open response window: play the demanded card, or
    /// `None` to decline.
    pub fn respond(&mut self, seat: PlayerId, card: Option<InstanceId>) -> Result<(), EngineError> {
        if self.state.winner.is_some() {
            return Err(EngineError::GameOver);
        }
        let Some(PendingAction::ResponseWindow {
            target, demanded, ..
        }) = self.state.pending.as_ref()
        else {
            return Err(EngineError::NothingPending);
        };
        let (target, demanded) = (*target, *demanded);
        if target != seat {
            return Err(EngineError::NotYourWindow(seat.0));
        }

        let answer = match card {
            None => None,
            Some(instance) => {
                let Some(held) = self.state.player(seat).card_in_hand(instance) else {
                    return Err(EngineError::CardNotInHand);
                };
                if held.kind != demanded {
                    return Err(EngineError::WrongResponseKind);
                }
                self.state.player_mut(seat).take_from_hand(instance)
            }
        };

        pending::answer_window(&mut self.state, &self.catalog, answer);
        self.advance();
        Ok(())
    }

    /// Discard the named cards to satisfy the hand limit.
    pub fn confirm_discard(
        &mut self,
        seat: PlayerId,
        picks: &[InstanceId],
    ) -> Result<(), EngineError> {
        if self.state.winner.is_some() {
            return Err(EngineError::GameOver);
        }
        if self.state.pending.is_some() {
            return Err(EngineError::ActionPending);
        }
        if self.state.active_seat() != seat {
            return Err(EngineError::NotYourTurn(seat.0));
        }
        let Phase::Discard { required } = self.state.phase else {
            return Err(EngineError::WrongPhase);
        };
        if picks.len() != required {
            return Err(EngineError::DiscardCountMismatch {
                required,
                offered: picks.len(),
            });
        }
        for (i, pick) in picks.iter().enumerate() {
            if picks[..i].contains(pick) || self.state.player(seat).card_in_hand(*pick).is_none() {
                return Err(EngineError::DiscardNotInHand);
            }
        }

        for pick in picks {
            if let Some(card) = self.state.player_mut(seat).take_from_hand(*pick) {
                deck::discard(&mut self.state, card);
            }
        }
        let name = self
            .catalog
            .character_name(self.state.player(seat).character)
            .to_string();
        self.state.log.push(
            LogKind::Info,
            format!("{} discards {} cards", name, required),
        );
        self.state.phase = Phase::End;
        self.advance();
        Ok(())
    }

    /// Fire the active seat's ultimate during its play phase.
    pub fn trigger_ultimate(
        &mut self,
        seat: PlayerId,
        target: Option<PlayerId>,
    ) -> Result<(), EngineError> {
        self.require_play_phase(seat)?;
        ultimates::fire(&mut self.state, &self.catalog, seat, target)?;
        self.advance();
        Ok(())
    }

    /// End the active seat's play phase voluntarily.
    pub fn end_play_phase(&mut self, seat: PlayerId) -> Result<(), EngineError> {
        self.require_play_phase(seat)?;
        turn::leave_play_phase(&mut self.state);
        self.advance();
        Ok(())
    }

    fn require_play_phase(&self, seat: PlayerId) -> Result<(), EngineError> {
        if self.state.winner.is_some() {
            return Err(EngineError::GameOver);
        }
        if self.state.pending.is_some() {
            return Err(EngineError::ActionPending);
        }
        if self.state.active_seat() != seat {
            return Err(EngineError::NotYourTurn(seat.0));
        }
        if self.state.phase != Phase::Play {
            return Err(EngineError::WrongPhase);
        }
        Ok(())
    }

    // === Driver loop ===

    /// Run every automatic step: phases, judgements, AI turns, and AI
    /// responses. Stops when the game ends, a human must act, or the
    /// stalemate limit is hit.
    fn advance(&mut self) {
        loop {
            if self.state.winner.is_some() {
                self.state.pending = None;
                return;
            }

            let open_window = match &self.state.pending {
                None => None,
                Some(PendingAction::Judgement { .. }) => {
                    pending::step_judgement(&mut self.state, &self.catalog);
                    continue;
                }
                Some(PendingAction::ResponseWindow {
                    target, demanded, ..
                }) => Some((*target, *demanded)),
            };
            if let Some((target, demanded)) = open_window {
                if !self.state.player(target).is_ai {
                    return;
                }
                let pick = ai::decide_response(&self.state, target, demanded);
                let answer = pick.and_then(|i| self.state.player_mut(target).take_from_hand(i));
                pending::answer_window(&mut self.state, &self.catalog, answer);
                continue;
            }

            match self.state.phase {
                Phase::Start => {
                    self.plays_this_turn = 0;
                    turn::begin_turn(&mut self.state, &self.catalog);
                }
                Phase::Draw => turn::draw_step(&mut self.state, &self.catalog),
                Phase::Play => {
                    let seat = self.state.active_seat();
                    if !self.state.player(seat).is_ai {
                        return;
                    }
                    if !self.run_ai_play(seat) {
                        turn::leave_play_phase(&mut self.state);
                    }
                }
                Phase::Discard { required } => {
                    let seat = self.state.active_seat();
                    if !self.state.player(seat).is_ai {
                        return;
                    }
                    let picks = ai::choose_discards(&self.state, seat, required);
                    for pick in picks {
                        if let Some(card) = self.state.player_mut(seat).take_from_hand(pick) {
                            deck::discard(&mut self.state, card);
                        }
                    }
                    self.state.phase = Phase::End;
                }
                Phase::End => {
                    self.turns_taken += 1;
                    if self.turns_taken >= TURN_LIMIT {
                        return;
                    }
                    turn::end_turn(&mut self.state);
                }
            }
        }
    }

    /// One AI play-phase decision. Returns false when the phase should
    /// end.
    fn run_ai_play(&mut self, seat: PlayerId) -> bool {
        if !crate::ai::policy::should_keep_playing(self.plays_this_turn) {
            return false;
        }
        match ai::decide(&self.state, &self.catalog, seat) {
            AiAction::EndPhase => false,
            AiAction::PlayCard { card, target } => {
                let Some(played) = self.state.player(seat).card_in_hand(card) else {
                    return false;
                };
                let played = played.clone();
                let Ok(target) = self.validate_target(seat, &played, target) else {
                    return false;
                };
                let Some(lifted) = self.state.player_mut(seat).take_from_hand(card) else {
                    return false;
                };
                self.plays_this_turn += 1;
                pending::resolve_play(&mut self.state, &self.catalog, seat, lifted, target);
                true
            }
        }
    }
}
