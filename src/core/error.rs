//! Command-surface error taxonomy.
//!
//! Every refused command maps to an [`EngineError`] and leaves the game
//! state untouched. These are advisory refusals, never fatal: the caller
//! (a UI or a driver loop) reports them and carries on.
//!
//! Invariant violations — a card in two places, hp out of bounds — are
//! engine bugs, not errors. They are checked by
//! `GameState::check_invariants` in tests and must be unreachable through
//! this surface.

use thiserror::Error;

/// A command the engine refused to execute.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("it is not seat {0}'s turn")]
    NotYourTurn(u8),

    #[error("that action is not legal in the current phase")]
    WrongPhase,

    #[error("an interactive window is waiting on a response")]
    ActionPending,

    #[error("no interactive window is open")]
    NothingPending,

    #[error("the open window is not addressed to seat {0}")]
    NotYourWindow(u8),

    #[error("the response card is not of the demanded kind")]
    WrongResponseKind,

    #[error("card is not in hand")]
    CardNotInHand,

    #[error("this card needs a target")]
    TargetRequired,

    #[error("cannot target yourself with this card")]
    SelfTarget,

    #[error("target is already eliminated")]
    TargetEliminated,

    #[error("target is out of range")]
    OutOfRange,

    #[error("target is immune to this card")]
    TargetImmune,

    #[error("only two attack cards may be played per turn")]
    AttackLimitReached,

    #[error("expected {required} discards, got {offered}")]
    DiscardCountMismatch { required: usize, offered: usize },

    #[error("discard selection includes a card not in hand")]
    DiscardNotInHand,

    #[error("ultimate is on cooldown")]
    UltimateOnCooldown,

    #[error("ultimate conditions are not met")]
    UltimateUnavailable,

    #[error("the game is already over")]
    GameOver,

    #[error("character is not in the catalog")]
    UnknownCharacter,
}
