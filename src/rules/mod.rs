//! Game rules: deck lifecycle, targeting, turn phases, card
//! resolution, and ultimates.
//!
//! These modules mutate [`GameState`](crate::state::GameState) and are
//! policy-free: who plays what is decided by the engine surface and the
//! AI policy, never here.

pub mod deck;
pub mod effects;
pub mod pending;
pub mod targeting;
pub mod turn;
pub mod ultimates;
