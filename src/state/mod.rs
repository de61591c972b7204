//! Mutable game state: players, piles, phase machine bookkeeping.

pub mod game;
pub mod player;

pub use game::{FollowUp, GameState, JudgementStep, PendingAction, Phase};
pub use player::{EquipSlot, Equipment, Player, PlayerId, UltimateState};
