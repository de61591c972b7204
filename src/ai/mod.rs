//! AI opponents.

pub mod policy;

pub use policy::{choose_discards, decide, decide_response, AiAction, AI_ATTACK_LIMIT};
