//! # shinobi-brawl
//!
//! Rules engine for a five-player free-for-all ninja card battle.
//! One human seat faces four AI opponents; last ninja standing wins.
//!
//! ## Design Principles
//!
//! 1. **Data over dispatch**: Cards and characters are catalog entries.
//!    Rules code branches on card kinds, passives, and ultimate scripts,
//!    never on names or identities.
//!
//! 2. **One command surface**: Humans and the AI act through the same
//!    engine commands with the same validation. A refused command
//!    returns an error and changes nothing.
//!
//! 3. **Deterministic by seed**: Every random decision flows through a
//!    single seeded RNG; a seed replays the whole game.
//!
//! ## Modules
//!
//! - `core`: RNG, error taxonomy, narrative log
//! - `catalog`: Static card and character definitions
//! - `state`: Players, piles, phases, pending interactions
//! - `rules`: Deck lifecycle, targeting, turn machine, card resolution,
//!   ultimates
//! - `ai`: Heuristic opponent policy
//! - `engine`: Command surface and the driver loop

pub mod ai;
pub mod catalog;
pub mod core;
pub mod engine;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::catalog::{
    card_ids, character_ids, CardDefinition, CardId, CardKind, Catalog, CharacterDefinition,
    CharacterId, InstanceId, JudgementRule, Passive, PlayingCard, Suit, Ultimate,
    UltimateCondition, UltimateKind, UltimateOp,
};
pub use crate::core::{EngineError, GameLog, GameRng, LogEntry, LogKind};
pub use crate::engine::Engine;
pub use crate::state::{
    EquipSlot, Equipment, GameState, PendingAction, Phase, Player, PlayerId, UltimateState,
};
