//! Core infrastructure: RNG, logging, errors.

pub mod error;
pub mod log;
pub mod rng;

pub use error::EngineError;
pub use log::{GameLog, LogEntry, LogKind, LOG_CAPACITY};
pub use rng::GameRng;
