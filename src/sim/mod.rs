//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Tick-count timers only (no wall clock)
//! - Seeded RNG only
//! - No rendering or DOM dependencies

pub mod difficulty;
pub mod state;
pub mod tick;

pub use difficulty::Difficulty;
pub use state::{RollOutcome, RollPhase, SessionState};
pub use tick::GameSession;
