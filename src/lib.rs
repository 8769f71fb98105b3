//! Lucky Six - a pick-a-number dice betting game
//!
//! Core modules:
//! - `sim`: Deterministic game session (attempts, score, roll countdown)
//! - `platform`: Browser/native platform abstraction (score storage)

pub mod platform;
pub mod sim;

pub use platform::{LocalStorage, MemoryStore, ScoreStore};
pub use sim::{Difficulty, GameSession, RollOutcome, RollPhase, SessionState};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz UI tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Die face range
    pub const FACE_MIN: u8 = 1;
    pub const FACE_MAX: u8 = 6;

    /// Roll animation duration in ticks (500 ms at 60 Hz)
    pub const ROLL_DURATION_TICKS: u32 = 30;
}
