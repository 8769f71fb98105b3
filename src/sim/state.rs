//! Session state and core types
//!
//! Everything the presentation layer reads each frame lives here.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::consts::FACE_MIN;

/// Current phase of the die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollPhase {
    /// No roll in progress
    Idle,
    /// Die is tumbling; the outcome applies when the countdown elapses
    Rolling { ticks_remaining: u32 },
}

/// Result of the most recently completed roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Face the die landed on
    pub face: u8,
    /// Whether it matched the picked number
    pub matched: bool,
    /// Points awarded (the face value on a match, 0 otherwise)
    pub reward: u64,
}

/// Complete session state (what the HUD renders from)
///
/// Only `score` survives a restart; everything else reinitializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Number the player is betting on (1-6)
    pub selected_number: u8,
    /// Last face shown on the die, `None` until the first roll resolves
    pub dice_value: Option<u8>,
    /// Accumulated score (persisted)
    pub score: u64,
    /// Rolls left in the current attempt budget
    pub remaining_attempts: u32,
    /// Roll countdown state
    pub phase: RollPhase,
    /// Active difficulty tier
    pub difficulty: Difficulty,
    /// Outcome of the last resolved roll, for HUD feedback
    pub last_roll: Option<RollOutcome>,
}

impl SessionState {
    /// Fresh session with the given persisted score
    pub fn new(score: u64) -> Self {
        let difficulty = Difficulty::default();
        Self {
            selected_number: FACE_MIN,
            dice_value: None,
            score,
            remaining_attempts: difficulty.attempt_budget(),
            phase: RollPhase::Idle,
            difficulty,
            last_roll: None,
        }
    }

    /// True while the roll countdown is running
    #[inline]
    pub fn is_rolling(&self) -> bool {
        matches!(self.phase, RollPhase::Rolling { .. })
    }

    /// True once the attempt budget is spent
    #[inline]
    pub fn out_of_attempts(&self) -> bool {
        self.remaining_attempts == 0
    }
}
