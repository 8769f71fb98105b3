//! Difficulty tiers and their fixed attempt budgets

use serde::{Deserialize, Serialize};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in display order (for button wiring)
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Attempt budget for this tier
    pub fn attempt_budget(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_budgets() {
        assert_eq!(Difficulty::Easy.attempt_budget(), 10);
        assert_eq!(Difficulty::Medium.attempt_budget(), 7);
        assert_eq!(Difficulty::Hard.attempt_budget(), 5);
    }

    #[test]
    fn test_from_str_round_trip() {
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
