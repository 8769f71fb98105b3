//! Game session controller
//!
//! Owns the session state, the die RNG, and the persisted score slot. All
//! mutation is method-driven: each operation applies its state update and its
//! persistence side effect directly. The roll delay is a tick countdown
//! advanced by `tick()` - no wall-clock waits anywhere in the core.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::state::{RollOutcome, RollPhase, SessionState};
use crate::consts::{FACE_MAX, FACE_MIN, ROLL_DURATION_TICKS};
use crate::platform::ScoreStore;

/// The game session: state machine plus its two boundaries (RNG, storage)
pub struct GameSession<S: ScoreStore> {
    state: SessionState,
    rng: Pcg32,
    store: S,
}

impl<S: ScoreStore> GameSession<S> {
    /// Start a session, reading the persisted score from the store
    pub fn new(seed: u64, store: S) -> Self {
        let score = store.load_score();
        log::info!("Session started (score {}, seed {})", score, seed);
        Self {
            state: SessionState::new(score),
            rng: Pcg32::seed_from_u64(seed),
            store,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Pick the number to bet on; out-of-range input is ignored
    pub fn select_number(&mut self, n: u8) {
        if (FACE_MIN..=FACE_MAX).contains(&n) {
            self.state.selected_number = n;
        }
    }

    /// Switch difficulty: refills the attempt budget, leaves score alone
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
        self.state.remaining_attempts = difficulty.attempt_budget();
        log::info!(
            "Difficulty: {} ({} attempts)",
            difficulty.as_str(),
            self.state.remaining_attempts
        );
    }

    /// Start a roll. No-op when out of attempts or a roll is in flight.
    pub fn roll(&mut self) {
        if self.state.out_of_attempts() || self.state.is_rolling() {
            return;
        }
        self.state.phase = RollPhase::Rolling {
            ticks_remaining: ROLL_DURATION_TICKS,
        };
    }

    /// Advance the roll countdown by one fixed timestep
    pub fn tick(&mut self) {
        if let RollPhase::Rolling { ticks_remaining } = self.state.phase {
            if ticks_remaining > 1 {
                self.state.phase = RollPhase::Rolling {
                    ticks_remaining: ticks_remaining - 1,
                };
            } else {
                let face = self.rng.random_range(FACE_MIN..=FACE_MAX);
                self.resolve_roll(face);
            }
        }
    }

    /// Settle a drawn face: attempts, score, persistence
    fn resolve_roll(&mut self, face: u8) {
        let matched = face == self.state.selected_number;
        let reward = if matched { face as u64 } else { 0 };

        self.state.dice_value = Some(face);
        self.state.remaining_attempts -= 1;
        self.state.last_roll = Some(RollOutcome {
            face,
            matched,
            reward,
        });
        self.state.phase = RollPhase::Idle;

        if matched {
            self.state.score += reward;
            self.store.save_score(self.state.score);
        }

        log::info!(
            "Rolled {} (picked {}): {}, {} attempts left",
            face,
            self.state.selected_number,
            if matched { "match" } else { "miss" },
            self.state.remaining_attempts
        );
    }

    /// Zero the score and refill the attempt budget for the current tier
    ///
    /// The picked number, difficulty, and last die face stay as they are.
    pub fn reset_game(&mut self) {
        self.state.score = 0;
        self.state.remaining_attempts = self.state.difficulty.attempt_budget();
        self.store.save_score(0);
        log::info!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    fn session(seed: u64) -> GameSession<MemoryStore> {
        GameSession::new(seed, MemoryStore::new())
    }

    /// Tick a started roll through to resolution
    fn finish_roll<S: ScoreStore>(session: &mut GameSession<S>) {
        for _ in 0..ROLL_DURATION_TICKS {
            session.tick();
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session(1);
        let state = s.state();
        assert_eq!(state.selected_number, 1);
        assert_eq!(state.dice_value, None);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.remaining_attempts, 10);
        assert!(!state.is_rolling());
    }

    #[test]
    fn test_select_number_all_faces() {
        let mut s = session(1);
        for n in FACE_MIN..=FACE_MAX {
            s.select_number(n);
            assert_eq!(s.state().selected_number, n);
        }
    }

    #[test]
    fn test_select_number_out_of_range_ignored() {
        let mut s = session(1);
        s.select_number(4);
        s.select_number(0);
        s.select_number(7);
        assert_eq!(s.state().selected_number, 4);
    }

    #[test]
    fn test_set_difficulty_refills_attempts_keeps_score() {
        let mut s = session(1);
        s.roll();
        s.resolve_roll(s.state().selected_number); // guaranteed match
        let score = s.state().score;
        assert!(score > 0);

        s.set_difficulty(Difficulty::Medium);
        assert_eq!(s.state().remaining_attempts, 7);
        assert_eq!(s.state().score, score);

        s.set_difficulty(Difficulty::Hard);
        assert_eq!(s.state().remaining_attempts, 5);

        // Re-selecting the active tier also refills
        s.roll();
        finish_roll(&mut s);
        assert_eq!(s.state().remaining_attempts, 4);
        s.set_difficulty(Difficulty::Hard);
        assert_eq!(s.state().remaining_attempts, 5);
    }

    #[test]
    fn test_roll_countdown_defers_outcome() {
        let mut s = session(42);
        s.roll();
        assert!(s.state().is_rolling());

        for _ in 0..ROLL_DURATION_TICKS - 1 {
            s.tick();
        }
        // Still tumbling: nothing settled yet
        assert!(s.state().is_rolling());
        assert_eq!(s.state().dice_value, None);
        assert_eq!(s.state().remaining_attempts, 10);

        s.tick();
        assert!(!s.state().is_rolling());
        assert_eq!(s.state().remaining_attempts, 9);
        let face = s.state().dice_value.expect("roll should resolve");
        assert!((FACE_MIN..=FACE_MAX).contains(&face));
    }

    #[test]
    fn test_completed_roll_scores_iff_match() {
        let mut s = session(7);
        s.select_number(3);
        let score_before = s.state().score;
        s.roll();
        finish_roll(&mut s);

        let outcome = s.state().last_roll.expect("outcome recorded");
        if outcome.matched {
            assert_eq!(outcome.face, 3);
            assert_eq!(outcome.reward, outcome.face as u64);
            assert_eq!(s.state().score, score_before + outcome.face as u64);
        } else {
            assert_eq!(outcome.reward, 0);
            assert_eq!(s.state().score, score_before);
        }
    }

    #[test]
    fn test_scenario_match_then_miss() {
        // Easy tier, pick 4: a rolled 4 pays 4 points, a rolled 2 pays nothing
        let mut s = session(1);
        s.select_number(4);

        s.roll();
        s.resolve_roll(4);
        assert_eq!(s.state().score, 4);
        assert_eq!(s.state().remaining_attempts, 9);

        s.roll();
        s.resolve_roll(2);
        assert_eq!(s.state().score, 4);
        assert_eq!(s.state().remaining_attempts, 8);
        assert_eq!(s.state().dice_value, Some(2));
    }

    #[test]
    fn test_roll_while_rolling_is_noop() {
        let mut s = session(9);
        s.roll();
        s.tick();
        s.roll(); // ignored: countdown already running
        finish_roll(&mut s);
        assert_eq!(s.state().remaining_attempts, 9);
    }

    #[test]
    fn test_roll_with_no_attempts_is_noop() {
        let mut s = session(5);
        s.set_difficulty(Difficulty::Hard);
        for _ in 0..5 {
            s.roll();
            finish_roll(&mut s);
        }
        assert_eq!(s.state().remaining_attempts, 0);

        let before = s.state().clone();
        s.roll();
        assert!(!s.state().is_rolling());
        finish_roll(&mut s);
        assert_eq!(s.state().remaining_attempts, 0);
        assert_eq!(s.state().score, before.score);
        assert_eq!(s.state().dice_value, before.dice_value);
    }

    #[test]
    fn test_reset_game() {
        let mut s = session(3);
        s.select_number(6);
        s.set_difficulty(Difficulty::Medium);
        s.roll();
        s.resolve_roll(6);
        assert_eq!(s.state().score, 6);
        assert_eq!(s.state().remaining_attempts, 6);

        s.reset_game();
        assert_eq!(s.state().score, 0);
        assert_eq!(s.state().remaining_attempts, 7);
        assert_eq!(s.state().selected_number, 6);
        assert_eq!(s.state().difficulty, Difficulty::Medium);
        assert_eq!(s.state().dice_value, Some(6));
    }

    #[test]
    fn test_score_round_trip_through_store() {
        let mut store = MemoryStore::new();
        {
            let mut s = GameSession::new(11, &mut store);
            s.select_number(5);
            s.roll();
            s.resolve_roll(5);
            assert_eq!(s.state().score, 5);
        }
        let s = GameSession::new(12, &mut store);
        assert_eq!(s.state().score, 5);
    }

    #[test]
    fn test_reset_persists_zero() {
        let mut store = MemoryStore::new();
        {
            let mut s = GameSession::new(11, &mut store);
            s.roll();
            s.resolve_roll(1);
            s.reset_game();
        }
        let s = GameSession::new(12, &mut store);
        assert_eq!(s.state().score, 0);
    }

    #[test]
    fn test_corrupt_slot_reads_as_zero() {
        let store = MemoryStore::with_raw("definitely not a number");
        let s = GameSession::new(1, store);
        assert_eq!(s.state().score, 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, Copy)]
        enum Op {
            Select(u8),
            SetDifficulty(Difficulty),
            Roll,
            Reset,
            Ticks(u32),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1u8..=6).prop_map(Op::Select),
                (0usize..3).prop_map(|i| Op::SetDifficulty(Difficulty::ALL[i])),
                Just(Op::Roll),
                Just(Op::Reset),
                (1u32..=2 * ROLL_DURATION_TICKS).prop_map(Op::Ticks),
            ]
        }

        proptest! {
            #[test]
            fn prop_invariants_hold(
                seed in any::<u64>(),
                ops in prop::collection::vec(op_strategy(), 0..64),
            ) {
                let mut s = session(seed);
                for op in ops {
                    let score_before = s.state().score;
                    let was_reset = matches!(op, Op::Reset);
                    match op {
                        Op::Select(n) => s.select_number(n),
                        Op::SetDifficulty(d) => s.set_difficulty(d),
                        Op::Roll => s.roll(),
                        Op::Reset => s.reset_game(),
                        Op::Ticks(n) => {
                            for _ in 0..n {
                                s.tick();
                            }
                        }
                    }

                    let state = s.state();
                    // Attempts never exceed the active budget
                    prop_assert!(state.remaining_attempts <= state.difficulty.attempt_budget());
                    // Score only moves up, except on reset
                    if !was_reset {
                        prop_assert!(state.score >= score_before);
                    }
                    // Any settled face is a real die face
                    if let Some(face) = state.dice_value {
                        prop_assert!((FACE_MIN..=FACE_MAX).contains(&face));
                    }
                }
            }
        }
    }
}
