//! Platform abstraction layer
//!
//! Handles browser/native differences. Storage is the only platform concern
//! this game has: one LocalStorage slot on web, an in-memory slot elsewhere.

pub mod storage;

pub use storage::{LocalStorage, MemoryStore, ScoreStore, SCORE_KEY};
