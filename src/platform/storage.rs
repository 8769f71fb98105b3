//! Persisted score slot
//!
//! A single key holding the score as JSON integer text, read once at session
//! start and written on every score change. Missing or unparsable data reads
//! as zero; write failures are ignored.

/// LocalStorage key for the saved score
pub const SCORE_KEY: &str = "lucky_six_score";

/// Durable slot for the session score
pub trait ScoreStore {
    /// Read the saved score; absent or corrupt data is zero
    fn load_score(&self) -> u64;
    /// Write the score
    fn save_score(&mut self, score: u64);
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn load_score(&self) -> u64 {
        (**self).load_score()
    }

    fn save_score(&mut self, score: u64) {
        (**self).save_score(score);
    }
}

/// Parse slot text as a JSON integer
fn parse_score(text: &str) -> Option<u64> {
    serde_json::from_str(text).ok()
}

/// Browser LocalStorage slot (no-op outside wasm32)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorage {
    fn load_score(&self) -> u64 {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(text)) = storage.get_item(SCORE_KEY) {
                match parse_score(&text) {
                    Some(score) => {
                        log::info!("Loaded saved score: {}", score);
                        return score;
                    }
                    None => log::warn!("Saved score unreadable, starting at 0"),
                }
            }
        }

        0
    }

    fn save_score(&mut self, score: u64) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(text) = serde_json::to_string(&score) {
                let _ = storage.set_item(SCORE_KEY, &text);
                log::info!("Score saved: {}", score);
            }
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for LocalStorage {
    fn load_score(&self) -> u64 {
        0
    }

    fn save_score(&mut self, _score: u64) {
        // No-op for native
    }
}

/// In-memory slot for native builds and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw text (tests use this to simulate corruption)
    pub fn with_raw(text: &str) -> Self {
        Self {
            slot: Some(text.to_string()),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_score(&self) -> u64 {
        self.slot
            .as_deref()
            .and_then(parse_score)
            .unwrap_or(0)
    }

    fn save_score(&mut self, score: u64) {
        if let Ok(text) = serde_json::to_string(&score) {
            self.slot = Some(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_accepts_json_integers() {
        assert_eq!(parse_score("42"), Some(42));
        assert_eq!(parse_score("0"), Some(0));
    }

    #[test]
    fn test_parse_score_rejects_garbage() {
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score("-5"), None);
        assert_eq!(parse_score("12.5"), None);
        assert_eq!(parse_score("{\"score\":3}"), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_score(), 0);
        store.save_score(17);
        assert_eq!(store.load_score(), 17);
    }

    #[test]
    fn test_memory_store_corrupt_reads_as_zero() {
        let store = MemoryStore::with_raw("not json");
        assert_eq!(store.load_score(), 0);
    }
}
