//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "WordGrid";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API version prefix for the word service.
pub const API_VERSION: &str = "v1";

/// Default word service API timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Maximum whole-grid generation attempts before giving up.
pub const MAX_GENERATION_ATTEMPTS: u32 = 500;

/// Smallest supported grid dimension.
pub const MIN_GRID_SIZE: usize = 8;

/// Largest supported grid dimension.
pub const MAX_GRID_SIZE: usize = 16;

/// Longest word that can ever be placed (bounded by the largest grid).
pub const MAX_WORD_LEN: usize = MAX_GRID_SIZE;

/// Default number of words requested per puzzle.
pub const DEFAULT_WORDS_PER_PUZZLE: usize = 8;

/// Hard cap on words in a single puzzle.
pub const MAX_WORDS_PER_PUZZLE: usize = 12;

/// Built-in word pack theme identifiers.
pub mod themes {
    pub const ANIMALS: &str = "animals";
    pub const FOOD: &str = "food";
    pub const SPORTS: &str = "sports";
    pub const NATURE: &str = "nature";
    pub const TRAVEL: &str = "travel";
    pub const FAITH: &str = "faith";

    /// All built-in theme identifiers.
    pub const ALL: &[&str] = &[ANIMALS, FOOD, SPORTS, NATURE, TRAVEL, FAITH];
}

/// Derive the grid dimension for a set of words from the longest word length.
///
/// Clamped to `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
pub fn derive_grid_size(longest_word_len: usize) -> usize {
    longest_word_len.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_constants() {
        assert_eq!(themes::ALL.len(), 6);
        assert!(themes::ALL.contains(&"animals"));
    }

    #[test]
    fn test_derive_grid_size_clamps_low() {
        // Short words still get the minimum 8x8 grid
        assert_eq!(derive_grid_size(3), 8);
        assert_eq!(derive_grid_size(8), 8);
    }

    #[test]
    fn test_derive_grid_size_tracks_longest_word() {
        assert_eq!(derive_grid_size(12), 12);
    }

    #[test]
    fn test_derive_grid_size_clamps_high() {
        assert_eq!(derive_grid_size(16), 16);
        assert_eq!(derive_grid_size(40), 16);
    }
}
