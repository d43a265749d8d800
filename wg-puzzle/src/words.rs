//! Word list ingestion and normalization.
//!
//! Words are uppercased exactly once, here. Case-insensitive duplicates
//! collapse to their first occurrence so the verification scan never counts
//! one placement twice for two copies of the same word.

use wg_core::constants::MAX_WORD_LEN;
use wg_core::error::{WgError, WgResult};

/// Normalize a raw word list for puzzle generation.
///
/// - trims surrounding whitespace and drops blank entries
/// - uppercases every word
/// - rejects words with characters outside A-Z
/// - rejects words longer than the largest supported grid
/// - removes duplicates (case-insensitive), keeping first appearance
///
/// Errors if no usable words remain.
pub fn normalize_words<S: AsRef<str>>(raw: &[S]) -> WgResult<Vec<String>> {
    let mut words: Vec<String> = Vec::with_capacity(raw.len());

    for entry in raw {
        let trimmed = entry.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }

        let upper = trimmed.to_uppercase();
        if !upper.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WgError::InvalidWord(trimmed.to_string()));
        }
        if upper.len() > MAX_WORD_LEN {
            return Err(WgError::WordTooLong {
                word: upper,
                len: trimmed.chars().count(),
                max: MAX_WORD_LEN,
            });
        }

        if !words.contains(&upper) {
            words.push(upper);
        }
    }

    if words.is_empty() {
        return Err(WgError::EmptyWordList);
    }

    Ok(words)
}

/// Length of the longest word in a normalized list.
pub fn longest_len(words: &[String]) -> usize {
    words.iter().map(|w| w.chars().count()).max().unwrap_or(0)
}
