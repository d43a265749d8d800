//! Whole-grid puzzle generation with a bounded retry budget.
//!
//! Each attempt places every word greedily (longest first, shuffled
//! directions, cells in scan order) onto an empty grid, fills the leftover
//! cells with random letters, then runs the scan-based verification pass.
//! Attempts are independent and stateless; the first attempt whose finished
//! grid re-locates every word wins. Exhausting the budget yields a typed
//! error and never a partial grid.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use wg_core::constants::{derive_grid_size, MAX_GENERATION_ATTEMPTS, MIN_GRID_SIZE, MAX_GRID_SIZE};
use wg_core::error::{WgError, WgResult};

use crate::direction::Direction;
use crate::grid::{Grid, GridPos};
use crate::placement::Placement;
use crate::verify::verify_grid;
use crate::words::{longest_len, normalize_words};

/// A finished word-search puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// The filled letter grid.
    pub grid: Grid,
    /// The hidden words, normalized, in placement order (longest first).
    pub words: Vec<String>,
    /// Where each word was placed. The solution.
    pub placements: Vec<Placement>,
}

impl Puzzle {
    /// Grid dimension N.
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Generate a puzzle from raw words with an entropy-seeded RNG.
///
/// `size` overrides the derived grid dimension; it is clamped to the
/// supported range. When `None`, the dimension is derived from the longest
/// word length.
pub fn generate<S: AsRef<str>>(raw_words: &[S], size: Option<usize>) -> WgResult<Puzzle> {
    let mut rng = StdRng::from_entropy();
    generate_with_rng(raw_words, size, MAX_GENERATION_ATTEMPTS, &mut rng)
}

/// Generate a puzzle deterministically from a seed.
pub fn generate_seeded<S: AsRef<str>>(
    raw_words: &[S],
    size: Option<usize>,
    seed: u64,
) -> WgResult<Puzzle> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(raw_words, size, MAX_GENERATION_ATTEMPTS, &mut rng)
}

/// Generate a puzzle using the supplied RNG and attempt budget.
///
/// This is the full entry point; the other constructors delegate here.
pub fn generate_with_rng<S, R>(
    raw_words: &[S],
    size: Option<usize>,
    max_attempts: u32,
    rng: &mut R,
) -> WgResult<Puzzle>
where
    S: AsRef<str>,
    R: Rng,
{
    let mut words = normalize_words(raw_words)?;

    // Longer words are harder to place later, so place them first.
    // The sort is stable: equal-length words keep their input order.
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let grid_size = match size {
        Some(n) => n.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
        None => derive_grid_size(longest_len(&words)),
    };

    for attempt in 1..=max_attempts {
        let Some((mut grid, placements)) = attempt_placement(&words, grid_size, rng) else {
            continue;
        };

        grid.fill_empty(rng);

        // Post-hoc revalidation: re-locate every word by scanning the
        // finished grid instead of trusting the placement bookkeeping.
        match verify_grid(&grid, &words) {
            Ok(_) => {
                debug!(
                    "generated {grid_size}x{grid_size} grid with {} words on attempt {attempt}",
                    words.len()
                );
                return Ok(Puzzle {
                    grid,
                    words,
                    placements,
                });
            }
            Err(e) => {
                warn!("attempt {attempt} placed all words but failed verification: {e}");
                continue;
            }
        }
    }

    Err(WgError::GenerationFailed {
        attempts: max_attempts,
    })
}

/// One whole-grid placement attempt.
///
/// Returns `None` as soon as any word has no legal placement, abandoning
/// the attempt.
fn attempt_placement<R: Rng>(
    words: &[String],
    grid_size: usize,
    rng: &mut R,
) -> Option<(Grid, Vec<Placement>)> {
    let mut grid = Grid::new(grid_size);
    let mut placements = Vec::with_capacity(words.len());

    for word in words {
        let placement = place_word(&grid, word, rng)?;
        placement.apply(&mut grid);
        placements.push(placement);
    }

    Some((grid, placements))
}

/// Find the first legal placement for a word.
///
/// Directions are tried in shuffled order; within a direction, start cells
/// are tried in scan order (top-left to bottom-right).
fn place_word<R: Rng>(grid: &Grid, word: &str, rng: &mut R) -> Option<Placement> {
    let mut directions = Direction::ALL;
    directions.shuffle(rng);

    for direction in directions {
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let candidate = Placement::new(word, GridPos::new(row, col), direction);
                if candidate.fits(grid) {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::find_word;

    #[test]
    fn test_generate_cat_dog_bird_seeded() {
        // Max word length 4 < 8, so the derived grid must be 8x8
        let puzzle = generate_seeded(&["CAT", "DOG", "BIRD"], None, 42).unwrap();
        assert_eq!(puzzle.size(), 8);
        assert!(puzzle.grid.is_filled());
        for word in &puzzle.words {
            assert!(find_word(&puzzle.grid, word).is_some(), "{word} not locatable");
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_seeded(&["CAT", "DOG", "BIRD"], None, 7).unwrap();
        let b = generate_seeded(&["CAT", "DOG", "BIRD"], None, 7).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
    }

    #[test]
    fn test_different_seeds_both_verify() {
        let a = generate_seeded(&["RIVER", "STONE", "CLOUD"], None, 1).unwrap();
        let b = generate_seeded(&["RIVER", "STONE", "CLOUD"], None, 2).unwrap();
        for puzzle in [&a, &b] {
            assert!(verify_grid(&puzzle.grid, &puzzle.words).is_ok());
        }
    }

    #[test]
    fn test_words_sorted_longest_first() {
        let puzzle = generate_seeded(&["OX", "GIRAFFE", "CAT"], None, 3).unwrap();
        assert_eq!(puzzle.words, vec!["GIRAFFE", "CAT", "OX"]);
        assert_eq!(puzzle.placements[0].word, "GIRAFFE");
    }

    #[test]
    fn test_grid_size_tracks_longest_word() {
        let puzzle = generate_seeded(&["HIPPOPOTAMUS"], None, 9).unwrap();
        assert_eq!(puzzle.size(), 12);
    }

    #[test]
    fn test_explicit_size_clamped() {
        let puzzle = generate_seeded(&["CAT"], Some(4), 11).unwrap();
        assert_eq!(puzzle.size(), 8);

        let puzzle = generate_seeded(&["CAT"], Some(99), 11).unwrap();
        assert_eq!(puzzle.size(), 16);
    }

    #[test]
    fn test_word_longer_than_explicit_grid_fails() {
        // A 12-letter word can never fit an 8x8 grid; the budget must
        // exhaust without a partial puzzle.
        let mut rng = StdRng::seed_from_u64(5);
        let err =
            generate_with_rng(&["HIPPOPOTAMUS", "CAT"], Some(8), 20, &mut rng).unwrap_err();
        assert!(matches!(err, WgError::GenerationFailed { attempts: 20 }));
    }

    #[test]
    fn test_all_cells_filled_uppercase() {
        let puzzle = generate_seeded(&["MANGO", "PEACH", "PLUM"], None, 13).unwrap();
        for row in puzzle.grid.rows() {
            assert!(row.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let puzzle = generate_seeded(&["cat", "CAT", "dog"], None, 17).unwrap();
        assert_eq!(puzzle.words, vec!["CAT", "DOG"]);
        assert_eq!(puzzle.placements.len(), 2);
    }

    #[test]
    fn test_dense_word_set_converges() {
        // Ten words on a derived grid, the upper end of what the app asks for
        let words = [
            "ELEPHANT", "GIRAFFE", "PENGUIN", "DOLPHIN", "LEOPARD",
            "RACCOON", "OSTRICH", "BUFFALO", "GORILLA", "PANTHER",
        ];
        let puzzle = generate_seeded(&words, None, 23).unwrap();
        assert_eq!(puzzle.words.len(), 10);
        assert!(verify_grid(&puzzle.grid, &puzzle.words).is_ok());
    }

    #[test]
    fn test_puzzle_json_roundtrip() {
        let puzzle = generate_seeded(&["CAT", "DOG"], None, 29).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grid, puzzle.grid);
        assert_eq!(back.words, puzzle.words);
    }
}
