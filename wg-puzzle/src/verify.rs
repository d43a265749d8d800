//! Scan-based verification of finished grids.
//!
//! Verification re-derives word locations by scanning the grid rather than
//! trusting placement bookkeeping. A word counts as present if it reads
//! along one of the four direction families, forward or reversed.

use serde::{Deserialize, Serialize};

use wg_core::error::{WgError, WgResult};

use crate::direction::Direction;
use crate::grid::{Grid, GridPos};
use crate::placement::Placement;

/// Where a word was found during a verification scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// Cell where the run starts (first letter of the run as stored).
    pub start: GridPos,
    /// Direction the run extends in.
    pub direction: Direction,
    /// True if the word reads backwards along the run.
    pub reversed: bool,
}

/// Scan the grid for a word along all four direction families.
///
/// Both the forward reading and the reversed reading of each run are
/// checked, so a word is found regardless of which end it was placed from.
pub fn find_word(grid: &Grid, word: &str) -> Option<WordMatch> {
    if word.is_empty() {
        return None;
    }

    let reversed: String = word.chars().rev().collect();
    let size = grid.size();

    for direction in Direction::ALL {
        for row in 0..size {
            for col in 0..size {
                let start = GridPos::new(row, col);
                if run_matches(grid, word, start, direction) {
                    return Some(WordMatch {
                        start,
                        direction,
                        reversed: false,
                    });
                }
                if run_matches(grid, &reversed, start, direction) {
                    return Some(WordMatch {
                        start,
                        direction,
                        reversed: true,
                    });
                }
            }
        }
    }
    None
}

/// Whether `word` reads forward from `start` along `direction`.
fn run_matches(grid: &Grid, word: &str, start: GridPos, direction: Direction) -> bool {
    let probe = Placement::new(word, start, direction);
    let Some(cells) = probe.cells(grid.size()) else {
        return false;
    };
    word.chars()
        .zip(cells)
        .all(|(letter, pos)| grid.get(pos) == Some(letter))
}

/// Verify that every word is locatable in the grid.
///
/// Returns the match for each word in input order, or a typed error naming
/// the first word that cannot be found.
pub fn verify_grid(grid: &Grid, words: &[String]) -> WgResult<Vec<WordMatch>> {
    let mut matches = Vec::with_capacity(words.len());
    for word in words {
        match find_word(grid, word) {
            Some(m) => matches.push(m),
            None => return Err(WgError::VerificationFailed(word.clone())),
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        Grid::try_from(rows).unwrap()
    }

    #[test]
    fn test_find_word_east() {
        let grid = grid_from(&["CAT", "XXX", "XXX"]);
        let m = find_word(&grid, "CAT").unwrap();
        assert_eq!(m.start, GridPos::new(0, 0));
        assert_eq!(m.direction, Direction::East);
        assert!(!m.reversed);
    }

    #[test]
    fn test_find_word_reversed() {
        // TAC reading east means CAT reading west
        let grid = grid_from(&["TAC", "XXX", "XXX"]);
        let m = find_word(&grid, "CAT").unwrap();
        assert!(m.reversed);
        assert_eq!(m.direction, Direction::East);
    }

    #[test]
    fn test_find_word_southwest() {
        let grid = grid_from(&["XXC", "XAX", "TXX"]);
        let m = find_word(&grid, "CAT").unwrap();
        assert_eq!(m.direction, Direction::SouthWest);
        assert_eq!(m.start, GridPos::new(0, 2));
    }

    #[test]
    fn test_find_word_absent() {
        let grid = grid_from(&["XXX", "XXX", "XXX"]);
        assert!(find_word(&grid, "CAT").is_none());
    }

    #[test]
    fn test_find_word_not_wrapped() {
        // CA ends a row and T starts the next; must not match across the edge
        let grid = grid_from(&["XCA", "TXX", "XXX"]);
        assert!(find_word(&grid, "CAT").is_none());
    }

    #[test]
    fn test_verify_grid_all_words() {
        let grid = grid_from(&["CATX", "XOXX", "XXWX", "XXXX"]);
        let words = vec!["CAT".to_string(), "COW".to_string()];
        let matches = verify_grid(&grid, &words).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].direction, Direction::SouthEast);
    }

    #[test]
    fn test_verify_grid_reports_missing_word() {
        let grid = grid_from(&["CAT", "XXX", "XXX"]);
        let words = vec!["CAT".to_string(), "DOG".to_string()];
        let err = verify_grid(&grid, &words).unwrap_err();
        match err {
            WgError::VerificationFailed(word) => assert_eq!(word, "DOG"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
