//! Word placements: a word, a starting cell, and a direction.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::grid::{Grid, GridPos};

/// An assignment of a word to a starting cell and direction within a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed word, uppercase.
    pub word: String,
    /// Cell of the word's first letter.
    pub start: GridPos,
    /// Direction the word runs in.
    pub direction: Direction,
}

impl Placement {
    pub fn new(word: impl Into<String>, start: GridPos, direction: Direction) -> Self {
        Self {
            word: word.into(),
            start,
            direction,
        }
    }

    /// The cells this placement covers, in letter order.
    ///
    /// Returns `None` if any cell would fall outside a grid of dimension
    /// `grid_size` (including a south-west run walking off the left edge).
    pub fn cells(&self, grid_size: usize) -> Option<Vec<GridPos>> {
        let (dcol, drow) = self.direction.delta();
        let mut cells = Vec::with_capacity(self.word.chars().count());

        for (i, _) in self.word.chars().enumerate() {
            let col = self.start.col as i32 + dcol * i as i32;
            let row = self.start.row as i32 + drow * i as i32;
            if col < 0 || row < 0 || col >= grid_size as i32 || row >= grid_size as i32 {
                return None;
            }
            cells.push(GridPos::new(row as usize, col as usize));
        }
        Some(cells)
    }

    /// Whether this placement is legal on the given grid.
    ///
    /// Legal means every letter's destination cell is in-bounds and either
    /// empty or already holding the matching letter (intentional overlap).
    pub fn fits(&self, grid: &Grid) -> bool {
        let Some(cells) = self.cells(grid.size()) else {
            return false;
        };

        self.word.chars().zip(cells).all(|(letter, pos)| {
            match grid.get(pos) {
                None => true,
                Some(existing) => existing == letter,
            }
        })
    }

    /// Write this placement's letters into the grid.
    ///
    /// Callers must check `fits` first; letters are written unconditionally
    /// over whatever the covered cells hold.
    pub fn apply(&self, grid: &mut Grid) {
        if let Some(cells) = self.cells(grid.size()) {
            for (letter, pos) in self.word.chars().zip(cells) {
                grid.set(pos, letter);
            }
        }
    }
}
