//! The N×N letter grid that forms a word-search puzzle.
//!
//! During placement, cells are either empty or hold a single uppercase
//! letter. After generation every cell is filled; the JSON form of a grid
//! is a list of row strings with `.` marking any still-empty cell.

use rand::Rng;
use serde::{Deserialize, Serialize};

use wg_core::error::{WgError, WgResult};

/// A cell coordinate within a grid. Row 0 is the top, column 0 the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square grid of single-letter cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Grid dimension N (the grid is N×N).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a position lies within the grid.
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the letter at a position, if the cell is filled.
    pub fn get(&self, pos: GridPos) -> Option<char> {
        if self.in_bounds(pos) {
            self.cells[pos.row * self.size + pos.col]
        } else {
            None
        }
    }

    /// Set the letter at a position. Out-of-bounds writes are ignored by
    /// callers; placement checks bounds before writing.
    pub fn set(&mut self, pos: GridPos, letter: char) {
        if self.in_bounds(pos) {
            self.cells[pos.row * self.size + pos.col] = Some(letter);
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill every empty cell with a uniformly random letter A-Z.
    pub fn fill_empty<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            if cell.is_none() {
                let letter = (b'A' + rng.gen_range(0..26)) as char;
                *cell = Some(letter);
            }
        }
    }

    /// The grid as row strings, with `.` for empty cells.
    pub fn rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(GridPos::new(row, col)).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    /// Render the grid for terminal output.
    ///
    /// With `spaced` set, letters are separated by single spaces for a
    /// squarer appearance in monospace fonts.
    pub fn render(&self, spaced: bool) -> String {
        self.rows()
            .iter()
            .map(|row| {
                if spaced {
                    row.chars()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ")
                } else {
                    row.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = WgError;

    fn try_from(rows: Vec<String>) -> WgResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(WgError::Serialization("grid has no rows".into()));
        }

        let mut grid = Grid::new(size);
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != size {
                return Err(WgError::Serialization(format!(
                    "grid row {row_idx} has {} cells, expected {size}",
                    chars.len()
                )));
            }
            for (col_idx, ch) in chars.into_iter().enumerate() {
                match ch {
                    '.' => {}
                    'A'..='Z' => grid.set(GridPos::new(row_idx, col_idx), ch),
                    other => {
                        return Err(WgError::Serialization(format!(
                            "invalid grid cell '{other}' at row {row_idx}, col {col_idx}"
                        )))
                    }
                }
            }
        }
        Ok(grid)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}
