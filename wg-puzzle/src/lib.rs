//! WordGrid Puzzle - word-search grid generation and verification.
//!
//! This crate holds the synchronous, CPU-bound puzzle core:
//! - Grid model with single-letter cells
//! - Direction vectors and word placements
//! - Word list normalization
//! - Whole-grid generation with a bounded retry budget
//! - Scan-based verification that re-locates every word in a finished grid
//!
//! Generation is stateless across attempts and safe to run on any worker
//! thread. All randomness flows through an injectable RNG so tests can pin
//! a seed and get reproducible grids.

pub mod direction;
pub mod generator;
pub mod grid;
pub mod placement;
pub mod verify;
pub mod words;

// Re-export key types
pub use direction::Direction;
pub use generator::{generate, generate_seeded, generate_with_rng, Puzzle};
pub use grid::{Grid, GridPos};
pub use placement::Placement;
pub use verify::{find_word, verify_grid, WordMatch};
pub use words::normalize_words;
