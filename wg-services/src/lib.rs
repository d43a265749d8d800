//! WordGrid Services - Business logic and service layer.
//!
//! This crate provides the service trait, the event bus, and the concrete
//! service implementations covering:
//! - Word providers (built-in themed packs, word service with fallback)
//! - Puzzle generation orchestration (words -> normalize -> generate -> verify)
//! - Play session statistics aggregation
//! - Event bus (typed intra-service communication)

pub mod event_bus;
pub mod provider;
pub mod puzzle;
pub mod service;
pub mod stats;

// Re-export key types
pub use event_bus::{AppEvent, EventBus};
pub use provider::{ApiProvider, BuiltinProvider, WordList, WordProvider, WordSource};
pub use puzzle::{GeneratedPuzzle, PuzzleService};
pub use service::{Service, ServiceState};
pub use stats::{PlaySession, StatsService, StatsSummary, ThemeStats};
