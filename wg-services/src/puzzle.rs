//! Puzzle service: orchestrates word sourcing and grid generation.
//!
//! The service drives the full round: fetch words from a provider,
//! normalize, generate the grid within the attempt budget, run the
//! verification scan, and publish events. Generation failure is surfaced
//! as a typed error and means "no puzzle this round" -- callers reset and
//! may retry with a different word list; no partial puzzle is ever
//! returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use wg_core::config::ConfigHandle;
use wg_core::error::WgResult;
use wg_puzzle::{generate_with_rng, Puzzle};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::event_bus::{AppEvent, EventBus};
use crate::provider::WordProvider;
use crate::service::{Service, ServiceState};

/// A generated puzzle with app-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// Unique puzzle id.
    pub id: Uuid,
    /// Theme the words came from, if any.
    pub theme: Option<String>,
    /// When the puzzle was generated.
    pub generated_at: DateTime<Utc>,
    /// Seed used, when generation was seeded.
    pub seed: Option<u64>,
    /// The puzzle itself: grid, words, and solution placements.
    #[serde(flatten)]
    pub puzzle: Puzzle,
}

/// Service that produces puzzles from themes or explicit word lists.
pub struct PuzzleService {
    state: ServiceState,
    provider: Box<dyn WordProvider>,
    event_bus: EventBus,
    config: ConfigHandle,
}

impl PuzzleService {
    /// Create a new PuzzleService.
    pub fn new(provider: Box<dyn WordProvider>, event_bus: EventBus, config: ConfigHandle) -> Self {
        Self {
            state: ServiceState::Created,
            provider,
            event_bus,
            config,
        }
    }

    /// Generate a puzzle for a theme, sourcing words from the provider.
    ///
    /// `count` and `size` fall back to configured defaults when `None`.
    pub async fn generate_from_theme(
        &self,
        theme: &str,
        count: Option<usize>,
        size: Option<usize>,
        seed: Option<u64>,
    ) -> WgResult<GeneratedPuzzle> {
        let count = match count {
            Some(c) => c,
            None => self.config.read().await.generator.words_per_puzzle,
        };

        let list = self.provider.fetch_words(theme, count).await?;
        self.event_bus.emit(AppEvent::WordsFetched {
            theme: list.theme.clone(),
            count: list.words.len(),
            source: list.source.label().to_string(),
        });

        self.build_puzzle(&list.words, Some(list.theme), size, seed)
            .await
    }

    /// Generate a puzzle from an explicit word list.
    pub async fn generate_from_words(
        &self,
        words: &[String],
        size: Option<usize>,
        seed: Option<u64>,
    ) -> WgResult<GeneratedPuzzle> {
        self.build_puzzle(words, None, size, seed).await
    }

    async fn build_puzzle(
        &self,
        words: &[String],
        theme: Option<String>,
        size: Option<usize>,
        seed: Option<u64>,
    ) -> WgResult<GeneratedPuzzle> {
        let max_attempts = self.config.read().await.generator.max_attempts;

        // The configured budget applies whether or not the run is seeded.
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let result = generate_with_rng(words, size, max_attempts, &mut rng);

        match result {
            Ok(puzzle) => {
                let generated = GeneratedPuzzle {
                    id: Uuid::new_v4(),
                    theme: theme.clone(),
                    generated_at: Utc::now(),
                    seed,
                    puzzle,
                };
                info!(
                    "puzzle {} generated ({}x{}, {} words)",
                    generated.id,
                    generated.puzzle.size(),
                    generated.puzzle.size(),
                    generated.puzzle.words.len()
                );
                self.event_bus.emit(AppEvent::PuzzleGenerated {
                    puzzle_id: generated.id.to_string(),
                    theme,
                    grid_size: generated.puzzle.size(),
                    word_count: generated.puzzle.words.len(),
                });
                Ok(generated)
            }
            Err(e) => {
                self.event_bus.emit(AppEvent::GenerationFailed {
                    theme,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }
}

impl Service for PuzzleService {
    fn name(&self) -> &str {
        "puzzle"
    }

    fn state(&self) -> ServiceState {
        self.state
    }

    fn init(&mut self) -> WgResult<()> {
        self.state = ServiceState::Running;
        info!("puzzle service initialized (provider: {})", self.provider.name());
        Ok(())
    }

    fn shutdown(&mut self) -> WgResult<()> {
        self.state = ServiceState::Stopped;
        info!("puzzle service stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::BuiltinProvider;
    use wg_core::config::AppConfig;

    fn test_service() -> (PuzzleService, EventBus) {
        let bus = EventBus::new(16);
        let svc = PuzzleService::new(
            Box::new(BuiltinProvider::new()),
            bus.clone(),
            ConfigHandle::new(AppConfig::default()),
        );
        (svc, bus)
    }

    #[tokio::test]
    async fn test_generate_from_theme() {
        let (svc, bus) = test_service();
        let mut rx = bus.subscribe();

        let puzzle = svc
            .generate_from_theme("animals", Some(4), None, Some(42))
            .await
            .unwrap();

        assert_eq!(puzzle.theme.as_deref(), Some("animals"));
        assert_eq!(puzzle.puzzle.words.len(), 4);
        assert!(puzzle.puzzle.grid.is_filled());

        match rx.recv().await.unwrap() {
            AppEvent::WordsFetched { source, .. } => assert_eq!(source, "builtin"),
            other => panic!("unexpected event: {other:?}"),
        }
        match rx.recv().await.unwrap() {
            AppEvent::PuzzleGenerated { word_count, .. } => assert_eq!(word_count, 4),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_from_words_seeded_is_deterministic() {
        let (svc, _bus) = test_service();
        let words = vec!["CAT".to_string(), "DOG".to_string(), "BIRD".to_string()];

        let a = svc.generate_from_words(&words, None, Some(7)).await.unwrap();
        let b = svc.generate_from_words(&words, None, Some(7)).await.unwrap();

        assert_eq!(a.puzzle.grid, b.puzzle.grid);
        assert_eq!(a.puzzle.size(), 8);
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_generation_failure_emits_event() {
        let (svc, bus) = test_service();
        let mut rx = bus.subscribe();

        // 12-letter word on a forced 8x8 grid can never place
        let words = vec!["HIPPOPOTAMUS".to_string()];
        let err = svc
            .generate_from_words(&words, Some(8), Some(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            wg_core::error::WgError::GenerationFailed { .. }
        ));

        match rx.recv().await.unwrap() {
            AppEvent::GenerationFailed { error, .. } => {
                assert!(error.contains("attempts"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_seeded_generation_honors_configured_budget() {
        let mut config = AppConfig::default();
        config.generator.max_attempts = 3;
        let svc = PuzzleService::new(
            Box::new(BuiltinProvider::new()),
            EventBus::new(16),
            ConfigHandle::new(config),
        );

        // Unplaceable word, so the budget must exhaust at its configured value
        let words = vec!["EXTRAORDINARY".to_string()];
        let err = svc
            .generate_from_words(&words, Some(8), Some(9))
            .await
            .unwrap_err();
        match err {
            wg_core::error::WgError::GenerationFailed { attempts } => assert_eq!(attempts, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_theme_propagates() {
        let (svc, _bus) = test_service();
        let err = svc
            .generate_from_theme("dinosaurs", None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, wg_core::error::WgError::UnknownTheme(_)));
    }

    #[test]
    fn test_service_lifecycle() {
        let (mut svc, _bus) = test_service();
        assert_eq!(svc.name(), "puzzle");
        assert!(!svc.is_healthy());
        svc.init().unwrap();
        assert!(svc.is_healthy());
        svc.shutdown().unwrap();
        assert_eq!(svc.state(), ServiceState::Stopped);
    }
}
