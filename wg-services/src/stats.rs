//! Play session statistics aggregation.
//!
//! Sessions are aggregated in memory over already-materialized collections;
//! nothing is persisted here. The CLI loads sessions from a JSON file and
//! feeds them through this service for summarizing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use wg_core::error::WgResult;

use crate::event_bus::{AppEvent, EventBus};
use crate::service::{Service, ServiceState};

/// One completed (or abandoned) round of play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySession {
    /// Theme played, if the puzzle came from one.
    pub theme: Option<String>,
    /// Whether every word was found.
    pub solved: bool,
    /// Words found before the round ended.
    pub words_found: usize,
    /// Total words in the puzzle.
    pub total_words: usize,
    /// Round duration in seconds.
    pub duration_secs: u64,
    /// When the round was played.
    pub played_at: DateTime<Utc>,
}

/// Aggregate statistics for one theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeStats {
    pub games: usize,
    pub solved: usize,
    pub words_found: usize,
    pub total_words: usize,
    /// Fastest solved round, seconds. None until a round is solved.
    pub best_time_secs: Option<u64>,
    /// Mean duration across solved rounds, seconds.
    pub avg_solve_secs: Option<f64>,
}

/// Overall summary across all recorded sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub games: usize,
    pub solved: usize,
    /// Fraction of games solved, 0.0-1.0.
    pub solve_rate: f64,
    pub words_found: usize,
    pub total_words: usize,
    /// Per-theme breakdown, keyed by theme (untitled sessions under "custom").
    pub by_theme: BTreeMap<String, ThemeStats>,
}

/// Service that records play sessions and computes summaries.
pub struct StatsService {
    state: ServiceState,
    sessions: Vec<PlaySession>,
    event_bus: EventBus,
}

impl StatsService {
    /// Create a new StatsService.
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            state: ServiceState::Created,
            sessions: Vec::new(),
            event_bus,
        }
    }

    /// Record a play session.
    pub fn record(&mut self, session: PlaySession) {
        self.event_bus.emit(AppEvent::SessionRecorded {
            theme: session.theme.clone(),
            solved: session.solved,
        });
        self.sessions.push(session);
    }

    /// Record many sessions at once (bulk import from file).
    pub fn record_all(&mut self, sessions: impl IntoIterator<Item = PlaySession>) {
        for session in sessions {
            self.record(session);
        }
    }

    /// Number of recorded sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Compute the aggregate summary over all recorded sessions.
    pub fn summary(&self) -> StatsSummary {
        let mut summary = StatsSummary::default();

        for session in &self.sessions {
            summary.games += 1;
            summary.words_found += session.words_found;
            summary.total_words += session.total_words;
            if session.solved {
                summary.solved += 1;
            }

            let key = session.theme.clone().unwrap_or_else(|| "custom".to_string());
            let theme = summary.by_theme.entry(key).or_default();
            theme.games += 1;
            theme.words_found += session.words_found;
            theme.total_words += session.total_words;
            if session.solved {
                theme.solved += 1;
                theme.best_time_secs = Some(match theme.best_time_secs {
                    Some(best) => best.min(session.duration_secs),
                    None => session.duration_secs,
                });
            }
        }

        // Second pass for per-theme solve-time means
        for (key, theme) in summary.by_theme.iter_mut() {
            let solved_durations: Vec<u64> = self
                .sessions
                .iter()
                .filter(|s| {
                    s.solved && s.theme.as_deref().unwrap_or("custom") == key.as_str()
                })
                .map(|s| s.duration_secs)
                .collect();
            if !solved_durations.is_empty() {
                let total: u64 = solved_durations.iter().sum();
                theme.avg_solve_secs = Some(total as f64 / solved_durations.len() as f64);
            }
        }

        if summary.games > 0 {
            summary.solve_rate = summary.solved as f64 / summary.games as f64;
        }

        summary
    }
}

impl Service for StatsService {
    fn name(&self) -> &str {
        "stats"
    }

    fn state(&self) -> ServiceState {
        self.state
    }

    fn init(&mut self) -> WgResult<()> {
        self.state = ServiceState::Running;
        info!("stats service initialized");
        Ok(())
    }

    fn shutdown(&mut self) -> WgResult<()> {
        self.state = ServiceState::Stopped;
        info!("stats service stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(theme: Option<&str>, solved: bool, duration: u64) -> PlaySession {
        PlaySession {
            theme: theme.map(|t| t.to_string()),
            solved,
            words_found: if solved { 8 } else { 3 },
            total_words: 8,
            duration_secs: duration,
            played_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_summary() {
        let svc = StatsService::new(EventBus::new(16));
        let summary = svc.summary();
        assert_eq!(summary.games, 0);
        assert_eq!(summary.solve_rate, 0.0);
        assert!(summary.by_theme.is_empty());
    }

    #[test]
    fn test_overall_aggregates() {
        let mut svc = StatsService::new(EventBus::new(16));
        svc.record_all([
            session(Some("animals"), true, 120),
            session(Some("animals"), false, 300),
            session(Some("food"), true, 90),
            session(None, true, 60),
        ]);

        let summary = svc.summary();
        assert_eq!(summary.games, 4);
        assert_eq!(summary.solved, 3);
        assert!((summary.solve_rate - 0.75).abs() < f64::EPSILON);
        assert_eq!(summary.words_found, 8 + 3 + 8 + 8);
    }

    #[test]
    fn test_per_theme_breakdown() {
        let mut svc = StatsService::new(EventBus::new(16));
        svc.record_all([
            session(Some("animals"), true, 120),
            session(Some("animals"), true, 80),
            session(Some("animals"), false, 200),
        ]);

        let summary = svc.summary();
        let animals = &summary.by_theme["animals"];
        assert_eq!(animals.games, 3);
        assert_eq!(animals.solved, 2);
        assert_eq!(animals.best_time_secs, Some(80));
        assert_eq!(animals.avg_solve_secs, Some(100.0));
    }

    #[test]
    fn test_untitled_sessions_grouped_as_custom() {
        let mut svc = StatsService::new(EventBus::new(16));
        svc.record(session(None, false, 45));
        let summary = svc.summary();
        assert!(summary.by_theme.contains_key("custom"));
        assert_eq!(summary.by_theme["custom"].best_time_secs, None);
    }

    #[tokio::test]
    async fn test_record_emits_event() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let mut svc = StatsService::new(bus);

        svc.record(session(Some("travel"), true, 30));
        assert_eq!(svc.session_count(), 1);

        match rx.recv().await.unwrap() {
            AppEvent::SessionRecorded { theme, solved } => {
                assert_eq!(theme.as_deref(), Some("travel"));
                assert!(solved);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
