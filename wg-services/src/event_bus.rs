//! Typed event bus for intra-service communication.
//!
//! Uses tokio broadcast channels to decouple services from one another.
//! Any service can emit events without knowing who is listening, and any
//! number of subscribers can independently consume events.

use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// All application-level event types that flow through the event bus.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A puzzle was generated successfully.
    PuzzleGenerated {
        puzzle_id: String,
        theme: Option<String>,
        grid_size: usize,
        word_count: usize,
    },
    /// Puzzle generation exhausted its attempt budget.
    GenerationFailed {
        theme: Option<String>,
        error: String,
    },
    /// A word list was fetched from a provider.
    WordsFetched {
        theme: String,
        count: usize,
        /// "builtin" or "api".
        source: String,
    },
    /// The word service was unreachable and the built-in packs were used.
    ProviderFellBack {
        theme: String,
        error: String,
    },
    /// A play session was recorded.
    SessionRecorded {
        theme: Option<String>,
        solved: bool,
    },
}

/// Application-wide event bus backed by a tokio broadcast channel.
///
/// Designed for fan-out delivery: every subscriber gets every event.
/// Slow subscribers that fall behind will receive a `Lagged` error
/// and may miss events, which is acceptable for UI-driven consumers.
#[derive(Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<AppEvent>>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Subscribe to receive application events.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers.
    pub fn emit(&self, event: AppEvent) {
        let label = event_label(&event);
        match self.sender.send(event) {
            Ok(count) => {
                debug!("event_bus: emitted {label} to {count} subscriber(s)");
            }
            Err(_) => {
                debug!("event_bus: no subscribers for {label}");
            }
        }
    }

    /// Get the current number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Human-readable label for an event (for logging).
fn event_label(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::PuzzleGenerated { .. } => "PuzzleGenerated",
        AppEvent::GenerationFailed { .. } => "GenerationFailed",
        AppEvent::WordsFetched { .. } => "WordsFetched",
        AppEvent::ProviderFellBack { .. } => "ProviderFellBack",
        AppEvent::SessionRecorded { .. } => "SessionRecorded",
    }
}
