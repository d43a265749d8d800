//! Shared helpers for wg-services integration tests.

use wg_core::config::{AppConfig, ConfigHandle};
use wg_services::{BuiltinProvider, EventBus, PuzzleService};

/// Build a PuzzleService over the builtin provider with default config.
pub fn builtin_puzzle_service() -> (PuzzleService, EventBus) {
    let bus = EventBus::new(32);
    let service = PuzzleService::new(
        Box::new(BuiltinProvider::new()),
        bus.clone(),
        ConfigHandle::new(AppConfig::default()),
    );
    (service, bus)
}
