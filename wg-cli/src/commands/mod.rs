//! CLI command implementations.

pub mod generate;
pub mod packs;
pub mod settings;
pub mod stats;
pub mod status;
pub mod verify;
pub mod words;

use wg_api::ApiClient;
use wg_core::config::ConfigHandle;
use wg_core::error::WgResult;
use wg_services::{ApiProvider, BuiltinProvider, EventBus, WordProvider};

/// Build the word provider the config calls for: the word service with
/// builtin fallback when configured, the builtin packs otherwise.
pub async fn create_provider(
    config: &ConfigHandle,
    event_bus: EventBus,
) -> WgResult<Box<dyn WordProvider>> {
    let cfg = config.read().await;
    if cfg.is_word_service_configured() {
        let client = ApiClient::new(&cfg.word_service)?;
        Ok(Box::new(ApiProvider::new(client, event_bus)))
    } else {
        Ok(Box::new(BuiltinProvider::new()))
    }
}

/// Format a duration in seconds as "Xm YYs".
pub fn format_duration(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(60), "1m 00s");
        assert_eq!(format_duration(125), "2m 05s");
    }
}
