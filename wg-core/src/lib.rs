//! WordGrid Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by all other WordGrid crates:
//! - Application configuration (generator tuning, word service, preferences)
//! - Global error types covering all error categories
//! - Structured logging with tracing
//! - Platform detection utilities
//! - Common constants and type aliases

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{WgError, WgResult};
pub use logging::init_logging;
pub use platform::Platform;
