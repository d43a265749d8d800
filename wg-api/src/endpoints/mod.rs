//! Typed endpoint wrappers over the raw ApiClient.

pub mod server;
pub mod words;

pub use words::GeneratedWordList;
