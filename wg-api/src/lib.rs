//! WordGrid API - HTTP client for the word service REST API.
//!
//! The word service is the generative-text endpoint the app calls to
//! produce themed word lists. This crate wraps it with authentication,
//! timeout management, exponential backoff retry, and typed endpoints.

pub mod client;
pub mod endpoints;
pub mod response;

pub use client::{ApiClient, RetryConfig};
pub use response::{ServerResponse, ServerError};
