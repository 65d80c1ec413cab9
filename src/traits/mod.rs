//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - the outbound POST to the generative-language API
//! - [`ClipboardProvider`] - writing copied code blocks to the system clipboard

pub mod clipboard;
pub mod http;

pub use clipboard::ClipboardProvider;
pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
