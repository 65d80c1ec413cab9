//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ArboardClipboard`] - system clipboard using arboard
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - queued responses, recorded requests
//! - [`mock::MockClipboard`] - in-memory clipboard

pub mod arboard_clipboard;
pub mod mock;
pub mod reqwest_http;

pub use arboard_clipboard::ArboardClipboard;
pub use mock::{MockClipboard, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
