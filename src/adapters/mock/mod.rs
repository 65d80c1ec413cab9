//! Test doubles for the trait seams.

pub mod clipboard;
pub mod http;

pub use clipboard::MockClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
