//! Wire types for the Google Generative Language `generateContent` call.

pub mod request;
pub mod response;

pub use request::{Content, GenerateContentRequest, Part};
pub use response::{ApiErrorBody, ApiErrorDetail, GenerateContentResponse};
