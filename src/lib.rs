//! chatbot - a terminal chat client for the Google Generative AI API
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
