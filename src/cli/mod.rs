//! Command-line flags handled before the terminal is taken over.
//!
//! ```ignore
//! use chatbot::cli::{parse_args, run_cli_command};
//!
//! if run_cli_command(parse_args(std::env::args())) {
//!     return Ok(());
//! }
//! // start the UI
//! ```

pub mod args;

pub use args::{parse_args, CliCommand};

use crate::config::API_KEY_ENV;
use crate::logging::LOG_ENV;

/// Version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("chatbot {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "\
{version}
Terminal chat client for the Google Generative AI API.

USAGE:
    chatbot [OPTIONS]

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print the version

KEYS:
    Enter                    Generate answer
    Shift+Enter, Ctrl+J      New line in the question
    Ctrl+L                   Clear question and answer
    Ctrl+T                   Toggle dark mode
    Tab / Shift+Tab          Select code block
    Ctrl+Y, Alt+1..9         Copy code block
    PageUp / PageDown        Scroll the answer
    Ctrl+C, Esc              Quit

ENVIRONMENT:
    {key_env}    API key, read when the binary is built
    {log_env}       Log filter (default: info)",
        version = version_text(),
        key_env = API_KEY_ENV,
        log_env = LOG_ENV,
    )
}

/// Handle flags that print and exit. Returns true if one was handled.
pub fn run_cli_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            true
        }
        CliCommand::Help => {
            println!("{}", help_text());
            true
        }
        CliCommand::RunTui => false,
    }
}
