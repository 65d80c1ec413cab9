use chatbot::adapters::ArboardClipboard;
use chatbot::app::{App, TICK_RATE_MS};
use chatbot::cli::{parse_args, run_cli_command};
use chatbot::config::{ChatConfig, API_KEY_ENV};
use chatbot::gemini::GeminiClient;
use chatbot::terminal::{setup_panic_hook, TerminalManager};
use chatbot::{logging, ui};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    if run_cli_command(parse_args(std::env::args())) {
        return Ok(());
    }

    color_eyre::install()?;

    let log_path = logging::init();
    setup_panic_hook();

    let config = ChatConfig::from_build_env();
    info!(
        version = chatbot::cli::VERSION,
        log = ?log_path,
        config = ?config,
        "Starting chatbot"
    );
    if !config.has_api_key() {
        warn!(
            "{} was not set at build time; requests will be rejected by the API",
            API_KEY_ENV
        );
    }

    let runtime = tokio::runtime::Runtime::new()?;

    let mut app = App::new(GeminiClient::new(config), Box::new(ArboardClipboard::new()));

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;
    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_RATE_MS));

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => {
                        debug!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }
    }
}
