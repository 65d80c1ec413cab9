//! Panic hook that gives the terminal back before the report prints.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call before creating the [`TerminalManager`](super::TerminalManager)
/// and after `color_eyre::install()`, so the eyre hook is the one chained to.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "Panicked");
        original_hook(panic_info);
    }));
}
