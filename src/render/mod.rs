//! Output backends.
//!
//! The interactive backend takes over the terminal until the user quits.
//! The text backend draws a single frame off-screen and returns it as
//! plain text, for pipes and non-interactive sessions.

mod snapshot;
mod terminal;

pub use snapshot::{render_snapshot, write_snapshot};
pub use terminal::run_interactive;

use clap::ValueEnum;

/// Where the chart is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Full-screen terminal UI.
    #[default]
    Interactive,
    /// One frame printed as plain text.
    Text,
}

impl OutputMode {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            OutputMode::Interactive => "interactive",
            OutputMode::Text => "text",
        }
    }
}
