//! Application state and logic.

use crate::chart::Chart;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Chart on display.
    pub chart: Chart,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Whether the legend is drawn.
    pub show_legend: bool,
    /// Set once the user asks to leave.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(chart: Chart) -> Self {
        Self {
            chart,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            show_legend: true,
            should_quit: false,
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
        tracing::debug!("Theme changed to {}", self.theme.name());
    }

    /// Toggle legend visibility.
    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
        self.status = if self.show_legend {
            "Legend: ON".to_string()
        } else {
            "Legend: OFF".to_string()
        };
        tracing::debug!("Legend visible: {}", self.show_legend);
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc) => self.quit(),

            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('t')) => {
                self.cycle_theme();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('L')) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.toggle_legend();
            },

            _ => {},
        }
    }
}
