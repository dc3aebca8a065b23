//! Interactive terminal rendering.

use crate::app::App;
use crate::chart::Chart;
use crate::error::{Result, WaveChartError};
use crate::ui;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Show `chart` full-screen until the user quits.
pub fn run_interactive(chart: Chart) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(WaveChartError::rendering_environment(
            "stdout is not a terminal (try --output text)",
        ));
    }

    // Setup terminal
    enable_raw_mode().map_err(|e| {
        WaveChartError::rendering_environment(format!("cannot enable raw mode: {}", e))
    })?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(WaveChartError::rendering_environment(format!(
            "cannot enter alternate screen: {}",
            e
        )));
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e.into());
        },
    };

    tracing::info!("Interactive session started");
    let res = run_app(&mut terminal, App::new(chart));

    // Restore terminal; every step runs even if an earlier one fails
    let restored = [
        disable_raw_mode(),
        execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ];

    tracing::info!("Interactive session ended");
    res?;
    first_error(restored)
}

/// The first failed step, if any.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> Result<()> {
    steps
        .into_iter()
        .find_map(|step| step.err())
        .map_or(Ok(()), |e| Err(e.into()))
}

/// Draw and dispatch key presses until the app asks to quit.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_reports_earliest_failure() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());

        let err = first_error([
            Ok(()),
            Err(io::Error::new(io::ErrorKind::Other, "raw mode")),
            Err(io::Error::new(io::ErrorKind::Other, "cursor")),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("raw mode"));
    }
}
