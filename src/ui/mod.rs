//! User interface rendering.

mod chart_view;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use chart_view::draw_chart;
pub use keymap_bar::KEYMAP_TEXT;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Chart with status bar and key map bar below
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    draw_chart(f, chunks[0], &app.chart, app.show_legend, &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_demo_chart;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|r| r.contains(needle))
    }

    // The title itself contains "Cosine Wave", so skip its row.
    fn legend_row(rows: &[String], label: &str) -> Option<usize> {
        rows.iter()
            .position(|r| r.contains(label) && !r.contains("Sine and Cosine Waves"))
    }

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 26)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        rows(terminal.backend().buffer())
    }

    #[test]
    fn frame_shows_title_axes_and_legend() {
        let app = App::new(build_demo_chart().unwrap());
        let rows = render(&app);

        assert!(row_of(&rows, "Sine and Cosine Waves").is_some());
        assert!(row_of(&rows, "X-axis").is_some());
        assert!(row_of(&rows, "Y-axis").is_some());

        let sine = legend_row(&rows, "Sine Wave").expect("sine legend entry");
        let cosine = legend_row(&rows, "Cosine Wave").expect("cosine legend entry");
        assert!(sine < cosine);
    }

    #[test]
    fn hidden_legend_drops_entries() {
        let mut app = App::new(build_demo_chart().unwrap());
        app.toggle_legend();
        let rows = render(&app);
        assert!(legend_row(&rows, "Sine Wave").is_none());
        assert!(legend_row(&rows, "Cosine Wave").is_none());
        assert!(row_of(&rows, "Legend: OFF").is_some());
    }

    #[test]
    fn bars_are_drawn() {
        let app = App::new(build_demo_chart().unwrap());
        let rows = render(&app);
        assert!(rows[rows.len() - 1].starts_with(KEYMAP_TEXT));
        assert!(rows[rows.len() - 2].starts_with("Ready"));
    }
}
