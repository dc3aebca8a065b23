//! Static text rendering.

use crate::app::Theme;
use crate::chart::Chart;
use crate::error::{Result, WaveChartError};
use crate::ui::{draw_chart, ThemeColors};
use crate::util::StaticSizeConfig;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::io::{self, Write};

/// Render `chart` into a `width` x `height` cell grid and return it as text.
pub fn render_snapshot(chart: &Chart, width: u16, height: u16) -> Result<String> {
    let limits = StaticSizeConfig::default();
    if width < limits.min_width || height < limits.min_height {
        return Err(WaveChartError::InvalidSize {
            width,
            height,
            min_width: limits.min_width,
            min_height: limits.min_height,
        });
    }

    let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| {
        let area = f.area();
        draw_chart(f, area, chart, true, &colors);
    })?;

    tracing::debug!("Rendered {}x{} snapshot", width, height);
    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Write a rendered snapshot followed by a newline.
///
/// A closed pipe on the reading side is not an error.
pub fn write_snapshot<W: Write>(out: &mut W, text: &str) -> Result<()> {
    match writeln!(out, "{}", text).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early");
            Ok(())
        },
        res => res.map_err(Into::into),
    }
}

/// Flatten a buffer into lines, dropping trailing blanks.
fn buffer_to_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
