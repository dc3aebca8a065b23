//! Line chart rendering.

use crate::chart::Chart;
use crate::ui::ThemeColors;
use crate::util::{axis_labels, ChartLayoutConfig};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart as ChartWidget, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// Draw `chart` into `area`.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &Chart,
    show_legend: bool,
    colors: &ThemeColors,
) {
    let layout = ChartLayoutConfig::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", chart.title_text()))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(colors.bg));

    let Some((y_min, y_max)) = y_bounds(chart, &layout) else {
        let para = Paragraph::new("No valid data to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };
    let (x_min, x_max) = (chart.domain().start(), chart.domain().stop());

    // Points must outlive the datasets that borrow them.
    let points: Vec<Vec<(f64, f64)>> = chart
        .series()
        .iter()
        .map(|s| s.points(chart.domain()))
        .collect();

    let datasets: Vec<Dataset<'_>> = chart
        .series()
        .iter()
        .zip(points.iter())
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label().to_string())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series.color().color()))
                .data(data)
        })
        .collect();

    let axis_style = Style::default().fg(colors.axis);

    let x_axis = Axis::default()
        .title(chart.x_label().to_string())
        .style(axis_style)
        .bounds([x_min, x_max])
        .labels(axis_labels(x_min, x_max, layout.x_label_count));

    let y_axis = Axis::default()
        .title(chart.y_label().to_string())
        .style(axis_style)
        .bounds([y_min, y_max])
        .labels(axis_labels(y_min, y_max, layout.y_label_count));

    let legend_position = if show_legend {
        Some(LegendPosition::TopRight)
    } else {
        None
    };

    let widget = ChartWidget::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend_position)
        .hidden_legend_constraints(layout.legend_constraints);

    f.render_widget(widget, area);
}

/// Y bounds covering every series, widened by the padding factor.
///
/// Ranges that straddle zero are made symmetric so the middle tick is 0.
fn y_bounds(chart: &Chart, layout: &ChartLayoutConfig) -> Option<(f64, f64)> {
    let (mut min, mut max) = chart.value_range()?;
    if min < 0.0 && max > 0.0 {
        let reach = max.max(-min);
        min = -reach;
        max = reach;
    }
    let span = if max > min { max - min } else { 1.0 };
    let pad = span * layout.y_axis_padding_factor;
    Some((min - pad, max + pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_demo_chart;

    #[test]
    fn y_bounds_pad_the_value_range() {
        let chart = build_demo_chart().unwrap();
        let (lo, hi) = y_bounds(&chart, &ChartLayoutConfig::default()).unwrap();
        assert!(lo < -1.0 && lo > -1.3);
        assert!(hi > 1.0 && hi < 1.3);
    }

    #[test]
    fn zero_crossing_range_centres_on_zero() {
        let chart = build_demo_chart().unwrap();
        let layout = ChartLayoutConfig::default();
        let (lo, hi) = y_bounds(&chart, &layout).unwrap();
        assert_eq!(lo, -hi);
        let ticks = axis_labels(lo, hi, layout.y_label_count);
        assert_eq!(ticks, vec!["-1.2", "0", "1.2"]);
    }
}
