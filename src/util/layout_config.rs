//! Layout configuration constants for the chart view.

use ratatui::layout::Constraint;

/// Configuration for the line chart layout.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
    /// Number of tick labels on the X axis.
    pub x_label_count: usize,
    /// Number of tick labels on the Y axis.
    pub y_label_count: usize,
    /// Largest share of the chart the legend may cover before it is hidden.
    pub legend_constraints: (Constraint, Constraint),
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            x_label_count: 5,
            y_label_count: 3,
            legend_constraints: (Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)),
        }
    }
}

/// Bounds for static snapshot output.
#[derive(Debug, Clone)]
pub struct StaticSizeConfig {
    /// Default width in cells.
    pub width: u16,
    /// Default height in cells.
    pub height: u16,
    /// Smallest width that still fits axes and legend.
    pub min_width: u16,
    /// Smallest height that still fits axes and legend.
    pub min_height: u16,
}

impl Default for StaticSizeConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            min_width: 40,
            min_height: 12,
        }
    }
}
