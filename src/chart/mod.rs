//! Chart model.
//!
//! A [`Chart`] is the renderer-independent description of what gets drawn:
//! a title, two axis labels, a shared domain and an ordered list of series.
//! The legend is derived from the series in the order they were added.

mod demo;

pub use demo::{
    build_demo_chart, WaveformChartDemo, DOMAIN_START, DOMAIN_STOP, SAMPLE_COUNT, TITLE, X_LABEL,
    Y_LABEL,
};

use crate::data::{Domain, Series};
use crate::error::{Result, WaveChartError};

/// A two-axis line chart over one shared domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    domain: Domain,
    series: Vec<Series>,
}

impl Chart {
    /// Create an empty chart over `domain`.
    pub fn new(domain: Domain) -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            domain,
            series: Vec::new(),
        }
    }

    /// Set the chart title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set both axis labels.
    pub fn axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Add a series. It must have one value per domain point.
    pub fn add_series(&mut self, series: Series) -> Result<()> {
        if series.len() != self.domain.len() {
            return Err(WaveChartError::LengthMismatch {
                label: series.label().to_string(),
                expected: self.domain.len(),
                actual: series.len(),
            });
        }
        self.series.push(series);
        Ok(())
    }

    /// Chart title.
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// X-axis label.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Y-axis label.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Shared domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Series in insertion order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Legend labels in insertion order.
    pub fn legend_entries(&self) -> Vec<&str> {
        self.series.iter().map(Series::label).collect()
    }

    /// Combined finite value range over all series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::value_range)
            .reduce(|(a_min, a_max), (b_min, b_max)| (a_min.min(b_min), a_max.max(b_max)))
    }
}
