//! Named, colored waveform series.

use super::Domain;
#[cfg(test)]
use crate::error::{Result, WaveChartError};
use ndarray::Array1;
use ratatui::style::Color;

/// Display color of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    /// Pure blue.
    Blue,
    /// Web orange.
    Orange,
}

impl SeriesColor {
    /// Terminal color for this series color.
    pub fn color(self) -> Color {
        match self {
            SeriesColor::Blue => Color::Rgb(0, 0, 255),
            SeriesColor::Orange => Color::Rgb(255, 165, 0),
        }
    }
}

/// One plotted line: a label, a color, and one value per domain point.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label: String,
    color: SeriesColor,
    values: Array1<f64>,
}

impl Series {
    /// Evaluate `f` at every domain point.
    pub fn sample(
        label: impl Into<String>,
        color: SeriesColor,
        domain: &Domain,
        f: fn(f64) -> f64,
    ) -> Self {
        Self {
            label: label.into(),
            color,
            values: domain.values().mapv(f),
        }
    }

    /// Wrap precomputed values, checking they line up with `domain`.
    #[cfg(test)]
    pub(crate) fn from_values(
        label: impl Into<String>,
        color: SeriesColor,
        domain: &Domain,
        values: Array1<f64>,
    ) -> Result<Self> {
        let label = label.into();
        if values.len() != domain.len() {
            return Err(WaveChartError::LengthMismatch {
                label,
                expected: domain.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            label,
            color,
            values,
        })
    }

    /// Legend label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Line color.
    pub fn color(&self) -> SeriesColor {
        self.color
    }

    /// Sampled values.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest finite value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    /// `(x, y)` pairs ready for plotting.
    pub fn points(&self, domain: &Domain) -> Vec<(f64, f64)> {
        domain
            .values()
            .iter()
            .zip(self.values.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }
}
