//! Error types for wavechart.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for wavechart operations.
pub type Result<T> = std::result::Result<T, WaveChartError>;

/// Errors that can occur in wavechart.
#[derive(Debug, Error)]
pub enum WaveChartError {
    /// Domain parameters cannot produce a strictly increasing sequence.
    #[error("Invalid domain: [{start}, {stop}] with {count} samples")]
    InvalidDomain {
        /// Requested lower bound.
        start: f64,
        /// Requested upper bound.
        stop: f64,
        /// Requested sample count.
        count: usize,
    },

    /// A series does not have one value per domain point.
    #[error("Series '{label}' has {actual} values, domain has {expected}")]
    LengthMismatch {
        /// Label of the offending series.
        label: String,
        /// Domain length.
        expected: usize,
        /// Series length.
        actual: usize,
    },

    /// Static output area is too small to hold a chart.
    #[error("Output size {width}x{height} is too small (minimum {min_width}x{min_height})")]
    InvalidSize {
        /// Requested width in cells.
        width: u16,
        /// Requested height in cells.
        height: u16,
        /// Smallest accepted width.
        min_width: u16,
        /// Smallest accepted height.
        min_height: u16,
    },

    /// No usable display backend.
    #[error("Rendering environment unavailable: {0}")]
    RenderingEnvironment(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveChartError {
    /// Create an InvalidDomain error.
    pub fn invalid_domain(start: f64, stop: f64, count: usize) -> Self {
        Self::InvalidDomain { start, stop, count }
    }

    /// Create a RenderingEnvironment error.
    pub fn rendering_environment(reason: impl Into<String>) -> Self {
        Self::RenderingEnvironment(reason.into())
    }
}
