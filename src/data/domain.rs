//! Evenly spaced domain sequence.

use crate::error::{Result, WaveChartError};
use ndarray::Array1;

/// Evenly spaced samples over a closed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    values: Array1<f64>,
}

impl Domain {
    /// Sample `count` evenly spaced values from `start` to `stop` inclusive.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Self> {
        if count < 2 || !start.is_finite() || !stop.is_finite() || start >= stop {
            return Err(WaveChartError::invalid_domain(start, stop, count));
        }

        let mut values = Array1::linspace(start, stop, count);
        // Pin the endpoint; step accumulation may land a few ulps off.
        if let Some(last) = values.last_mut() {
            *last = stop;
        }

        tracing::debug!("Sampled domain [{}, {}] with {} points", start, stop, count);
        Ok(Self { values })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the domain has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First sample.
    pub fn start(&self) -> f64 {
        self.values[0]
    }

    /// Last sample.
    pub fn stop(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Underlying sample array.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Index of the sample closest to `x`.
    pub fn nearest_index(&self, x: f64) -> usize {
        self.values
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |(best, best_dist), (i, v)| {
                let dist = (v - x).abs();
                if dist < best_dist {
                    (i, dist)
                } else {
                    (best, best_dist)
                }
            })
            .0
    }
}
