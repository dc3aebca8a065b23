//! Waveform data generation.
//!
//! This module samples the shared domain and evaluates each waveform
//! over it.

mod domain;
mod series;

pub use domain::Domain;
pub use series::{Series, SeriesColor};
