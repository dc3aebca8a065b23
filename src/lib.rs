//! Wavechart - sine and cosine waveforms on a terminal line chart.
//!
//! Wavechart samples two waveforms over a shared domain and draws them as
//! a titled, labeled, legended line chart, either as a full-screen terminal
//! UI or as a plain-text snapshot.
//!
//! # Features
//!
//! - Evenly spaced domain sampling with exact endpoints
//! - Braille line chart with axis titles, ticks and a legend
//! - Gruvbox color themes
//! - Static text output for pipes and CI logs
//!
//! # Example
//!
//! ```no_run
//! use wavechart::chart::WaveformChartDemo;
//! use wavechart::render::render_snapshot;
//!
//! let chart = WaveformChartDemo::new().build()?;
//! println!("{}", render_snapshot(&chart, 80, 24)?);
//! assert_eq!(chart.legend_entries(), ["Sine Wave", "Cosine Wave"]);
//! # Ok::<(), wavechart::WaveChartError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod render;
pub mod ui;
pub mod util;

pub use error::{Result, WaveChartError};
