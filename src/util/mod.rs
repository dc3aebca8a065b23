//! Utility functions.
//!
//! This module provides label formatting and layout constants.

mod formatters;
mod layout_config;

pub use formatters::{axis_labels, format_axis_label};
pub use layout_config::{ChartLayoutConfig, StaticSizeConfig};
