//! The sine/cosine demonstration chart.

use super::Chart;
use crate::data::{Domain, Series, SeriesColor};
use crate::error::Result;

/// Lower domain bound.
pub const DOMAIN_START: f64 = 0.0;
/// Upper domain bound.
pub const DOMAIN_STOP: f64 = 10.0;
/// Number of domain samples.
pub const SAMPLE_COUNT: usize = 100;

/// Chart title.
pub const TITLE: &str = "Sine and Cosine Waves";
/// X-axis label.
pub const X_LABEL: &str = "X-axis";
/// Y-axis label.
pub const Y_LABEL: &str = "Y-axis";

/// Plotted waveforms, in legend order.
const WAVEFORMS: [(&str, SeriesColor, fn(f64) -> f64); 2] = [
    ("Sine Wave", SeriesColor::Blue, f64::sin),
    ("Cosine Wave", SeriesColor::Orange, f64::cos),
];

/// Build the sine and cosine chart.
pub fn build_demo_chart() -> Result<Chart> {
    let domain = Domain::linspace(DOMAIN_START, DOMAIN_STOP, SAMPLE_COUNT)?;

    let mut chart = Chart::new(domain.clone())
        .title(TITLE)
        .axis_labels(X_LABEL, Y_LABEL);

    for (label, color, f) in WAVEFORMS {
        chart.add_series(Series::sample(label, color, &domain, f))?;
    }

    tracing::info!(
        "Built chart '{}' with {} samples: {:?}",
        chart.title_text(),
        chart.domain().len(),
        chart.legend_entries()
    );
    Ok(chart)
}

/// Entry point of the demonstration: build the chart, then hand it to a
/// renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveformChartDemo;

impl WaveformChartDemo {
    /// Create the demo.
    pub fn new() -> Self {
        Self
    }

    /// Build a fresh chart. Each call returns an independent chart.
    pub fn build(&self) -> Result<Chart> {
        build_demo_chart()
    }

    /// Build the chart and pass it to `render`, propagating its error.
    pub fn run<F>(&self, render: F) -> Result<()>
    where
        F: FnOnce(Chart) -> Result<()>,
    {
        let chart = self.build()?;
        render(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveChartError;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    fn demo() -> Chart {
        WaveformChartDemo::new().build().unwrap()
    }

    #[test]
    fn domain_matches_constants() {
        let chart = demo();
        let domain = chart.domain();
        assert_eq!(domain.len(), SAMPLE_COUNT);
        assert_eq!(domain.start(), DOMAIN_START);
        assert_eq!(domain.stop(), DOMAIN_STOP);
        assert_eq!((SAMPLE_COUNT, DOMAIN_START, DOMAIN_STOP), (100, 0.0, 10.0));
    }

    #[test]
    fn series_follow_their_functions() {
        let chart = demo();
        let xs = chart.domain().values();
        let [sine, cosine] = chart.series() else {
            panic!("expected two series");
        };
        assert_eq!(sine.len(), xs.len());
        assert_eq!(cosine.len(), xs.len());
        for i in 0..xs.len() {
            assert!((sine.values()[i] - xs[i].sin()).abs() < TOL);
            assert!((cosine.values()[i] - xs[i].cos()).abs() < TOL);
        }
    }

    #[test]
    fn sine_and_cosine_differ() {
        let chart = demo();
        assert_ne!(chart.series()[0].values(), chart.series()[1].values());
    }

    #[test]
    fn labels_colors_and_legend() {
        let chart = demo();
        assert_eq!(chart.title_text(), "Sine and Cosine Waves");
        assert_eq!(chart.x_label(), "X-axis");
        assert_eq!(chart.y_label(), "Y-axis");
        assert_eq!(chart.legend_entries(), vec!["Sine Wave", "Cosine Wave"]);
        assert_eq!(chart.series()[0].color(), SeriesColor::Blue);
        assert_eq!(chart.series()[1].color(), SeriesColor::Orange);
    }

    #[test]
    fn known_values_at_zero_and_half_pi() {
        let chart = demo();
        let sine = &chart.series()[0];
        let cosine = &chart.series()[1];
        assert!(sine.values()[0].abs() < TOL);
        assert!((cosine.values()[0] - 1.0).abs() < TOL);

        let idx = chart.domain().nearest_index(FRAC_PI_2);
        assert_eq!(idx, 16);
        assert!((sine.values()[idx] - 1.0).abs() < 0.01);
        assert!(cosine.values()[idx].abs() < 0.05);
    }

    #[test]
    fn builds_are_independent_and_equal() {
        let demo = WaveformChartDemo::new();
        let first = demo.build().unwrap();
        let mut second = demo.build().unwrap();
        assert_eq!(first, second);

        second.add_series(first.series()[0].clone()).unwrap();
        assert_eq!(first.series().len(), 2);
        assert_eq!(second.series().len(), 3);
    }

    #[test]
    fn run_propagates_renderer_errors() {
        let err = WaveformChartDemo::new()
            .run(|_| Err(WaveChartError::rendering_environment("no display")))
            .unwrap_err();
        assert!(matches!(err, WaveChartError::RenderingEnvironment(_)));

        let mut seen = Vec::new();
        WaveformChartDemo::new()
            .run(|chart| {
                seen = chart.legend_entries().iter().map(|s| s.to_string()).collect();
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec!["Sine Wave", "Cosine Wave"]);
    }
}
