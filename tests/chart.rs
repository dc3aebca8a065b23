use std::f64::consts::FRAC_PI_2;
use wavechart::chart::WaveformChartDemo;
use wavechart::data::SeriesColor;

#[test]
fn end_to_end_values() {
    let chart = WaveformChartDemo::new().build().unwrap();
    let domain = chart.domain();
    assert_eq!(domain.len(), 100);
    assert_eq!((domain.start(), domain.stop()), (0.0, 10.0));

    let sine = &chart.series()[0];
    let cosine = &chart.series()[1];
    assert!(sine.values()[0].abs() < 1e-9);
    assert!((cosine.values()[0] - 1.0).abs() < 1e-9);

    let idx = domain.nearest_index(FRAC_PI_2);
    assert!((sine.values()[idx] - 1.0).abs() < 0.01);
    assert!(cosine.values()[idx].abs() < 0.05);
}

#[test]
fn legend_lists_both_series_in_order() {
    let chart = WaveformChartDemo::new().build().unwrap();
    assert_eq!(chart.legend_entries(), vec!["Sine Wave", "Cosine Wave"]);
    let colors: Vec<SeriesColor> = chart.series().iter().map(|s| s.color()).collect();
    assert_eq!(colors, vec![SeriesColor::Blue, SeriesColor::Orange]);
}

#[test]
fn repeated_runs_see_identical_data() {
    let demo = WaveformChartDemo::new();
    let mut seen = Vec::new();
    for _ in 0..2 {
        demo.run(|chart| {
            seen.push(chart);
            Ok(())
        })
        .unwrap();
    }
    assert_eq!(seen[0], seen[1]);
}
