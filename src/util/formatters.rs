//! Shared formatting utilities for chart labels.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-12 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Evenly spaced tick labels from `min` to `max`.
pub fn axis_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![format_axis_label((min + max) / 2.0)],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count)
                .map(|i| format_axis_label(min + step * i as f64))
                .collect()
        },
    }
}
