/// Format a table/chart value (already rounded to 2 decimals upstream)
pub fn format_metric(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format an adjustable input value for the assumptions panel
pub fn format_input(value: f64) -> String {
    format!("{:.1}", value)
}

/// Render a value's position inside [min, max] as a small slider track
pub fn slider_track(value: f64, min: f64, max: f64, width: usize) -> String {
    if width == 0 || max <= min {
        return String::new();
    }

    let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let filled = (ratio * (width.saturating_sub(1)) as f64).round() as usize;

    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push_str(if i == filled { "●" } else { "─" });
    }
    track
}
