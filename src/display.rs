//! Terminal display helpers
//!
//! Small formatting utilities shared by the report renderers.

/// Format a percentage with one decimal place
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a proportional bar of `#` characters
///
/// `value` is scaled against `max` into a bar of at most `width` characters.
/// A non-positive `max` yields an empty bar.
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

/// A horizontal separator line of the given width
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Truncate a string to `max_len` characters, adding an ellipsis if cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
