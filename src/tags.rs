//! Group/trip marker extraction
//!
//! Expense notes may embed a `# <label>` marker that clusters unrelated
//! transactions into a logical group (typically a trip). The label runs from
//! the first `#` to the next `#` or end of line and is used verbatim after
//! trimming, so `# tokyo2024` and `# Tokyo2024` are distinct groups.
//!
//! When a description carries several markers, the first one wins.

/// Extract the group label from a description, if present
///
/// Returns `None` when there is no `#` marker or the first marker is empty
/// (e.g. a trailing lone `#`).
///
/// # Examples
/// ```
/// use spendview::tags::extract_group;
/// assert_eq!(extract_group("Lunch # Tokyo2024"), Some("Tokyo2024".to_string()));
/// assert_eq!(extract_group("Lunch"), None);
/// ```
pub fn extract_group(description: &str) -> Option<String> {
    let start = description.find('#')?;
    let rest = &description[start + 1..];

    // Label ends at the next marker or end of line
    let end = rest
        .find(|c| c == '#' || c == '\n')
        .unwrap_or(rest.len());

    let label = rest[..end].trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

/// Return the description with its first group marker removed
///
/// Used when listing a group's member transactions: the marker is redundant
/// there since the rows are already clustered under the label.
pub fn strip_group_marker(description: &str) -> String {
    let Some(start) = description.find('#') else {
        return description.to_string();
    };

    let rest = &description[start + 1..];
    let end = rest
        .find(|c| c == '#' || c == '\n')
        .unwrap_or(rest.len());

    let mut cleaned = String::with_capacity(description.len());
    cleaned.push_str(description[..start].trim_end());
    let tail = rest[end..].trim_start();
    if !tail.is_empty() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(tail);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_label() {
        assert_eq!(
            extract_group("Lunch # Tokyo2024"),
            Some("Tokyo2024".to_string())
        );
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(extract_group("Lunch"), None);
        assert_eq!(extract_group(""), None);
    }

    #[test]
    fn test_label_is_verbatim() {
        // Case preserved, inner spacing preserved
        assert_eq!(
            extract_group("Dinner #tokyo trip"),
            Some("tokyo trip".to_string())
        );
        assert_eq!(extract_group("Dinner #  padded  "), Some("padded".to_string()));
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(
            extract_group("Lunch # Tokyo2024 # Osaka"),
            Some("Tokyo2024".to_string())
        );
    }

    #[test]
    fn test_empty_marker_yields_no_group() {
        assert_eq!(extract_group("Lunch #"), None);
        assert_eq!(extract_group("Lunch #   "), None);
    }

    #[test]
    fn test_label_stops_at_newline() {
        assert_eq!(
            extract_group("Lunch # Tokyo2024\nsecond line"),
            Some("Tokyo2024".to_string())
        );
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_group_marker("Lunch # Tokyo2024"), "Lunch");
        assert_eq!(strip_group_marker("Lunch"), "Lunch");
        assert_eq!(
            strip_group_marker("Lunch # Tokyo2024 # Osaka"),
            "Lunch # Osaka"
        );
        assert_eq!(strip_group_marker("# Tokyo2024"), "");
    }
}
