//! Header and cell normalization.

/// Normalizes a header value: strips a byte-order mark, trims, and collapses
/// interior whitespace runs to a single space.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Normalizes a data cell by trimming whitespace.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Event Type  "), "Event Type");
        assert_eq!(normalize_header("\u{feff}FNSKU"), "FNSKU");
        assert_eq!(normalize_header("Sub  Order\tNo"), "Sub Order No");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell("  pen-blue "), "pen-blue");
        assert_eq!(normalize_cell("Sub  Order"), "Sub  Order");
    }
}
