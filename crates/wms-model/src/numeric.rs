//! Lenient numeric parsing for spreadsheet cell text.

/// Parses a string as i64, returning None for invalid or empty strings.
///
/// Whole-valued decimals such as `"10.0"` are accepted, since spreadsheet
/// exports frequently write integer quantities that way.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
