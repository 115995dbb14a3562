/// Pull a decimal value out of free-form text such as `"12.5g"` or
/// `" 480 mg "`. Everything other than ASCII digits and `.` is dropped
/// before parsing; empty or unparseable remainders yield `None`.
pub fn extract_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    // The filtered text has no sign, so anything that parses is >= 0.
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Calories are whole numbers. Unlike [`extract_number`] no cleanup is
/// applied beyond trimming whitespace.
pub fn parse_calories(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}
