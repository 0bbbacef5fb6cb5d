//! Line trimming

/// Strip the line terminator, anything after it, and surrounding whitespace
///
/// Returns a slice of `line`; the result never contains a `\n` and has no
/// leading or trailing ASCII whitespace.
pub fn trim(line: &str) -> &str {
    let content = match line.find('\n') {
        Some(end) => &line[..end],
        None => line,
    };

    content.trim_matches(|c: char| c.is_ascii_whitespace())
}
