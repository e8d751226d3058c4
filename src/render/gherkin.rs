//! Keyword extraction for scenario description lines.

/// Keywords recognized at the start of a scenario line, matched without
/// case sensitivity.
const KEYWORDS: [&str; 5] = ["given", "when", "then", "and", "but"];

/// Split one scenario line into (keyword, remainder).
///
/// The keyword keeps the author's casing; the remainder loses the single
/// separating space. Lines that start with no keyword come back whole under
/// an empty keyword, and blank lines yield two empty strings.
pub fn split_keyword(line: &str) -> (&str, &str) {
    let line = line.trim();
    if line.is_empty() {
        return ("", "");
    }
    let first = line.split(' ').next().unwrap_or(line);
    if KEYWORDS.iter().any(|kw| first.eq_ignore_ascii_case(kw)) {
        let rest = &line[first.len()..];
        (first, rest.strip_prefix(' ').unwrap_or(rest))
    } else {
        ("", line)
    }
}
