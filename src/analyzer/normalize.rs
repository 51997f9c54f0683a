/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Newlines and tabs count as whitespace, so a multi-line post becomes one
/// line. Whitespace-only input yields an empty string.
///
/// U+FEFF is treated as whitespace as well: UTF-8 text files often start
/// with a byte-order mark, and it is not in Unicode's White_Space set.
pub fn normalize_text(raw: &str) -> String {
    raw.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
