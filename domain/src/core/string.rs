//! Shared string utilities.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged. Used for log
/// previews of prompts and responses.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Shorten a message to at most `max_chars` characters, appending `...`
/// when anything was cut.
///
/// Character-based (not byte-based) so Korean error messages truncate at
/// the same visual length as ASCII ones.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        // '난' is 3 bytes; cutting at byte 4 must back up to 3
        let s = "난다요";
        assert_eq!(truncate_str(s, 4), "난");
        assert_eq!(truncate_str(s, 6), "난다");
    }

    #[test]
    fn ellipsize_short_passthrough() {
        assert_eq!(ellipsize("short", 200), "short");
    }

    #[test]
    fn ellipsize_cuts_by_chars() {
        let long = "가".repeat(250);
        let cut = ellipsize(&long, 200);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
