//! Code-point string slicing and extraction.
//!
//! Every operation here counts Unicode code points, never bytes, so
//! multi-byte characters slice correctly. Out-of-range lengths clamp to
//! what is available instead of erroring.

use rand::Rng;

/// First `n` code points of `s`.
pub fn left(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Last `n` code points of `s`.
pub fn right(s: &str, n: usize) -> String {
    s.chars().skip(length(s).saturating_sub(n)).collect()
}

/// `s` with its first `n` code points removed.
pub fn delete_left(s: &str, n: usize) -> String {
    s.chars().skip(n).collect()
}

/// `s` with its last `n` code points removed.
pub fn delete_right(s: &str, n: usize) -> String {
    s.chars().take(length(s).saturating_sub(n)).collect()
}

/// Text following the last occurrence of `sep`.
///
/// Returns `s` unchanged when `sep` is absent or empty.
pub fn part_after_last(s: &str, sep: &str) -> String {
    if sep.is_empty() {
        return s.to_string();
    }
    match s.rfind(sep) {
        Some(pos) => s[pos + sep.len()..].to_string(),
        None => s.to_string(),
    }
}

/// Text preceding the first occurrence of `sep`.
///
/// Returns `s` unchanged when `sep` is absent or empty.
pub fn part_before_first(s: &str, sep: &str) -> String {
    if sep.is_empty() {
        return s.to_string();
    }
    match s.find(sep) {
        Some(pos) => s[..pos].to_string(),
        None => s.to_string(),
    }
}

/// Code-point count.
pub fn length(s: &str) -> usize {
    s.chars().count()
}

const ELLIPSIS: &str = "...";

/// Truncate `s` so the result, including the appended `"..."`, occupies
/// at most `width` code points. Strings that already fit come back
/// unchanged. Widths of 3 or less degenerate to a prefix of the ellipsis
/// itself.
///
/// Code points stand in for display columns here; double-width glyphs
/// are not measured.
pub fn truncate_with_ellipsis(s: &str, width: usize) -> String {
    if length(s) <= width {
        return s.to_string();
    }
    if width <= length(ELLIPSIS) {
        return left(ELLIPSIS, width);
    }
    let mut out = left(s, width - length(ELLIPSIS));
    out.push_str(ELLIPSIS);
    out
}

const RANDOM_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random string of `len` characters drawn uniformly from `[0-9a-z]`.
///
/// Non-cryptographic; no uniqueness guarantee.
pub fn random_string(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| RANDOM_CHARSET[rng.random_range(0..RANDOM_CHARSET.len())] as char)
        .collect()
}

/// [`random_string`] with the default length of 8.
pub fn random_string_default() -> String {
    random_string(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_takes_prefix() {
        assert_eq!(left("hello", 2), "he");
    }

    #[test]
    fn left_clamps_to_available_length() {
        assert_eq!(left("hi", 10), "hi");
    }

    #[test]
    fn right_takes_suffix() {
        assert_eq!(right("hello", 3), "llo");
    }

    #[test]
    fn right_clamps_to_available_length() {
        assert_eq!(right("hi", 10), "hi");
    }

    #[test]
    fn slicing_counts_code_points_not_bytes() {
        assert_eq!(left("héllo", 2), "hé");
        assert_eq!(right("héllo", 4), "éllo");
        assert_eq!(delete_left("héllo", 2), "llo");
        assert_eq!(delete_right("héllo", 3), "hé");
    }

    #[test]
    fn left_and_delete_left_reassemble_original() {
        let s = "héllo wörld";
        for n in 0..=length(s) {
            assert_eq!(format!("{}{}", left(s, n), delete_left(s, n)), s);
        }
    }

    #[test]
    fn delete_right_and_right_reassemble_original() {
        let s = "héllo wörld";
        for n in 0..=length(s) {
            assert_eq!(format!("{}{}", delete_right(s, n), right(s, n)), s);
        }
    }

    #[test]
    fn part_after_last_takes_final_segment() {
        assert_eq!(part_after_last("a/b/c", "/"), "c");
    }

    #[test]
    fn part_after_last_returns_input_when_separator_absent() {
        assert_eq!(part_after_last("abc", "/"), "abc");
    }

    #[test]
    fn part_before_first_takes_leading_segment() {
        assert_eq!(part_before_first("a/b/c", "/"), "a");
    }

    #[test]
    fn part_before_first_returns_input_when_separator_absent() {
        assert_eq!(part_before_first("abc", "/"), "abc");
    }

    #[test]
    fn part_helpers_handle_multichar_separator() {
        assert_eq!(part_after_last("a::b::c", "::"), "c");
        assert_eq!(part_before_first("a::b::c", "::"), "a");
    }

    #[test]
    fn split_parts_recombine_around_single_separator() {
        let s = "name=value";
        let rebuilt = format!(
            "{}={}",
            part_before_first(s, "="),
            part_after_last(s, "=")
        );
        assert_eq!(part_after_last(&rebuilt, "="), part_after_last(s, "="));
    }

    #[test]
    fn length_counts_code_points() {
        assert_eq!(length("héllo"), 5);
        assert_eq!(length(""), 0);
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
    }

    #[test]
    fn truncate_appends_ellipsis_within_width() {
        let out = truncate_with_ellipsis("a long sentence", 8);
        assert_eq!(out, "a lon...");
        assert_eq!(length(&out), 8);
    }

    #[test]
    fn truncate_degenerates_below_ellipsis_width() {
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "..");
    }

    #[test]
    fn random_string_has_requested_length_and_charset() {
        let s = random_string(32);
        assert_eq!(s.len(), 32);
        assert!(s
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn random_string_default_is_eight_chars() {
        assert_eq!(random_string_default().len(), 8);
    }
}
