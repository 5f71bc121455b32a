//! Text-level path parsing.
//!
//! These operate on caller-supplied text with `/` as the hierarchy
//! delimiter and make no attempt to validate the path. Filesystem
//! operations live in [`crate::files`].

use std::path::MAIN_SEPARATOR;

use crate::text;

/// File name including its extension: the text after the last `/`.
pub fn file_name(path: &str) -> String {
    text::part_after_last(path, "/")
}

/// File name without its extension.
///
/// When the name contains no `.` the result is empty text: the missing
/// dot position coerces to zero and the zero-length prefix wins.
pub fn file_stem(path: &str) -> String {
    let name = file_name(path);
    match name.rfind('.') {
        Some(pos) => name[..pos].to_string(),
        None => String::new(),
    }
}

/// Lowercased extension: the text after the last `.` anywhere in the path.
pub fn file_extension(path: &str) -> String {
    file_extension_preserving_case(path).to_lowercase()
}

/// Extension with its original casing.
///
/// A path with no `.` comes back whole.
pub fn file_extension_preserving_case(path: &str) -> String {
    match path.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => path.to_string(),
    }
}

/// Directory part: the text before the last `/`.
///
/// Empty text when the path contains no `/`, mirroring [`file_stem`]'s
/// degenerate rule.
pub fn file_directory(path: &str) -> String {
    match path.rfind('/') {
        Some(pos) => path[..pos].to_string(),
        None => String::new(),
    }
}

/// Append the platform path separator unless `path` already ends in
/// `/` or `\`.
pub fn normalize_directory(path: &str) -> String {
    if path.ends_with('/') || path.ends_with('\\') {
        path.to_string()
    } else {
        format!("{}{}", path, MAIN_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_takes_final_segment() {
        assert_eq!(file_name("/a/b/c.txt"), "c.txt");
    }

    #[test]
    fn file_name_returns_input_without_slash() {
        assert_eq!(file_name("c.txt"), "c.txt");
    }

    #[test]
    fn file_stem_drops_extension() {
        assert_eq!(file_stem("/a/b/c.txt"), "c");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn file_stem_without_dot_is_empty() {
        assert_eq!(file_stem("/a/b/noext"), "");
    }

    #[test]
    fn file_extension_takes_last_dot_segment() {
        assert_eq!(file_extension("archive.tar.gz"), "gz");
    }

    #[test]
    fn file_extension_lowercases() {
        assert_eq!(file_extension("photo.JPG"), "jpg");
        assert_eq!(file_extension_preserving_case("photo.JPG"), "JPG");
    }

    #[test]
    fn file_extension_without_dot_returns_whole_path() {
        assert_eq!(file_extension("noext"), "noext");
    }

    #[test]
    fn file_directory_takes_leading_part() {
        assert_eq!(file_directory("/a/b/c.txt"), "/a/b");
    }

    #[test]
    fn file_directory_without_slash_is_empty() {
        assert_eq!(file_directory("c.txt"), "");
    }

    #[test]
    fn normalize_directory_appends_separator() {
        let out = normalize_directory("/a/b");
        assert_eq!(out, format!("/a/b{}", MAIN_SEPARATOR));
    }

    #[test]
    fn normalize_directory_leaves_terminated_paths() {
        assert_eq!(normalize_directory("/a/b/"), "/a/b/");
        assert_eq!(normalize_directory("c:\\tmp\\"), "c:\\tmp\\");
    }
}
