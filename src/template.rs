//! String template rendering.
//!
//! Replaces `{{{key}}}` tags with values from the supplied parameters.
//! Tags are matched lazily up to the first closing delimiter, across
//! lines, with case-insensitive key lookup. Unknown keys render as
//! empty text.

use regex::Regex;
use std::collections::HashMap;

const TAG_PATTERN: &str = r"(?is)\{\{\{(.*?)\}\}\}";

pub fn render(template: &str, params: &[(&str, &str)]) -> String {
    render_with(template, |key| {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .or_else(|| params.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)))
            .map(|(_, v)| v.to_string())
    })
}

pub fn render_map(template: &str, params: &HashMap<String, String>) -> String {
    render_with(template, |key| {
        params.get(key).cloned().or_else(|| {
            params
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.clone())
        })
    })
}

fn render_with<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(TAG_PATTERN).unwrap();
    re.replace_all(template, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_default()
    })
    .into_owned()
}
