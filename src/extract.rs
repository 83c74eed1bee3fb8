use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the description field inside a `definePlugin({ ... })` call.
/// Non-greedy and dot-matches-newline, so declarations spanning multiple
/// lines (name, authors, etc. before the description) still match. The
/// first double quote after `description:` terminates the capture.
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)definePlugin\(\{.*?description:\s*"(.*?)""#)
        .expect("description pattern is valid")
});

/// Extract the plugin description from entry file source text.
/// This is a best-effort text scan, not a parser: the first
/// `description: "..."` inside the first `definePlugin({` wins.
/// Returns `None` when the declaration or its description is absent.
pub fn extract_description(source: &str) -> Option<&str> {
    DESCRIPTION_RE
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
