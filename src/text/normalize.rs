use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical comparison form of a label, field name or option text.
///
/// Lower-cases, decomposes accented characters and drops the combining
/// marks, then removes everything that is not a letter or a digit.
/// Whitespace and punctuation are deleted outright, so `"Home-Phone #1"`
/// becomes `"homephone1"`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Same as [`normalize`] for optional input; `None` maps to `""`.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Whitespace-delimited words of `text`, lower-cased but otherwise raw.
///
/// Word-level matching runs on these rather than on [`normalize`] output,
/// which has no whitespace left to split on.
pub fn lowercase_words(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
