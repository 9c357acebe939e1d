//! Bracketed label scanning.
//!
//! Options start with a label such as `[ক]`; the sentinel option names the
//! correct one somewhere after its marker, e.g. `সঠিক উত্তর: [খ]`.

use once_cell::sync::Lazy;
use regex::Regex;

// Labels never span a line break.
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());
static LEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*?)\]").unwrap());

/// Whether `text` contains the sentinel marker. An empty marker matches nothing.
pub fn is_sentinel(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.contains(marker)
}

/// Extract the label from a sentinel option's text.
///
/// Returns the contents of the first `[...]` group after the marker, or `None`
/// when the marker is absent, no group follows it, or the group is empty.
///
/// ```
/// use answerkey::annotate::extract_label;
///
/// assert_eq!(extract_label("সঠিক উত্তর: [খ]", "সঠিক উত্তর:"), Some("খ"));
/// assert_eq!(extract_label("সঠিক উত্তর: খ", "সঠিক উত্তর:"), None);
/// ```
pub fn extract_label<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    if marker.is_empty() {
        return None;
    }
    let start = text.find(marker)? + marker.len();
    BRACKETED
        .captures(&text[start..])
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|label| !label.is_empty())
}

/// The label an option's text starts with, e.g. `"ক"` for `"[ক] 5"`.
pub fn leading_label(text: &str) -> Option<&str> {
    LEADING
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
