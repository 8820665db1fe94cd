use std::sync::LazyLock;

use regex::Regex;

static SPEAK_DOCUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<speak\b[^>]*>(.*?)</speak>$").expect("valid SSML pattern"));

/// Whether `text` is a whole `<speak>...</speak>` document.
///
/// A missing text is reported and classified as plain text rather than failing, so the
/// caller can still build a response around it.
pub fn is_ssml(text: Option<&str>) -> bool {
    match text {
        Some(text) => SPEAK_DOCUMENT.is_match(text),
        None => {
            tracing::error!("{}", crate::Error::MissingText);
            false
        }
    }
}
