//! Detection of Base64 image payloads in clipboard text.
//!
//! Clipboard text may carry an image as raw Base64 or as a data URI
//! (`data:image/png;base64,iVBOR...`), often wrapped across lines.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

/// Strict Base64 alphabet with canonical padding.
const BASE64_PATTERN: &str = r"^([0-9a-zA-Z+/]{4})*(([0-9a-zA-Z+/]{2}==)|([0-9a-zA-Z+/]{3}=))?$";

fn base64_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BASE64_PATTERN).expect("static pattern is valid"))
}

/// Remove all whitespace and everything up to the last comma.
///
/// The comma rule drops data-URI headers such as `data:image/png;base64,`.
pub fn normalize_base64_text(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.rfind(',') {
        Some(idx) => compact[idx + 1..].to_string(),
        None => compact,
    }
}

/// Check a normalized string against the strict Base64 pattern.
///
/// The empty string is rejected even though the pattern matches it.
pub fn is_valid_base64(text: &str) -> bool {
    !text.is_empty() && base64_regex().is_match(text)
}

/// Return the normalized payload if the text holds a Base64-encoded image.
///
/// Besides the alphabet check, the decoded bytes must start with a known
/// image signature, so ordinary words that happen to be valid Base64 are
/// not mistaken for pictures.
pub fn extract_image_base64(text: &str) -> Option<String> {
    let payload = normalize_base64_text(text);
    if !is_valid_base64(&payload) {
        return None;
    }
    let bytes = STANDARD.decode(&payload).ok()?;
    if infer::is_image(&bytes) {
        Some(payload)
    } else {
        None
    }
}
