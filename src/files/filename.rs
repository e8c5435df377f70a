//! Image file naming.
//!
//! A non-empty editor selection becomes the file stem verbatim, after it
//! passes an allow-list check. Without a selection the stem is the
//! current time formatted with a chrono `strftime` pattern.

use std::fmt::Write as _;
use std::sync::OnceLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use regex::Regex;

use crate::paste::PasteError;

/// Extension given to every pasted image.
pub const IMAGE_EXTENSION: &str = ".png";

/// Default stem pattern, e.g. `2024-05-01-13-45-09`.
pub const DEFAULT_NAME_PATTERN: &str = "%Y-%m-%d-%H-%M-%S";

/// No path separators or reserved characters, 1 to 120 characters.
const SELECTION_PATTERN: &str = r#"^[^\\/:*?"<>|]{1,120}$"#;

fn selection_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SELECTION_PATTERN).expect("static pattern is valid"))
}

/// Check a selection for use as a file stem.
///
/// An empty selection means "no selection" and is accepted.
pub fn validate_selection(selection: &str) -> Result<(), PasteError> {
    if selection.is_empty() || selection_regex().is_match(selection) {
        Ok(())
    } else {
        Err(PasteError::InvalidFileName {
            selection: selection.to_string(),
        })
    }
}

/// Format `now` with a strftime pattern.
///
/// Chrono panics when displaying an invalid pattern, so the pattern is
/// parsed up front and rejected with `InvalidDatePattern` instead.
pub fn format_timestamp<Tz>(pattern: &str, now: &DateTime<Tz>) -> Result<String, PasteError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(PasteError::InvalidDatePattern {
            pattern: pattern.to_string(),
        });
    }
    let mut out = String::new();
    write!(out, "{}", now.format_with_items(items.iter()))
        .map_err(|_| PasteError::InvalidDatePattern {
            pattern: pattern.to_string(),
        })?;
    Ok(out)
}

/// Build the image file name from a selection or a timestamp.
///
/// The selection is validated first; the result always ends in `.png`.
pub fn image_file_name<Tz>(
    selection: &str,
    pattern: &str,
    now: &DateTime<Tz>,
) -> Result<String, PasteError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    validate_selection(selection)?;
    let stem = if selection.is_empty() {
        format_timestamp(pattern, now)?
    } else {
        selection.to_string()
    };
    Ok(format!("{}{}", stem, IMAGE_EXTENSION))
}
