//! Editor port and an in-memory text document.
//!
//! Paste operations only talk to the [`Editor`] trait. The CLI drives it
//! with a [`TextDocument`], loaded from a file or from stdin.

use std::fmt;
use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The document a paste edits.
pub trait Editor {
    /// Path of the document on disk; `None` for an unsaved document.
    fn document_path(&self) -> Option<&Path>;

    /// Language id used to choose snippet templates (e.g. `markdown`).
    fn language_id(&self) -> &str;

    /// Currently selected text; empty when only a caret is placed.
    fn selection_text(&self) -> &str;

    /// Replace the selection, or insert at the caret when it is empty.
    fn replace_selection(&mut self, text: &str);

    /// Append text at the end of the document.
    fn append(&mut self, text: &str);
}

/// A 1-based line/column position. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl FromStr for Position {
    type Err = String;

    /// Parse `LINE` or `LINE:COLUMN`, both 1-based.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, column) = match s.split_once(':') {
            Some((line, column)) => (line, column),
            None => (s, "1"),
        };
        let parse = |v: &str, what: &str| -> Result<usize, String> {
            match v.trim().parse::<usize>() {
                Ok(0) | Err(_) => Err(format!("invalid {} in position {:?}", what, s)),
                Ok(n) => Ok(n),
            }
        };
        Ok(Position::new(parse(line, "line")?, parse(column, "column")?))
    }
}

/// Map a file extension to a language id.
pub fn language_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "md" | "markdown" | "mdx" => "markdown",
        "adoc" | "asciidoc" | "asc" => "asciidoc",
        "rst" => "restructuredtext",
        "html" | "htm" => "html",
        "tex" => "latex",
        "org" => "org",
        _ => "plaintext",
    }
}

/// Document text with a selection, optionally backed by a file.
#[derive(Debug, Clone)]
pub struct TextDocument {
    path: Option<PathBuf>,
    language_id: String,
    text: String,
    /// Byte range of the selection; empty means a caret.
    selection: Range<usize>,
    modified: bool,
}

impl TextDocument {
    /// An unsaved document. The caret starts at the end.
    pub fn untitled(text: impl Into<String>, language_id: &str) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            path: None,
            language_id: language_id.to_string(),
            text,
            selection: end..end,
            modified: false,
        }
    }

    /// Load a document from disk. The caret starts at the end.
    pub fn open(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let end = text.len();
        Ok(Self {
            path: Some(path.to_path_buf()),
            language_id: language_for_path(path).to_string(),
            text,
            selection: end..end,
            modified: false,
        })
    }

    /// Override the detected language id.
    pub fn with_language(mut self, language_id: &str) -> Self {
        self.language_id = language_id.to_string();
        self
    }

    /// Place the caret at `start`, or select from `start` to `end`.
    ///
    /// Positions past the end of a line or of the document are clamped.
    pub fn select(&mut self, start: Position, end: Option<Position>) {
        let a = self.offset_of(start);
        let b = end.map(|p| self.offset_of(p)).unwrap_or(a);
        self.selection = a.min(b)..a.max(b);
    }

    /// Full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any edit has been applied.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Write the document back to its file if it was edited.
    pub fn save(&self) -> io::Result<()> {
        match &self.path {
            Some(path) if self.modified => fs::write(path, &self.text),
            _ => Ok(()),
        }
    }

    fn offset_of(&self, pos: Position) -> usize {
        let mut offset = 0;
        for (idx, line) in self.text.split('\n').enumerate() {
            if idx + 1 == pos.line {
                let column = line
                    .char_indices()
                    .nth(pos.column - 1)
                    .map(|(i, _)| i)
                    .unwrap_or_else(|| line.trim_end_matches('\r').len());
                return offset + column;
            }
            offset += line.len() + 1;
        }
        self.text.len()
    }
}

impl Editor for TextDocument {
    fn document_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn selection_text(&self) -> &str {
        &self.text[self.selection.clone()]
    }

    fn replace_selection(&mut self, text: &str) {
        self.text.replace_range(self.selection.clone(), text);
        let caret = self.selection.start + text.len();
        self.selection = caret..caret;
        self.modified = true;
    }

    fn append(&mut self, text: &str) {
        self.text.push_str(text);
        self.modified = true;
    }
}
