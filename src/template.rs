//! `${name}` placeholder substitution and per-language snippet templates.
//!
//! Templates are plain strings such as `![](${relativePath})`. Values are
//! substituted literally, without escaping, and every backslash in the
//! result becomes a forward slash so Windows paths render as links.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Ordered placeholder map, built fresh for each paste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predefined variables for a document.
    ///
    /// `currentFileDir` is the directory containing the document.
    pub fn for_document(path: &Path, workspace_root: Option<&Path>) -> Self {
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::predefined(path, dir, workspace_root)
    }

    /// Predefined variables for a folder target.
    ///
    /// `currentFileDir` is the folder itself.
    pub fn for_directory(path: &Path, workspace_root: Option<&Path>) -> Self {
        Self::predefined(path, path, workspace_root)
    }

    fn predefined(path: &Path, current_dir: &Path, workspace_root: Option<&Path>) -> Self {
        let mut vars = Self::new();
        if let Some(root) = workspace_root {
            let root = root.display().to_string();
            vars.set("workspaceRoot", root.clone());
            vars.set("projectRoot", root);
        }

        let extname = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem = basename
            .strip_suffix(extname.as_str())
            .unwrap_or(&basename)
            .to_string();
        let dirname = path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        vars.set("currentFileDir", current_dir.display().to_string());
        vars.set("fileExtname", extname);
        vars.set("fileBasenameNoExtension", stem);
        vars.set("fileBasename", basename);
        vars.set("fileDirname", dirname);
        vars
    }

    /// Store `${name}` → `value`. An existing name keeps its position.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let key = format!("${{{}}}", name);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value stored for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = format!("${{{}}}", name);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Substitute placeholders and normalize slashes.
    ///
    /// Each placeholder is replaced at its first occurrence only, in
    /// insertion order.
    pub fn replace(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.entries {
            out = out.replacen(key.as_str(), value, 1);
        }
        out.replace('\\', "/")
    }
}

/// Two-part template for inline Base64 images.
///
/// `inline` goes at the caret; `definition` is appended to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base64Template {
    pub inline: String,
    #[serde(default)]
    pub definition: String,
}

impl Base64Template {
    pub fn new(inline: &str, definition: &str) -> Self {
        Self {
            inline: inline.to_string(),
            definition: definition.to_string(),
        }
    }

    /// Render both parts with the same replacements.
    pub fn render(&self, vars: &Replacements) -> (String, String) {
        (vars.replace(&self.inline), vars.replace(&self.definition))
    }
}

/// Built-in link template for a language id.
pub fn default_link_template(language_id: &str) -> &'static str {
    match language_id {
        "markdown" => "![](${relativePath})",
        "asciidoc" => "image::${relativePath}[]",
        _ => "${relativePath}",
    }
}

/// Built-in Base64 template for a language id.
pub fn default_base64_template(language_id: &str) -> Base64Template {
    match language_id {
        "markdown" => Base64Template::new(
            "![][${relativePath}]",
            "\n[${relativePath}]:data:image/png;base64,${base64}\n",
        ),
        "asciidoc" => Base64Template::new("image::data:image/png;base64,${base64}[]", ""),
        _ => Base64Template::new("data:image/png;base64,${base64}", ""),
    }
}
