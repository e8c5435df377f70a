//! Path resolution for saved images.
//!
//! Handles:
//! 1. The configured save folder (absolute, or relative to the document)
//! 2. Relative links from a document to its image
//! 3. Workspace root discovery

use std::path::{Component, Path, PathBuf};

use crate::template::Replacements;

/// Resolve the folder an image for `document` is saved into.
///
/// `pattern` may contain placeholders. An absolute result is used as-is,
/// a relative one is joined onto the document's directory.
pub fn save_directory(document: &Path, pattern: &str, vars: &Replacements) -> PathBuf {
    let folder = vars.replace(pattern);
    let folder = folder.trim();
    let folder = Path::new(folder);
    if folder.is_absolute() {
        return folder.to_path_buf();
    }
    let base = document.parent().unwrap_or_else(|| Path::new(""));
    normalize(&base.join(folder))
}

/// Path of `target` relative to the directory `from_dir`, with `/`
/// separators.
///
/// Both paths should be absolute. When they share no prefix (different
/// drives on Windows), or only one of them is rooted, the target is
/// returned unchanged.
pub fn relative_path(from_dir: &Path, target: &Path) -> String {
    let from = normalize(from_dir);
    let target = normalize(target);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let common = from_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if from.has_root() != target.has_root() || (common == 0 && from.is_absolute()) {
        return target.display().to_string().replace('\\', "/");
    }

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from_parts.len() {
        parts.push("..".to_string());
    }
    for part in &target_parts[common..] {
        parts.push(part.as_os_str().to_string_lossy().to_string());
    }
    parts.join("/")
}

/// Lexically resolve `.` and `..` components without touching the
/// filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Nearest ancestor of `start` that contains a `.git` entry.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
