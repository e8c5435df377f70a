//! Unit tests for placeholder substitution

use std::path::Path;

use paste_image::template::Replacements;

#[test]
fn document_variables_render_into_folder_pattern() {
    let vars = Replacements::for_document(
        Path::new("/repo/docs/intro.md"),
        Some(Path::new("/repo")),
    );
    assert_eq!(
        vars.replace("${projectRoot}/img/${fileBasenameNoExtension}${fileExtname}"),
        "/repo/img/intro.md"
    );
    assert_eq!(vars.replace("${fileDirname}"), "/repo/docs");
}

#[test]
fn file_without_extension_has_empty_extname() {
    let vars = Replacements::for_document(Path::new("/repo/Makefile"), None);
    assert_eq!(vars.get("fileExtname"), Some(""));
    assert_eq!(vars.get("fileBasenameNoExtension"), Some("Makefile"));
}

#[test]
fn dotted_name_strips_only_last_extension() {
    let vars = Replacements::for_document(Path::new("/repo/notes.v2.md"), None);
    assert_eq!(vars.get("fileBasenameNoExtension"), Some("notes.v2"));
}

#[test]
fn values_are_inserted_without_escaping() {
    let mut vars = Replacements::new();
    vars.set("relativePath", "my image (1).png");
    assert_eq!(vars.replace("![](${relativePath})"), "![](my image (1).png)");
}

#[test]
fn windows_separators_become_forward_slashes() {
    let mut vars = Replacements::new();
    vars.set("currentFileDir", r"C:\work\docs");
    assert_eq!(vars.replace(r"${currentFileDir}\img"), "C:/work/docs/img");
}
