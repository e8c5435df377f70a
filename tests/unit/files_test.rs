//! Unit tests for image naming and path resolution

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, TimeZone};
use tempfile::TempDir;

use paste_image::files::filename::{image_file_name, validate_selection};
use paste_image::files::resolve::{find_workspace_root, relative_path, save_directory};
use paste_image::template::Replacements;
use paste_image::PasteError;

#[test]
fn timestamp_uses_local_offset_of_given_time() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
    let name = image_file_name("", "%Y-%m-%d-%H-%M-%S", &now).unwrap();
    assert_eq!(name, "2023-12-31-23-59-58.png");
}

#[test]
fn bad_date_pattern_is_an_error() {
    let tz = FixedOffset::east_opt(0).unwrap();
    let now = tz.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let err = image_file_name("", "%Q", &now).unwrap_err();
    assert!(matches!(err, PasteError::InvalidDatePattern { .. }));
}

#[test]
fn selection_rules() {
    assert!(validate_selection("").is_ok());
    assert!(validate_selection("Screen shot 1").is_ok());
    assert!(validate_selection("日本語").is_ok());
    for bad in ["a/b", r"a\b", "c:d", "x*", "why?", "\"q\"", "<a>", "a|b"] {
        assert!(validate_selection(bad).is_err(), "{} should be rejected", bad);
    }
    assert!(validate_selection(&"x".repeat(120)).is_ok());
    assert!(validate_selection(&"x".repeat(121)).is_err());
}

#[test]
fn save_directory_expands_placeholders() {
    let doc = Path::new("/repo/docs/intro.md");
    let vars = Replacements::for_document(doc, Some(Path::new("/repo")));
    assert_eq!(
        save_directory(doc, "${workspaceRoot}/assets", &vars),
        PathBuf::from("/repo/assets")
    );
    assert_eq!(
        save_directory(doc, "./img/../pics", &vars),
        PathBuf::from("/repo/docs/pics")
    );
}

#[test]
fn relative_path_between_siblings() {
    assert_eq!(
        relative_path(Path::new("/repo/docs"), Path::new("/repo/assets/a.png")),
        "../assets/a.png"
    );
    assert_eq!(
        relative_path(Path::new("/repo/docs"), Path::new("/repo/docs/a.png")),
        "a.png"
    );
}

#[test]
fn workspace_root_is_nearest_git_ancestor() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir(temp.path().join("a").join(".git")).unwrap();

    assert_eq!(find_workspace_root(&nested), Some(temp.path().join("a")));
}
