//! Integration tests for clipboard image capture.

use super::helpers::{
    helper_reader, text_reader, FakeRunner, FakeText, MissingRunner, GIF_1X1, PNG_1X1,
};

use paste_image::clipboard::tools::{PngPaste, PowerShell, Xclip};
use paste_image::clipboard::{ClipboardError, ClipboardReader, ImageTool, ScriptOutput};

mod reader_tests {
    use super::*;

    #[test]
    fn gif_text_is_accepted_as_image() {
        let (reader, runner) = text_reader(GIF_1X1, "no image");
        assert_eq!(reader.read_base64_image(), Ok(GIF_1X1.to_string()));
        assert_eq!(runner.calls(), 0);
    }

    #[test]
    fn base64_text_is_used_without_running_helper() {
        let (reader, runner) = text_reader(PNG_1X1, "no image");
        assert_eq!(reader.read_base64_image(), Ok(PNG_1X1.to_string()));
        assert_eq!(runner.calls(), 0);
    }

    #[test]
    fn data_uri_text_is_normalized() {
        let wrapped = format!(
            "data:image/png;base64,{}\n{}",
            &PNG_1X1[..40],
            &PNG_1X1[40..]
        );
        let (reader, runner) = text_reader(&wrapped, "no image");
        assert_eq!(reader.read_base64_image(), Ok(PNG_1X1.to_string()));
        assert_eq!(runner.calls(), 0);
    }

    #[test]
    fn plain_text_falls_back_to_helper() {
        let (reader, runner) = text_reader("just some notes", PNG_1X1);
        assert_eq!(reader.read_base64_image(), Ok(PNG_1X1.to_string()));
        assert_eq!(runner.calls(), 1);
    }

    #[test]
    fn base64_text_that_is_not_an_image_falls_back_to_helper() {
        // Valid Base64 for "ABC", not an image
        let (reader, runner) = text_reader("QUJD", "no image");
        assert_eq!(reader.read_base64_image(), Err(ClipboardError::ClipboardEmpty));
        assert_eq!(runner.calls(), 1);
    }

    #[test]
    fn helper_no_image_is_clipboard_empty() {
        let (reader, _) = helper_reader("no image\n");
        let err = reader.read_base64_image().unwrap_err();
        assert_eq!(err, ClipboardError::ClipboardEmpty);
        assert_eq!(err.to_string(), "image of clipboard is empty");
    }

    #[test]
    fn helper_missing_tool_names_the_tool() {
        let (reader, _) = helper_reader("no xclip\n");
        let err = reader.read_base64_image().unwrap_err();
        assert_eq!(err, ClipboardError::ToolNotInstalled { tool: "xclip" });
        assert_eq!(err.to_string(), "You need to install xclip command first.");
    }

    #[test]
    fn helper_stderr_is_execution_failure() {
        let runner = FakeRunner::with_output(ScriptOutput {
            success: false,
            stdout: String::new(),
            stderr: "Error: Can't open display\n".to_string(),
        });
        let reader = ClipboardReader::with_sources(
            Box::new(FakeText(None)),
            Box::new(Xclip::new()),
            Box::new(runner),
        );
        let err = reader.read_base64_image().unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to save image of clipboard: Error: Can't open display"
        );
    }

    #[test]
    fn spawn_failure_is_execution_failure() {
        let reader = ClipboardReader::with_sources(
            Box::new(FakeText(None)),
            Box::new(Xclip::new()),
            Box::new(MissingRunner),
        );
        assert!(matches!(
            reader.read_base64_image(),
            Err(ClipboardError::ExecutionFailed { .. })
        ));
    }

    #[test]
    fn tool_name_reports_helper() {
        let (reader, _) = helper_reader("");
        assert_eq!(reader.tool_name(), "xclip");
    }
}

mod tool_tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn helper_runs_complete_script_then_removes_it() {
        let (reader, runner) = helper_reader(PNG_1X1);
        reader.read_base64_image().unwrap();

        let (program, args) = runner.last_command().unwrap();
        assert_eq!(program, "sh");
        let script = Path::new(&args[0]);
        assert!(script.ends_with("linux.sh"));
        assert_eq!(runner.last_script().as_deref(), Some(Xclip::SCRIPT));
        assert!(!script.exists());
        assert!(!script.parent().unwrap().exists());
    }

    #[test]
    fn each_helper_run_uses_a_fresh_script_path() {
        let (reader, runner) = helper_reader(PNG_1X1);
        reader.read_base64_image().unwrap();
        let (_, first) = runner.last_command().unwrap();
        reader.read_base64_image().unwrap();
        let (_, second) = runner.last_command().unwrap();
        assert_ne!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn planted_symlink_in_shared_temp_is_not_followed() {
        use std::fs;
        use std::os::unix::fs::symlink;
        use tempfile::TempDir;

        let victim_dir = TempDir::new().unwrap();
        let victim = victim_dir.path().join("victim.txt");
        fs::write(&victim, "precious data").unwrap();

        // The fixed location an attacker could predict
        let shared = std::env::temp_dir().join("paste-image");
        let _ = fs::create_dir_all(&shared);
        let planted = shared.join("linux.sh");
        let _ = fs::remove_file(&planted);
        let planted_ok = symlink(&victim, &planted).is_ok();

        let (reader, runner) = helper_reader(PNG_1X1);
        reader.read_base64_image().unwrap();

        assert_eq!(fs::read_to_string(&victim).unwrap(), "precious data");
        let (_, args) = runner.last_command().unwrap();
        assert_ne!(Path::new(&args[0]), planted.as_path());
        if planted_ok {
            let _ = fs::remove_file(&planted);
        }
    }

    #[test]
    fn powershell_command_runs_script_hidden() {
        let tool = PowerShell::new();
        let (program, args) = tool.command(Path::new("C:/tmp/win32.ps1"));
        assert_eq!(program, "powershell");
        assert!(args.iter().any(|a| a == "-noprofile"));
        assert!(args.iter().any(|a| a == "-sta"));
        assert_eq!(args.last().map(String::as_str), Some("C:/tmp/win32.ps1"));
        assert_eq!(tool.missing_tool_sentinel(), None);
    }

    #[test]
    fn pngpaste_reports_its_own_sentinel() {
        let tool = PngPaste::new();
        assert_eq!(tool.missing_tool_sentinel(), Some("no pngpaste"));
        assert!(PngPaste::SCRIPT.contains("no pngpaste"));
    }

    #[test]
    fn linux_script_checks_for_xclip_and_png_target() {
        assert!(Xclip::SCRIPT.contains("no xclip"));
        assert!(Xclip::SCRIPT.contains("image/png"));
    }
}
