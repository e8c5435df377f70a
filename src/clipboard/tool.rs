//! Helper-script tool abstraction and process port.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use tracing::debug;

use super::error::ClipboardError;

/// Sentinel printed by every helper when the clipboard holds no image.
pub const NO_IMAGE_SENTINEL: &str = "no image";

/// Identifies which helper produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMethod {
    PowerShell,
    PngPaste,
    Xclip,
}

impl ToolMethod {
    /// Name of the external program the helper depends on.
    pub fn name(&self) -> &'static str {
        match self {
            ToolMethod::PowerShell => "powershell",
            ToolMethod::PngPaste => "pngpaste",
            ToolMethod::Xclip => "xclip",
        }
    }
}

impl fmt::Display for ToolMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Captured result of one helper process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Port for spawning external processes.
///
/// The real implementation is [`SystemRunner`]; tests substitute fakes so
/// no process is ever spawned.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ScriptOutput>;
}

/// Runs commands with `std::process::Command` and waits for them to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ScriptOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(ScriptOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// A platform helper that prints the clipboard image as Base64.
pub trait ImageTool {
    fn method(&self) -> ToolMethod;

    /// File name of the embedded script.
    fn script_name(&self) -> &'static str;

    /// Embedded script source.
    fn script_body(&self) -> &'static str;

    /// Program and arguments that execute the script at `script`.
    fn command(&self, script: &Path) -> (String, Vec<String>);

    /// Stdout value the script prints when its dependency is missing.
    fn missing_tool_sentinel(&self) -> Option<&'static str>;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Run the helper and return the Base64 payload it printed.
    fn read_base64(&self, runner: &dyn CommandRunner) -> Result<String, ClipboardError> {
        let script = MaterializedScript::write(self.script_name(), self.script_body())
            .map_err(|e| ClipboardError::failed(format!("cannot write helper script: {}", e)))?;
        let (program, args) = self.command(script.path());
        debug!(tool = self.name(), program = %program, "running clipboard helper");
        let output = runner
            .run(&program, &args)
            .map_err(|e| ClipboardError::failed(format!("cannot run {}: {}", program, e)))?;
        parse_script_output(self.missing_tool_sentinel(), self.method(), &output)
    }
}

/// Map a helper's exit status and stdout to a payload or a typed failure.
pub fn parse_script_output(
    missing_tool_sentinel: Option<&str>,
    method: ToolMethod,
    output: &ScriptOutput,
) -> Result<String, ClipboardError> {
    if !output.success {
        return Err(ClipboardError::failed(output.stderr.trim()));
    }
    if !output.stderr.trim().is_empty() {
        return Err(ClipboardError::failed(output.stderr.trim()));
    }

    let data = output.stdout.trim();
    if data.is_empty() {
        return Err(ClipboardError::failed(
            "failed to generate image from clipboard",
        ));
    }
    if Some(data) == missing_tool_sentinel {
        return Err(ClipboardError::ToolNotInstalled {
            tool: method.name(),
        });
    }
    if data == NO_IMAGE_SENTINEL {
        return Err(ClipboardError::ClipboardEmpty);
    }
    Ok(data.to_string())
}

/// Prefix of the private directory each helper run gets.
pub const SCRIPT_DIR_PREFIX: &str = "paste-image";

/// An embedded script written to disk for one helper run.
///
/// The script lives in a fresh directory readable only by the current
/// user. The directory is removed on drop, so keep this alive until the
/// helper process has exited.
#[derive(Debug)]
pub struct MaterializedScript {
    dir: TempDir,
    path: PathBuf,
}

impl MaterializedScript {
    /// Write `body` to `<new private dir>/<name>`.
    ///
    /// The file is created exclusively, so nothing planted in advance
    /// (a symlink or another user's file) is ever followed or reused.
    pub fn write(name: &str, body: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(SCRIPT_DIR_PREFIX)
            .tempdir()?;
        let path = dir.path().join(name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)?;
        file.write_all(body.as_bytes())?;
        file.sync_all()?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the script.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
