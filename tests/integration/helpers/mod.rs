//! Test doubles for the clipboard and prompt ports

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use paste_image::clipboard::text::NoText;
use paste_image::clipboard::tools::Xclip;
use paste_image::clipboard::{ClipboardReader, ClipboardText, CommandRunner, ScriptOutput};
use paste_image::prompt::Prompter;

/// A 1x1 PNG, Base64 encoded.
pub const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAJcEhZcwAADsMAAA7DAcdvqGQAAAAYdEVYdFNvZnR3YXJlAHBhaW50Lm5ldCA0LjEuNWRHWFIAAAAMSURBVBhXY2BgYAAAAAQAAVzN/2kAAAAASUVORK5CYII=";

/// A 1x1 GIF, Base64 encoded.
pub const GIF_1X1: &str = "R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Fixed point in time for deterministic file names.
pub fn at(hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, min, sec).unwrap()
}

/// Clipboard text source with fixed content.
pub struct FakeText(pub Option<String>);

impl ClipboardText for FakeText {
    fn read_text(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Runner that replays one output and records each invocation.
#[derive(Clone)]
pub struct FakeRunner {
    output: ScriptOutput,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<(String, Vec<String>)>>>,
    script: Arc<Mutex<Option<String>>>,
}

impl FakeRunner {
    pub fn printing(stdout: &str) -> Self {
        Self::with_output(ScriptOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    pub fn with_output(output: ScriptOutput) -> Self {
        Self {
            output,
            calls: Arc::new(AtomicUsize::new(0)),
            last: Arc::new(Mutex::new(None)),
            script: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_command(&self) -> Option<(String, Vec<String>)> {
        self.last.lock().unwrap().clone()
    }

    /// Script file content as it was while the last command ran.
    pub fn last_script(&self) -> Option<String> {
        self.script.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ScriptOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((program.to_string(), args.to_vec()));
        *self.script.lock().unwrap() = args.last().and_then(|p| fs::read_to_string(p).ok());
        Ok(self.output.clone())
    }
}

/// Runner whose process can never be spawned.
pub struct MissingRunner;

impl CommandRunner for MissingRunner {
    fn run(&self, program: &str, _args: &[String]) -> io::Result<ScriptOutput> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", program),
        ))
    }
}

/// Reader whose helper prints `stdout`; clipboard text is absent.
pub fn helper_reader(stdout: &str) -> (ClipboardReader, FakeRunner) {
    let runner = FakeRunner::printing(stdout);
    let reader = ClipboardReader::with_sources(
        Box::new(NoText),
        Box::new(Xclip::new()),
        Box::new(runner.clone()),
    );
    (reader, runner)
}

/// Reader with `text` on the clipboard and a helper printing `stdout`.
pub fn text_reader(text: &str, stdout: &str) -> (ClipboardReader, FakeRunner) {
    let runner = FakeRunner::printing(stdout);
    let reader = ClipboardReader::with_sources(
        Box::new(FakeText(Some(text.to_string()))),
        Box::new(Xclip::new()),
        Box::new(runner.clone()),
    );
    (reader, runner)
}

/// Reader holding a PNG on the clipboard.
pub fn png_reader() -> (ClipboardReader, FakeRunner) {
    helper_reader(PNG_1X1)
}

/// Prompter that answers every question the same way.
pub struct Answer(pub Option<PathBuf>);

impl Prompter for Answer {
    fn confirm_path(&self, _default: &Path) -> Option<PathBuf> {
        self.0.clone()
    }
}
