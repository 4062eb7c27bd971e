//! External editor hand-off.
//!
//! The navigator only sees the [`Editor`] capability. In production it is a
//! [`SuspendingEditor`], which gives the terminal back to the child process for
//! the duration of the edit.

use std::path::Path;
use std::process::Command;

use crate::error::{AppError, Result};
use crate::tui::Tui;

/// Fallback when neither the CLI, the config, `$VISUAL` nor `$EDITOR` name one.
pub const DEFAULT_EDITOR: &str = "vi";

/// Opens a file and blocks until the user is done with it.
pub trait Editor {
    fn open(&mut self, path: &Path) -> Result<()>;
}

/// A parsed editor command line such as `code -w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Split a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Pick the editor: explicit setting, then `$VISUAL`, then `$EDITOR`, then `vi`.
    pub fn resolve(explicit: Option<&str>) -> Self {
        let visual = std::env::var("VISUAL").ok();
        let editor = std::env::var("EDITOR").ok();
        Self::resolve_from(explicit, visual.as_deref(), editor.as_deref())
    }

    fn resolve_from(explicit: Option<&str>, visual: Option<&str>, editor: Option<&str>) -> Self {
        [explicit, visual, editor]
            .into_iter()
            .flatten()
            .find_map(Self::parse)
            .unwrap_or_else(|| Self {
                program: DEFAULT_EDITOR.to_string(),
                args: Vec::new(),
            })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the child process for `path`, run from the file's directory.
    pub fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(path);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run the editor on `path` and wait for it to exit.
    pub fn run(&self, path: &Path) -> Result<()> {
        let status = self
            .command(path)
            .status()
            .map_err(|e| AppError::Editor(format!("cannot launch {}: {}", self.program, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(AppError::Editor(format!("{} exited with {}", self.program, status)))
        }
    }
}

/// Suspends the TUI, runs the editor in the foreground, then restores the TUI.
pub struct SuspendingEditor<'a> {
    tui: &'a mut Tui,
    command: &'a EditorCommand,
}

impl<'a> SuspendingEditor<'a> {
    pub fn new(tui: &'a mut Tui, command: &'a EditorCommand) -> Self {
        Self { tui, command }
    }
}

impl Editor for SuspendingEditor<'_> {
    fn open(&mut self, path: &Path) -> Result<()> {
        self.tui.suspend()?;
        let result = self.command.run(path);
        self.tui.resume()?;
        result
    }
}
