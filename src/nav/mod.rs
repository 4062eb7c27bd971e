//! Navigation state machine: listing, search filter, viewport and preview.
//!
//! [`NavState`] holds the state that survives between input events and exposes
//! pure transition steps. [`Navigator`] drives those steps for one input event
//! at a time, consulting the [`Metadata`] collaborator for listings and
//! handing files to an [`Editor`].

pub mod filter;
pub mod preview;
pub mod viewport;

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::editor::Editor;
use crate::error::{AppError, MetaError, Result};
use crate::fs::Metadata;

use self::filter::filter_entries;
use self::preview::PreviewState;
use self::viewport::Viewport;

/// Input mode of the navigator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browsing,
    /// The user is typing a search query.
    Searching,
}

/// One input event, already decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    MoveDown,
    MoveUp,
    Activate,
    Ascend,
    ClearFilter,
    EnterSearch,
    ToggleHidden,
    Quit,
    Confirm,
    Backspace,
    Input(char),
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Which list the cursor currently walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    Full,
    Filtered,
}

/// Everything needed to resume rendering between events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    cwd: PathBuf,
    entries: Vec<OsString>,
    query: String,
    mode: Mode,
    filtered: Vec<OsString>,
    viewport: Viewport,
    show_hidden: bool,
}

impl NavState {
    /// Start browsing `cwd` with its (unfiltered, sorted) `entries`.
    pub fn new(cwd: PathBuf, entries: Vec<OsString>, show_hidden: bool) -> Self {
        let entries = visible_entries(entries, show_hidden);
        Self {
            cwd,
            filtered: entries.clone(),
            entries,
            query: String::new(),
            mode: Mode::Browsing,
            viewport: Viewport::default(),
            show_hidden,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[OsString] {
        &self.entries
    }

    #[cfg(test)]
    pub fn filtered(&self) -> &[OsString] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// The filtered list is active while searching and after a confirmed,
    /// non-empty query.
    pub fn source(&self) -> ListSource {
        if self.mode == Mode::Searching || !self.query.is_empty() {
            ListSource::Filtered
        } else {
            ListSource::Full
        }
    }

    pub fn active(&self) -> &[OsString] {
        match self.source() {
            ListSource::Full => &self.entries,
            ListSource::Filtered => &self.filtered,
        }
    }

    pub fn selected_entry(&self) -> Option<&OsStr> {
        self.active()
            .get(self.viewport.selected)
            .map(OsString::as_os_str)
    }

    pub fn move_down(&mut self, rows: usize) {
        let len = self.active().len();
        self.viewport.move_down(len, rows);
    }

    pub fn move_up(&mut self, rows: usize) {
        self.viewport.move_up(rows);
    }

    /// Re-clamp the scroll window for a new number of visible rows.
    pub fn fit(&mut self, rows: usize) {
        let len = self.active().len();
        self.viewport.clamp_to(len, rows);
    }

    pub fn enter_search(&mut self) {
        self.mode = Mode::Searching;
        self.refilter();
    }

    /// Leave search mode; the query and its filtered list stay active.
    pub fn confirm_search(&mut self) {
        self.mode = Mode::Browsing;
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
        self.viewport.reset();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.refilter();
        self.viewport.reset();
    }

    /// Replace the working directory and its listing, dropping all search state.
    pub fn enter_directory(&mut self, cwd: PathBuf, entries: Vec<OsString>) {
        self.cwd = cwd;
        self.entries = visible_entries(entries, self.show_hidden);
        self.query.clear();
        self.mode = Mode::Browsing;
        self.refilter();
        self.viewport.reset();
    }

    /// Drop the query and install a freshly loaded listing of the same directory.
    ///
    /// The cursor only resets when the filtered list was active; otherwise it
    /// stays put (clamped to the new length).
    pub fn clear_filter(&mut self, entries: Vec<OsString>, rows: usize) {
        let was_filtered = self.source() == ListSource::Filtered;
        self.entries = visible_entries(entries, self.show_hidden);
        self.query.clear();
        self.refilter();
        if was_filtered {
            self.viewport.reset();
        } else {
            self.fit(rows);
        }
    }

    /// Flip hidden-entry visibility and install the reloaded listing.
    pub fn toggle_hidden(&mut self, entries: Vec<OsString>) {
        self.show_hidden = !self.show_hidden;
        self.entries = visible_entries(entries, self.show_hidden);
        self.refilter();
        self.viewport.reset();
    }

    fn refilter(&mut self) {
        self.filtered = filter_entries(&self.entries, &self.query);
    }
}

fn visible_entries(mut entries: Vec<OsString>, show_hidden: bool) -> Vec<OsString> {
    if !show_hidden {
        entries.retain(|name| !name.as_bytes().starts_with(b"."));
    }
    entries
}

/// The top-level controller: consumes one [`NavEvent`] at a time.
pub struct Navigator {
    state: NavState,
    meta: Box<dyn Metadata>,
    preview: PreviewState,
    notice: Option<String>,
}

impl Navigator {
    /// Load `cwd` and resolve the initial preview.
    pub fn new(cwd: PathBuf, meta: Box<dyn Metadata>, show_hidden: bool) -> Result<Self> {
        let entries = meta.list_directory(&cwd)?;
        let mut navigator = Self {
            state: NavState::new(cwd, entries, show_hidden),
            meta,
            preview: PreviewState::Unavailable,
            notice: None,
        };
        navigator.refresh_preview();
        Ok(navigator)
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Take the message describing the last recovered failure, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn fit_viewport(&mut self, rows: usize) {
        self.state.fit(rows);
    }

    /// Apply one event. `rows` is the number of list rows currently visible.
    pub fn handle(
        &mut self,
        event: NavEvent,
        rows: usize,
        editor: &mut dyn Editor,
    ) -> Result<Outcome> {
        log::debug!("{:?} in {:?}", event, self.state.mode());
        match (self.state.mode(), event) {
            (_, NavEvent::MoveDown) => self.state.move_down(rows),
            (_, NavEvent::MoveUp) => self.state.move_up(rows),

            (Mode::Browsing, NavEvent::Quit) => return Ok(Outcome::Quit),
            (Mode::Browsing, NavEvent::Activate) => self.activate(editor)?,
            (Mode::Browsing, NavEvent::Ascend) => self.ascend(),
            (Mode::Browsing, NavEvent::ClearFilter) => self.clear_filter(rows),
            (Mode::Browsing, NavEvent::EnterSearch) => self.state.enter_search(),
            (Mode::Browsing, NavEvent::ToggleHidden) => self.toggle_hidden(),

            (Mode::Searching, NavEvent::Confirm) => self.state.confirm_search(),
            (Mode::Searching, NavEvent::Backspace) => self.state.pop_query(),
            (Mode::Searching, NavEvent::Input(c)) => self.state.push_query(c),

            _ => return Ok(Outcome::Continue),
        }
        self.refresh_preview();
        Ok(Outcome::Continue)
    }

    fn refresh_preview(&mut self) {
        self.preview = preview::resolve(
            self.meta.as_ref(),
            self.state.active(),
            self.state.viewport().selected,
            self.state.cwd(),
        );
    }

    fn activate(&mut self, editor: &mut dyn Editor) -> Result<()> {
        let Some(name) = self.state.selected_entry() else {
            return Ok(());
        };
        let path = self.state.cwd().join(name);

        let stat = match self.meta.stat_entry(&path) {
            Ok(stat) => stat,
            Err(err) => {
                self.recover(err);
                return Ok(());
            }
        };

        if stat.is_dir {
            self.change_directory(path);
            return Ok(());
        }

        log::info!("opening {} in editor", path.display());
        match editor.open(&path) {
            Ok(()) => Ok(()),
            Err(AppError::Editor(msg)) => {
                log::warn!("editor failed: {msg}");
                self.notice = Some(format!("Editor failed: {msg}"));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn ascend(&mut self) {
        let Some(parent) = self.state.cwd().parent() else {
            return;
        };
        let parent = parent.to_path_buf();
        self.change_directory(parent);
    }

    /// Traverse to `target`. If it cannot be listed the traversal is abandoned
    /// and the current directory stays as it was.
    fn change_directory(&mut self, target: PathBuf) {
        match self.meta.list_directory(&target) {
            Ok(entries) => {
                log::info!("entering {}", target.display());
                self.state.enter_directory(target, entries);
            }
            Err(err) => self.recover(err),
        }
    }

    fn clear_filter(&mut self, rows: usize) {
        match self.meta.list_directory(self.state.cwd()) {
            Ok(entries) => self.state.clear_filter(entries, rows),
            Err(err) => self.recover(err),
        }
    }

    fn toggle_hidden(&mut self) {
        match self.meta.list_directory(self.state.cwd()) {
            Ok(entries) => self.state.toggle_hidden(entries),
            Err(err) => self.recover(err),
        }
    }

    fn recover(&mut self, err: MetaError) {
        if err.is_permission_denied() {
            log::info!("{err}");
        } else {
            log::warn!("{err}");
        }
        self.notice = Some(err.to_string());
    }
}
