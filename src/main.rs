mod app;
mod components;
mod config;
mod editor;
mod error;
mod event;
mod fs;
mod handler;
mod logging;
mod nav;
mod theme;
mod tui;
mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::app::App;
use crate::config::{AppConfig, GeneralConfig, ThemeConfig};
use crate::editor::{EditorCommand, SuspendingEditor};
use crate::error::AppError;
use crate::event::{Event, EventHandler};
use crate::fs::local::LocalFs;
use crate::nav::Navigator;
use crate::tui::{install_panic_hook, Tui};

/// A terminal directory browser with incremental search.
#[derive(Parser, Debug)]
#[command(name = "fm", version, about)]
struct Cli {
    /// File that receives the final working directory on quit
    cwd_file: Option<PathBuf>,

    /// Directory to start in (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Editor command used to open files, e.g. "nvim" or "code -w"
    #[arg(short, long)]
    editor: Option<String>,

    /// Do not list dot-files
    #[arg(long)]
    hide_hidden: bool,

    /// Color scheme: dark, light or custom
    #[arg(long)]
    theme: Option<String>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Partial config holding only the flags that were given.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                default_path: self.dir.as_ref().map(|d| d.display().to_string()),
                show_hidden: self.hide_hidden.then_some(false),
                editor: self.editor.clone(),
            },
            theme: ThemeConfig {
                scheme: self.theme.clone(),
                custom: None,
            },
        }
    }
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        logging::init(log_file)?;
    }

    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));
    let start = config.default_path().unwrap_or(Path::new("."));
    let start = start
        .canonicalize()
        .map_err(|_| AppError::InvalidPath(format!("{} does not exist", start.display())))?;
    if !start.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "{} is not a directory",
            start.display()
        )));
    }

    let editor = EditorCommand::resolve(config.editor());
    log::info!(
        "starting in {} with editor {}",
        start.display(),
        editor.program()
    );

    let navigator = Navigator::new(start, Box::new(LocalFs::new()), config.show_hidden())?;
    let mut app = App::new(navigator, theme::resolve_theme(&config.theme));

    install_panic_hook();
    let mut tui = Tui::new().map_err(|e| AppError::Terminal(e.to_string()))?;
    let result = run(&mut tui, &mut app, &editor);
    tui.restore()?;
    result?;

    let cwd = app.navigator.state().cwd();
    log::info!("quit in {}", cwd.display());
    if let Some(target) = &cli.cwd_file {
        fs::write_working_dir(target, cwd)?;
    }
    Ok(())
}

fn run(tui: &mut Tui, app: &mut App, editor: &EditorCommand) -> error::Result<()> {
    let mut events = EventHandler::new();

    while !app.should_quit {
        tui.terminal_mut().draw(|frame| ui::render(app, frame))?;

        match events.next()? {
            Event::Key(key) => {
                let mut editor = SuspendingEditor::new(tui, editor);
                handler::handle_key_event(app, key, &mut editor)?;
            }
            // The next draw measures the new size.
            Event::Resize(_, _) => {}
        }
    }
    Ok(())
}
