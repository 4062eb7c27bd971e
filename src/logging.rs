//! File-backed logging. The terminal is owned by the UI, so log output never
//! goes to stderr; without `--log-file` nothing is installed and `log` macros
//! are no-ops.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::Result;

/// Install a global logger appending to `path`. Level comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    builder(file).try_init()?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn builder(file: std::fs::File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis();
    builder
}
