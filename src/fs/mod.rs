pub mod local;
#[cfg(test)]
pub mod memory;
pub mod owner;

use std::ffi::OsString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{MetaError, Result};

/// Metadata for a single entry, as reported by [`Metadata::stat_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStat {
    pub is_dir: bool,
    pub size: u64,
    pub accessed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    /// Raw mode bits; only the low nine permission bits are displayed.
    pub mode: u32,
    pub owner: String,
}

/// Filesystem queries the navigator depends on.
///
/// Implementations must return directory children sorted lexicographically.
pub trait Metadata {
    fn list_directory(&self, path: &Path) -> std::result::Result<Vec<OsString>, MetaError>;

    fn stat_entry(&self, path: &Path) -> std::result::Result<EntryStat, MetaError>;
}

/// Write the final working directory to `target` as plain text, byte for byte.
pub fn write_working_dir(target: &Path, cwd: &Path) -> Result<()> {
    fs::write(target, cwd.as_os_str().as_bytes())?;
    log::info!("wrote working directory to {}", target.display());
    Ok(())
}
