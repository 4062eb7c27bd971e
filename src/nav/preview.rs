use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;
use time::{macros::format_description, OffsetDateTime, UtcOffset};

use crate::error::MetaError;
use crate::fs::{EntryStat, Metadata};

/// Why a preview could not be produced. Rendered as a single placeholder line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("Permission denied")]
    PermissionDenied,
    #[error("Unreadable: {0}")]
    Unreadable(String),
}

impl From<MetaError> for PreviewError {
    fn from(err: MetaError) -> Self {
        match err {
            MetaError::PermissionDenied(_) => Self::PermissionDenied,
            MetaError::Io { source, .. } => Self::Unreadable(source.to_string()),
        }
    }
}

/// File details shown in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub size: u64,
    pub accessed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub mode: u32,
    pub owner: String,
}

impl From<EntryStat> for FileInfo {
    fn from(stat: EntryStat) -> Self {
        Self {
            size: stat.size,
            accessed: stat.accessed,
            modified: stat.modified,
            mode: stat.mode,
            owner: stat.owner,
        }
    }
}

impl FileInfo {
    pub fn permissions(&self) -> String {
        format_permissions(self.mode)
    }

    /// Human-readable metadata lines, one fact per line.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Size: {}", format_size(self.size)),
            format!("Accessed: {}", format_timestamp(self.accessed)),
            format!("Modified: {}", format_timestamp(self.modified)),
            format!("Permissions: {}", self.permissions()),
            format!("Owner: {}", self.owner),
        ]
    }
}

/// Preview of the selected entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// Nothing is selected because the active listing is empty.
    #[default]
    Unavailable,
    File {
        path: PathBuf,
        info: Result<FileInfo, PreviewError>,
    },
    Directory {
        path: PathBuf,
        /// Child names rendered for display.
        children: Result<Vec<String>, PreviewError>,
    },
}

/// Build the preview for `active[selected]` inside `cwd`.
///
/// Metadata failures never escape; they become a [`PreviewError`] inside the
/// returned variant. An entry that cannot be statted at all is previewed as a file.
pub fn resolve(
    meta: &dyn Metadata,
    active: &[OsString],
    selected: usize,
    cwd: &Path,
) -> PreviewState {
    let Some(name) = active.get(selected) else {
        return PreviewState::Unavailable;
    };
    let path = cwd.join(name);

    match meta.stat_entry(&path) {
        Ok(stat) if stat.is_dir => {
            let children = meta
                .list_directory(&path)
                .map(|names| {
                    names
                        .iter()
                        .map(|n| n.to_string_lossy().into_owned())
                        .collect()
                })
                .map_err(PreviewError::from);
            PreviewState::Directory { path, children }
        }
        Ok(stat) => PreviewState::File {
            path,
            info: Ok(FileInfo::from(stat)),
        },
        Err(err) => {
            log::warn!("preview failed: {err}");
            PreviewState::File {
                path,
                info: Err(err.into()),
            }
        }
    }
}

/// Format bytes into human-readable size string.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    const GB: u64 = 1024 * MB;
    const TB: u64 = 1024 * GB;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB ({} B)", bytes as f64 / KB as f64, bytes)
    } else {
        format!("{} B", bytes)
    }
}

/// Format Unix permissions as rwxrwxrwx string.
pub fn format_permissions(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    FLAGS
        .iter()
        .map(|&(bit, ch)| if mode & bit != 0 { ch } else { '-' })
        .collect()
}

/// Format a timestamp in local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(stamp: Option<SystemTime>) -> String {
    let Some(stamp) = stamp else {
        return "Unknown".to_string();
    };
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::from(stamp)
        .to_offset(offset)
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .unwrap_or_else(|_| "Unknown".to_string())
}
