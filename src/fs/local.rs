use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

use super::{owner, EntryStat, Metadata};
use crate::error::MetaError;

/// [`Metadata`] backed by the local filesystem.
#[derive(Debug, Default)]
pub struct LocalFs {
    owners: RefCell<HashMap<u32, String>>,
}

impl LocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn owner_name(&self, uid: u32) -> String {
        self.owners
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| owner::user_name(uid))
            .clone()
    }
}

impl Metadata for LocalFs {
    /// Entries that vanish mid-listing are skipped. Names keep their raw bytes.
    fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, MetaError> {
        let entries = fs::read_dir(path).map_err(|e| MetaError::from_io(path, e))?;
        let mut names: Vec<OsString> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .collect();
        names.sort();
        Ok(names)
    }

    fn stat_entry(&self, path: &Path) -> Result<EntryStat, MetaError> {
        let meta = fs::metadata(path).map_err(|e| MetaError::from_io(path, e))?;
        Ok(EntryStat {
            is_dir: meta.is_dir(),
            size: meta.len(),
            accessed: meta.accessed().ok(),
            modified: meta.modified().ok(),
            mode: meta.permissions().mode(),
            owner: self.owner_name(meta.uid()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn setup_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();
        let mut f = File::create(dir.path().join("a.txt")).unwrap();
        f.write_all(b"hello").unwrap();
        dir
    }

    #[test]
    fn list_directory_is_sorted_lexicographically() {
        let dir = setup_test_dir();
        let names = LocalFs::new().list_directory(dir.path()).unwrap();
        assert_eq!(names, vec![".hidden", "Alpha", "a.txt", "b.txt", "beta"]);
    }

    #[test]
    fn list_keeps_non_utf8_names_intact() {
        use std::os::unix::ffi::OsStringExt;

        let dir = TempDir::new().unwrap();
        let raw = OsString::from_vec(b"d\xffir".to_vec());
        fs::create_dir(dir.path().join(&raw)).unwrap();

        let fs = LocalFs::new();
        let names = fs.list_directory(dir.path()).unwrap();
        assert_eq!(names, vec![raw.clone()]);
        assert!(fs.stat_entry(&dir.path().join(&names[0])).unwrap().is_dir);
    }

    #[test]
    fn list_empty_directory() {
        let dir = TempDir::new().unwrap();
        let names = LocalFs::new().list_directory(dir.path()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn list_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs::new()
            .list_directory(&dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, MetaError::Io { .. }));
    }

    #[test]
    fn stat_file_reports_size_and_mode() {
        let dir = setup_test_dir();
        let path = dir.path().join("a.txt");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
        let stat = LocalFs::new().stat_entry(&path).unwrap();
        assert!(!stat.is_dir);
        assert_eq!(stat.size, 5);
        assert_eq!(stat.mode & 0o777, 0o640);
        assert!(stat.modified.is_some());
        assert!(!stat.owner.is_empty());
    }

    #[test]
    fn stat_directory() {
        let dir = setup_test_dir();
        let stat = LocalFs::new().stat_entry(&dir.path().join("beta")).unwrap();
        assert!(stat.is_dir);
    }

    #[test]
    fn unreadable_directory_reports_permission_denied() {
        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = LocalFs::new().list_directory(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users bypass mode bits; nothing to assert in that case.
        if let Err(err) = result {
            assert!(err.is_permission_denied());
        }
    }
}
