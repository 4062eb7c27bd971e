//! In-memory [`Metadata`] double for navigator tests.
//!
//! Clones share the same tree, so a test can keep a handle and mutate the
//! filesystem while the navigator owns another clone.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{EntryStat, Metadata};
use crate::error::MetaError;

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File { size: u64, mode: u32 },
}

#[derive(Debug, Default)]
struct Inner {
    nodes: BTreeMap<PathBuf, Node>,
    denied_list: HashSet<PathBuf>,
    denied_stat: HashSet<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and any missing ancestors).
    pub fn dir(self, path: &str) -> Self {
        self.insert(Path::new(path), Node::Dir);
        self
    }

    /// Add a file with mode `0o644` (and any missing ancestor directories).
    pub fn file(self, path: &str, size: u64) -> Self {
        self.insert(Path::new(path), Node::File { size, mode: 0o644 });
        self
    }

    /// Make listing `path` fail with a permission error.
    pub fn deny(self, path: &str) -> Self {
        self.inner.borrow_mut().denied_list.insert(PathBuf::from(path));
        self
    }

    /// Make statting `path` fail with a permission error.
    pub fn deny_stat(self, path: &str) -> Self {
        self.inner.borrow_mut().denied_stat.insert(PathBuf::from(path));
        self
    }

    pub fn set_file_size(&self, path: &str, size: u64) {
        self.insert(Path::new(path), Node::File { size, mode: 0o644 });
    }

    pub fn remove(&self, path: &str) {
        let path = PathBuf::from(path);
        self.inner
            .borrow_mut()
            .nodes
            .retain(|p, _| !p.starts_with(&path));
    }

    fn insert(&self, path: &Path, node: Node) {
        let mut inner = self.inner.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            inner
                .nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir);
        }
        inner.nodes.insert(path.to_path_buf(), node);
    }
}

fn check_access(denied: &HashSet<PathBuf>, path: &Path) -> Result<(), MetaError> {
    if denied.contains(path) {
        return Err(MetaError::PermissionDenied(path.to_path_buf()));
    }
    Ok(())
}

fn not_found(path: &Path) -> MetaError {
    MetaError::from_io(path, io::Error::from(io::ErrorKind::NotFound))
}

impl Metadata for MemoryFs {
    fn list_directory(&self, path: &Path) -> Result<Vec<OsString>, MetaError> {
        let inner = self.inner.borrow();
        check_access(&inner.denied_list, path)?;
        match inner.nodes.get(path) {
            Some(Node::Dir) => {}
            _ => return Err(not_found(path)),
        }
        let mut names: Vec<OsString> = inner
            .nodes
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_os_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn stat_entry(&self, path: &Path) -> Result<EntryStat, MetaError> {
        let inner = self.inner.borrow();
        check_access(&inner.denied_stat, path)?;
        let node = inner.nodes.get(path).ok_or_else(|| not_found(path))?;
        let (is_dir, size, mode) = match node {
            Node::Dir => (true, 4096, 0o40755),
            Node::File { size, mode } => (false, *size, 0o100000 | *mode),
        };
        Ok(EntryStat {
            is_dir,
            size,
            accessed: None,
            modified: None,
            mode,
            owner: "tester".to_string(),
        })
    }
}
