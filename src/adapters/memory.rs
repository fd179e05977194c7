//! In-memory filesystem adapter for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::FileSystem;

/// In-memory filesystem holding file contents in a map.
///
/// Used by command-level tests to seed inputs and inspect written
/// artifacts without touching the real disk.
#[derive(Default)]
pub struct InMemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl InMemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, replacing any previous contents at the path.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.lock().expect("filesystem lock poisoned").insert(path.into(), contents.into());
    }

    /// Returns the contents written at `path`, if any.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("filesystem lock poisoned").get(path).cloned()
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.contents(path).ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.insert(path, contents);
        Ok(())
    }
}
