//! Remove files via `Drop`. Unlike what the `tempfile` crate offers,
//! this can clean up paths that we didn't create ourselves, like the
//! `.dat` files written next to an input file.

use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::{anyhow, Context, Result};

use crate::debug;

pub struct TemporaryFile {
    path: PathBuf,
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

impl TemporaryFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a new file with `contents` in the system's temp
    /// directory; the name is unique within this process and across
    /// concurrently running processes.
    pub fn with_contents(prefix: &str, contents: &[u8]) -> Result<Self> {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        let path = std::env::temp_dir().join(format!("{prefix}-{pid}-{n}"));
        std::fs::write(&path, contents)
            .with_context(|| anyhow!("writing temporary file {path:?}"))?;
        Ok(Self { path })
    }
}

impl From<PathBuf> for TemporaryFile {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TemporaryFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("deleted temporary file {:?}", self.path),
            Err(e) => debug!("error deleting temporary file {:?}: {e:#}", self.path),
        }
    }
}
