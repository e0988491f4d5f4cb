//! Per-folder locks for read-modify-write cycles
//!
//! Two editors positioning entries of the same folder at once can both
//! compute against the same snapshot. Running list, compute and write under
//! the folder's lock serializes them within one process.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
pub struct FolderLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FolderLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `folder`
    pub fn with_folder<T>(&self, folder: &str, f: impl FnOnce() -> T) -> T {
        let lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(folder.to_string()).or_default())
        };
        let _guard = lock.lock();
        debug!("Holding folder lock for {}", folder);
        f()
    }

    /// Number of folders that have been locked so far
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}
