use crate::error::{JournalError, JournalResult};
use crate::model::JournalFile;
use crate::vfs::{FileSystem, PhysicalFileSystem};
use std::path::PathBuf;
use std::sync::Arc;

mod merge;
mod report;
mod split;


pub use report::{FileFailure, MergeReport, MonthWritten, SplitReport};

/// A journal directory holding `yyyy-mm-dd.md` and `yyyy-mm.md` files.
///
/// Both operations follow the same shape: classify the directory listing,
/// transform in memory, then write and delete file by file. A failure on one
/// file is recorded in the run report and the batch moves on; re-running is
/// the way to finish an interrupted batch.
///
/// No locking is done. Callers must not run a merge and a split against the
/// same directory at the same time.
pub struct Journal {
    pub dir: PathBuf,
    pub fs: Arc<dyn FileSystem>,
}

impl Journal {
    pub fn new(dir: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self { dir, fs }
    }

    /// Journal on the real file system.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir.into(), Arc::new(PhysicalFileSystem))
    }

    fn ensure_dir(&self) -> JournalResult<()> {
        if self.fs.is_dir(&self.dir) {
            Ok(())
        } else {
            Err(JournalError::MissingDirectory(self.dir.clone()))
        }
    }

    /// Journal files directly inside the directory, in listing order.
    fn scan(&self) -> JournalResult<Vec<(PathBuf, JournalFile)>> {
        let files = self.fs.list_files(&self.dir).map_err(|source| JournalError::List {
            path: self.dir.clone(),
            source,
        })?;

        Ok(files
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                let kind = JournalFile::classify(name)?;
                Some((path, kind))
            })
            .collect())
    }
}
