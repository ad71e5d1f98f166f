use crate::error::JournalError;
use crate::model::{DateStamp, YearMonth};
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// A file that could not be processed. The rest of the batch went on.
#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    #[serde(serialize_with = "serialize_display")]
    pub error: JournalError,
}

fn serialize_display<S: Serializer>(error: &JournalError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// A month file written by a merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthWritten {
    pub month: YearMonth,
    pub path: PathBuf,
    /// Dates taken from daily files in this run
    pub merged: Vec<DateStamp>,
    /// Sections in the file after the write
    pub sections: usize,
}

/// Outcome of a day -> month merge.
#[derive(Debug, Default, Serialize)]
pub struct MergeReport {
    pub months: Vec<MonthWritten>,
    /// Daily files removed after their month file was written
    pub deleted: Vec<PathBuf>,
    /// Daily files of the current month, left live
    pub skipped_current_month: Vec<PathBuf>,
    /// Daily files with blank content, left in place
    pub skipped_empty: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

/// Outcome of a month -> day split.
#[derive(Debug, Default, Serialize)]
pub struct SplitReport {
    /// Daily files written
    pub restored: Vec<PathBuf>,
    /// Month files removed after a complete split
    pub deleted: Vec<PathBuf>,
    /// Month files split but left in place
    pub kept: Vec<PathBuf>,
    /// Month files without any date section
    pub skipped_unparseable: Vec<PathBuf>,
    /// Sections with blank content; no daily file was written for them
    pub dropped_sections: Vec<DateStamp>,
    pub failures: Vec<FileFailure>,
}

pub(crate) trait RecordFailure {
    fn failures_mut(&mut self) -> &mut Vec<FileFailure>;

    fn record(&mut self, error: JournalError) {
        log::warn!("{error}");
        let path = error.path().cloned().unwrap_or_default();
        self.failures_mut().push(FileFailure { path, error });
    }
}

impl RecordFailure for MergeReport {
    fn failures_mut(&mut self) -> &mut Vec<FileFailure> {
        &mut self.failures
    }
}

impl RecordFailure for SplitReport {
    fn failures_mut(&mut self) -> &mut Vec<FileFailure> {
        &mut self.failures
    }
}

impl MergeReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merged_days(&self) -> usize {
        self.months.iter().map(|m| m.merged.len()).sum()
    }
}

impl SplitReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
