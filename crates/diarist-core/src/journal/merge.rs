use super::report::{MergeReport, MonthWritten, RecordFailure};
use super::Journal;
use crate::error::{JournalError, JournalResult};
use crate::model::{month_file_name, DateStamp, JournalFile, YearMonth};
use crate::section::{contains_header, parse_sections, write_sections, Sections};
use std::collections::BTreeMap;
use std::path::PathBuf;

struct DailyEntry {
    date: DateStamp,
    content: String,
    path: PathBuf,
}

impl Journal {
    /// Fold daily files into their month files.
    ///
    /// Daily files of `current` are never touched. For every other month the
    /// existing month file is parsed, daily content is laid over it (the day
    /// wins on conflict), the month file is rewritten, and only then are the
    /// merged daily files removed.
    pub fn merge_to_month(&self, current: YearMonth) -> JournalResult<MergeReport> {
        self.ensure_dir()?;
        let mut report = MergeReport::default();
        let mut groups: BTreeMap<YearMonth, Vec<DailyEntry>> = BTreeMap::new();

        for (path, file) in self.scan()? {
            let JournalFile::Daily { date, month } = file else {
                continue;
            };

            if month == current {
                log::debug!("{} is in the current month, leaving it live", path.display());
                report.skipped_current_month.push(path);
                continue;
            }

            let raw = match self.fs.read_to_string(&path) {
                Ok(raw) => raw,
                Err(source) => {
                    report.record(JournalError::Read { path, source });
                    continue;
                }
            };

            let content = raw.trim();
            if content.is_empty() {
                log::debug!("{} is empty, skipping", path.display());
                report.skipped_empty.push(path);
                continue;
            }

            if contains_header(content) {
                log::warn!(
                    "{} contains a `## yyyy-mm-dd` line; it will read back as a separate section",
                    path.display()
                );
            }

            groups.entry(month).or_default().push(DailyEntry {
                date,
                content: content.to_string(),
                path,
            });
        }

        for (month, entries) in groups {
            self.merge_month(month, entries, &mut report);
        }

        Ok(report)
    }

    fn merge_month(&self, month: YearMonth, entries: Vec<DailyEntry>, report: &mut MergeReport) {
        let month_path = self.dir.join(month_file_name(month));

        let mut sections = if self.fs.exists(&month_path) {
            match self.fs.read_to_string(&month_path) {
                Ok(text) => parse_sections(&text),
                Err(source) => {
                    // Rewriting without the old sections would lose them.
                    report.record(JournalError::Read {
                        path: month_path,
                        source,
                    });
                    return;
                }
            }
        } else {
            Sections::new()
        };

        let mut merged = Vec::with_capacity(entries.len());
        for entry in &entries {
            if let Some(previous) = sections.insert(entry.date.clone(), entry.content.clone()) {
                if previous != entry.content {
                    log::debug!("{} replaces its section in {}", entry.date, month_path.display());
                }
            }
            merged.push(entry.date.clone());
        }

        if let Err(source) = self.fs.write(&month_path, &write_sections(&sections)) {
            report.record(JournalError::Write {
                path: month_path,
                source,
            });
            return;
        }
        log::info!("wrote {} ({} sections)", month_path.display(), sections.len());

        report.months.push(MonthWritten {
            month,
            path: month_path,
            merged,
            sections: sections.len(),
        });

        for entry in entries {
            match self.fs.remove_file(&entry.path) {
                Ok(()) => {
                    log::info!("deleted {}", entry.path.display());
                    report.deleted.push(entry.path);
                }
                Err(source) => report.record(JournalError::Delete {
                    path: entry.path,
                    source,
                }),
            }
        }
    }
}
