use super::report::{RecordFailure, SplitReport};
use super::Journal;
use crate::config::UnfoldConfig;
use crate::error::{JournalError, JournalResult};
use crate::model::{daily_file_name, JournalFile, YearMonth};
use crate::section::parse_sections;
use std::path::PathBuf;

impl Journal {
    /// Expand month files back into daily files.
    ///
    /// Month files are handled in ascending `(year, month)` order. Each
    /// non-empty section overwrites `yyyy-mm-dd.md`; blank sections are
    /// dropped. The month file is then removed unless
    /// `options.keep_month_files` is set or one of its daily writes failed.
    pub fn split_to_daily(&self, options: &UnfoldConfig) -> JournalResult<SplitReport> {
        self.ensure_dir()?;
        let mut report = SplitReport::default();

        let mut month_files: Vec<(YearMonth, PathBuf)> = self
            .scan()?
            .into_iter()
            .filter_map(|(path, file)| match file {
                JournalFile::Month(month) => Some((month, path)),
                JournalFile::Daily { .. } => None,
            })
            .collect();
        month_files.sort();

        for (month, path) in month_files {
            self.split_month(month, path, options, &mut report);
        }

        Ok(report)
    }

    fn split_month(
        &self,
        month: YearMonth,
        path: PathBuf,
        options: &UnfoldConfig,
        report: &mut SplitReport,
    ) {
        let text = match self.fs.read_to_string(&path) {
            Ok(text) => text,
            Err(source) => {
                report.record(JournalError::Read { path, source });
                return;
            }
        };

        let sections = parse_sections(&text);
        if sections.is_empty() {
            log::warn!("no date sections in {}, skipping", path.display());
            report.skipped_unparseable.push(path);
            return;
        }
        log::debug!("{month}: {} sections", sections.len());

        let mut complete = true;
        for (date, content) in sections {
            if content.is_empty() {
                log::debug!("section {date} is empty, no daily file");
                report.dropped_sections.push(date);
                continue;
            }

            let daily_path = self.dir.join(daily_file_name(&date));
            match self.fs.write(&daily_path, &content) {
                Ok(()) => {
                    log::info!("restored {}", daily_path.display());
                    report.restored.push(daily_path);
                }
                Err(source) => {
                    complete = false;
                    report.record(JournalError::Write {
                        path: daily_path,
                        source,
                    });
                }
            }
        }

        if options.keep_month_files || !complete {
            report.kept.push(path);
            return;
        }

        match self.fs.remove_file(&path) {
            Ok(()) => {
                log::info!("deleted {}", path.display());
                report.deleted.push(path);
            }
            Err(source) => report.record(JournalError::Delete { path, source }),
        }
    }
}
