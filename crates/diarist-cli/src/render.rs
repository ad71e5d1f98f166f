//! Console output for run reports.

use crate::cli::OutputFormat;
use diarist_core::{FileFailure, MergeReport, SplitReport};
use serde::Serialize;
use std::io::{self, Write};

pub fn render_merge(report: &MergeReport, format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    if format == OutputFormat::Json {
        return render_json(report, out);
    }

    for path in &report.skipped_current_month {
        writeln!(out, "left live (current month): {}", path.display())?;
    }
    for path in &report.skipped_empty {
        writeln!(out, "skipped (empty): {}", path.display())?;
    }
    for month in &report.months {
        writeln!(
            out,
            "wrote: {} ({} merged, {} sections)",
            month.path.display(),
            month.merged.len(),
            month.sections
        )?;
    }
    for path in &report.deleted {
        writeln!(out, "deleted: {}", path.display())?;
    }
    render_failures(&report.failures, out)?;

    writeln!(
        out,
        "fold complete: merged {} daily files into {} month files, {} failed",
        report.merged_days(),
        report.months.len(),
        report.failures.len()
    )
}

pub fn render_split(report: &SplitReport, format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    if format == OutputFormat::Json {
        return render_json(report, out);
    }

    for path in &report.skipped_unparseable {
        writeln!(out, "skipped (no date sections): {}", path.display())?;
    }
    for path in &report.restored {
        writeln!(out, "restored: {}", path.display())?;
    }
    for date in &report.dropped_sections {
        writeln!(out, "dropped empty section: {date}")?;
    }
    for path in &report.kept {
        writeln!(out, "kept: {}", path.display())?;
    }
    for path in &report.deleted {
        writeln!(out, "deleted: {}", path.display())?;
    }
    render_failures(&report.failures, out)?;

    writeln!(
        out,
        "unfold complete: restored {} daily files, removed {} month files, {} failed",
        report.restored.len(),
        report.deleted.len(),
        report.failures.len()
    )
}

fn render_failures(failures: &[FileFailure], out: &mut dyn Write) -> io::Result<()> {
    for failure in failures {
        writeln!(out, "failed: {}", failure.error)?;
    }
    Ok(())
}

fn render_json<T: Serialize>(report: &T, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diarist_core::{MonthWritten, YearMonth};
    use std::path::PathBuf;

    fn text(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_merge_text() {
        let report = MergeReport {
            months: vec![MonthWritten {
                month: YearMonth::new(2023, 5),
                path: PathBuf::from("j/2023-05.md"),
                merged: vec!["2023-05-01".to_string(), "2023-05-02".to_string()],
                sections: 3,
            }],
            deleted: vec![PathBuf::from("j/2023-05-01.md"), PathBuf::from("j/2023-05-02.md")],
            skipped_current_month: vec![PathBuf::from("j/2024-03-01.md")],
            ..Default::default()
        };

        let output = text(|out| render_merge(&report, OutputFormat::Text, out));

        assert_eq!(
            output,
            "left live (current month): j/2024-03-01.md\n\
             wrote: j/2023-05.md (2 merged, 3 sections)\n\
             deleted: j/2023-05-01.md\n\
             deleted: j/2023-05-02.md\n\
             fold complete: merged 2 daily files into 1 month files, 0 failed\n"
        );
    }

    #[test]
    fn test_render_split_json() {
        let report = SplitReport {
            restored: vec![PathBuf::from("j/2023-05-01.md")],
            dropped_sections: vec!["2023-05-02".to_string()],
            ..Default::default()
        };

        let output = text(|out| render_split(&report, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["restored"][0], "j/2023-05-01.md");
        assert_eq!(value["dropped_sections"][0], "2023-05-02");
        assert_eq!(value["failures"], serde_json::json!([]));
    }

    #[test]
    fn test_render_split_summary() {
        let report = SplitReport {
            skipped_unparseable: vec![PathBuf::from("j/2023-04.md")],
            ..Default::default()
        };

        let output = text(|out| render_split(&report, OutputFormat::Text, out));

        assert!(output.starts_with("skipped (no date sections): j/2023-04.md\n"));
        assert!(output.ends_with(
            "unfold complete: restored 0 daily files, removed 0 month files, 0 failed\n"
        ));
    }
}
