//! Month file sections.
//!
//! A month file is a sequence of sections, each opened by a header line
//! `## yyyy-mm-dd` (or `- ## yyyy-mm-dd` when an editor turned it into a
//! list item). [`parse_sections`] and [`write_sections`] are inverses up to
//! surrounding whitespace of each section body.

use crate::model::DateStamp;
use crate::utils::is_date_stamp;
use std::collections::BTreeMap;

/// Section bodies keyed by date. Iteration order is ascending by date.
pub type Sections = BTreeMap<DateStamp, String>;

const HEADER_MARK: &str = "## ";
const LIST_MARK: &str = "- ";

enum ScanState<'a> {
    SeekingHeader,
    InSection { date: &'a str, body_start: usize },
}

/// Split month file text into its date sections.
///
/// - Text before the first header is preamble and dropped.
/// - Bodies are trimmed.
/// - If a date header appears twice, the later section wins.
pub fn parse_sections(text: &str) -> Sections {
    let mut sections = Sections::new();
    let mut state = ScanState::SeekingHeader;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let Some(date) = header_date(line) else {
            continue;
        };

        if let ScanState::InSection { date: open, body_start } = state {
            sections.insert(open.to_string(), text[body_start..line_start].trim().to_string());
        }
        state = ScanState::InSection {
            date,
            body_start: offset,
        };
    }

    if let ScanState::InSection { date, body_start } = state {
        sections.insert(date.to_string(), text[body_start..].trim().to_string());
    }

    sections
}

/// Render sections as month file text, ascending by date.
///
/// Each entry is `## <date>\n\n<content>\n\n`, entries joined by `\n`.
///
/// Bodies are written as-is. A body line that is itself a section header
/// (see [`contains_header`]) becomes a section of its own when the text is
/// parsed again.
pub fn write_sections(sections: &Sections) -> String {
    sections
        .iter()
        .map(|(date, content)| format!("{HEADER_MARK}{date}\n\n{content}\n\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether any line of `text` would be read as a section header.
pub fn contains_header(text: &str) -> bool {
    text.lines().any(|line| header_date(line).is_some())
}

/// Date of a section header line, or `None` for body text.
///
/// Accepted: optional `- `, then `## `, a `yyyy-mm-dd` stamp, then only
/// whitespace up to the end of the line.
fn header_date(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(LIST_MARK).unwrap_or(line);
    let rest = rest.strip_prefix(HEADER_MARK)?;
    let date = rest.get(..10)?;
    if !is_date_stamp(date) || !rest[10..].chars().all(char::is_whitespace) {
        return None;
    }
    Some(date)
}
