use crate::utils::{is_date_stamp, is_month_stamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A date stamp `yyyy-mm-dd`, used as a section key.
/// Zero padding makes lexicographic order equal to chronological order.
pub type DateStamp = String;

/// Calendar month, rendered `yyyy-mm`.
///
/// Ordering is `(year, month)`, which matches the lexicographic order of the
/// rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    pub year: u16,
    pub month: u8,
}

impl YearMonth {
    pub fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    /// Month of a `yyyy-mm-dd` or `yyyy-mm` stamp, from its first 7 characters.
    ///
    /// Accepts any two-digit month so that every file name matching the
    /// journal naming scheme has a group, even `2023-13-01.md`.
    pub(crate) fn of_stamp(stamp: &str) -> Option<Self> {
        let prefix = stamp.get(..7)?;
        if !is_month_stamp(prefix) {
            return None;
        }
        let year = prefix[..4].parse().ok()?;
        let month = prefix[5..7].parse().ok()?;
        Some(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a month as yyyy-mm (01-12), got `{0}`")]
pub struct ParseYearMonthError(String);

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    /// Strict parse for user input: `yyyy-mm` with a month in 1..=12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_month_stamp(trimmed) {
            return Err(ParseYearMonthError(s.to_string()));
        }
        match Self::of_stamp(trimmed) {
            Some(ym) if (1..=12).contains(&ym.month) => Ok(ym),
            _ => Err(ParseYearMonthError(s.to_string())),
        }
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseYearMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A file name recognised by the journal layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalFile {
    /// `yyyy-mm-dd.md`
    Daily { date: DateStamp, month: YearMonth },
    /// `yyyy-mm.md`
    Month(YearMonth),
}

impl JournalFile {
    /// Classify a bare file name. Anything else in the journal directory is
    /// not ours and yields `None`.
    pub fn classify(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".md")?;
        if is_date_stamp(stem) {
            let month = YearMonth::of_stamp(stem)?;
            return Some(JournalFile::Daily {
                date: stem.to_string(),
                month,
            });
        }
        if is_month_stamp(stem) {
            return YearMonth::of_stamp(stem).map(JournalFile::Month);
        }
        None
    }
}

pub fn daily_file_name(date: &str) -> String {
    format!("{date}.md")
}

pub fn month_file_name(month: YearMonth) -> String {
    format!("{month}.md")
}
