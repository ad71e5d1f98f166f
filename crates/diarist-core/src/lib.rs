//! Diarist Core Library
//!
//! Folds a journal directory of `yyyy-mm-dd.md` daily notes into
//! `yyyy-mm.md` month files and splits them back again.
//! Parsing and formatting are pure; file access goes through [`vfs::FileSystem`].
//!

pub mod config;
pub mod error;
pub mod journal;
pub mod model;
pub mod section;
pub mod utils;
pub mod vfs;

pub use config::{DiaristConfig, UnfoldConfig};
pub use error::{JournalError, JournalResult};
pub use journal::{FileFailure, Journal, MergeReport, MonthWritten, SplitReport};
pub use model::{JournalFile, YearMonth};
pub use section::{contains_header, parse_sections, write_sections, Sections};
pub use utils::time::current_year_month;
pub use utils::{is_date_stamp, is_month_stamp};
