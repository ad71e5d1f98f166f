use crate::model::YearMonth;
use chrono::{Datelike, Local};

/// Get the current calendar month from the local clock.
///
/// Operations never call this themselves; callers read it once and pass
/// it in so a run sees a single "current month".
pub fn current_year_month() -> YearMonth {
    let today = Local::now().date_naive();
    YearMonth::new(today.year() as u16, today.month() as u8)
}
