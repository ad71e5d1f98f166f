pub mod time;

/// Check whether `text` is a zero-padded date stamp `yyyy-mm-dd`.
///
/// Only the shape is checked (ASCII digits and dashes), not calendar
/// validity: journal files are matched by name, not by date arithmetic.
///
/// # Examples
///
/// ```
/// use diarist_core::is_date_stamp;
///
/// assert!(is_date_stamp("2023-05-01"));
/// assert!(!is_date_stamp("2023-5-01"));
/// assert!(!is_date_stamp("2023-05-01 "));
/// assert!(!is_date_stamp("２０２３-05-01")); // Full-width digits are not ASCII
/// ```
pub fn is_date_stamp(text: &str) -> bool {
    matches_stamp(text, &[4, 2, 2])
}

/// Check whether `text` is a zero-padded month stamp `yyyy-mm`.
///
/// # Examples
///
/// ```
/// use diarist_core::is_month_stamp;
///
/// assert!(is_month_stamp("2023-05"));
/// assert!(!is_month_stamp("2023-05-01"));
/// assert!(!is_month_stamp("23-05"));
/// ```
pub fn is_month_stamp(text: &str) -> bool {
    matches_stamp(text, &[4, 2])
}

/// Digit groups of the given widths, joined by single dashes.
fn matches_stamp(text: &str, widths: &[usize]) -> bool {
    let mut groups = text.split('-');
    for &width in widths {
        match groups.next() {
            Some(group) if group.len() == width && group.bytes().all(|b| b.is_ascii_digit()) => {}
            _ => return false,
        }
    }
    groups.next().is_none()
}
