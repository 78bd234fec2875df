// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::event::TimeRange;

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Midnight at the end of `date`, i.e. the start of the following day.
///
/// `None` for `NaiveDate::MAX`, whose next midnight is not representable.
pub fn end_of_day_exclusive(date: NaiveDate) -> Option<NaiveDateTime> {
    start_of_day(date).checked_add_signed(Duration::days(1))
}

/// The Sunday-started week containing `date`.
///
/// Days outside chrono's representable range are left out, so the result is
/// shorter than seven days only at the ends of the calendar.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = i64::from(date.weekday().num_days_from_sunday());
    (0..7)
        .filter_map(|i| date.checked_add_signed(Duration::days(i - offset)))
        .collect()
}

/// Slot label such as `09:30 - 10:00`.
pub fn format_slot_label(range: &TimeRange) -> String {
    format!(
        "{} - {}",
        range.start.format("%H:%M"),
        range.end.format("%H:%M")
    )
}
