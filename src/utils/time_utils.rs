use chrono::{Days, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

pub fn format_date(date: NaiveDate) -> String {
    // Used for display purposes
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// `count` consecutive calendar days starting at `start` (inclusive).
/// Returns `None` if the range runs past the end of the calendar.
pub fn consecutive_days(start: NaiveDate, count: usize) -> Option<Vec<NaiveDate>> {
    (0..count as u64)
        .map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}
