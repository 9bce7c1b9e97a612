mod calendar_scenarios;

use crate::calendars::{BusinessCalendar, DateOrTime, WeeklySchedule, WorkingHours};
use chrono::{NaiveDate, Weekday};

pub(crate) fn is_close(a: &f64, b: &f64, abs_tol: Option<f64>) -> bool {
    // used rather than equality for float numbers
    (a - b).abs() < abs_tol.unwrap_or(1e-8)
}

/// Parse `YYYY-MM-DD` as a date, anything longer as a timestamp.
pub(crate) fn dt(s: &str) -> DateOrTime {
    s.parse().unwrap()
}

pub(crate) fn calendar(
    entries: &[(Weekday, f64, f64)],
    holidays: Vec<NaiveDate>,
) -> BusinessCalendar {
    let schedule = WeeklySchedule::new(
        entries
            .iter()
            .map(|(d, b, e)| (*d, WorkingHours::try_new(*b, *e).unwrap())),
    );
    BusinessCalendar::try_new(schedule, holidays).unwrap()
}

/// Weekdays 05:00 to 21:00 and Saturdays 05:00 to 13:00.
pub(crate) fn fixture_six_day_cal(holidays: Vec<NaiveDate>) -> BusinessCalendar {
    calendar(
        &[
            (Weekday::Mon, 5.0, 21.0),
            (Weekday::Tue, 5.0, 21.0),
            (Weekday::Wed, 5.0, 21.0),
            (Weekday::Thu, 5.0, 21.0),
            (Weekday::Fri, 5.0, 21.0),
            (Weekday::Sat, 5.0, 13.0),
        ],
        holidays,
    )
}
