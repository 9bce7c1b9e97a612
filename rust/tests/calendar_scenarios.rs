use super::{calendar, dt, fixture_six_day_cal};
use crate::calendars::{
    nd, BusinessCalendar, DateOrTime, WeeklySchedule, WorkRoll, WorkingHours,
};
use chrono::Weekday;

fn expect_working_hours(cal: &BusinessCalendar, from: &str, to: &str, expected: f64) {
    assert_eq!(
        cal.working_hours_between(&dt(from), &dt(to)),
        expected,
        "working_hours_between({from}, {to})"
    );
}

fn expect_add_working_hours(cal: &BusinessCalendar, to: &str, hours: f64, expected: &str) {
    let result = cal.add_working_hours(&dt(to), hours).unwrap();
    assert_eq!(
        DateOrTime::Time(result),
        dt(expected),
        "add_working_hours({to}, {hours})"
    );
}

fn expect_working_days(cal: &BusinessCalendar, from: &str, to: &str, expected: f64) {
    assert_eq!(
        cal.working_days_between(&dt(from), &dt(to)),
        expected,
        "working_days_between({from}, {to})"
    );
}

fn expect_add_working_days(cal: &BusinessCalendar, to: &str, days: f64, expected: &str) {
    assert_eq!(
        cal.add_working_days(&dt(to), days).unwrap(),
        dt(expected),
        "add_working_days({to}, {days})"
    );
}

#[test]
fn working_hours_same_business_day() {
    let cal = fixture_six_day_cal(vec![]);
    expect_working_hours(&cal, "2000-02-22 14:00", "2000-02-22 16:00", 2.0);
    expect_working_hours(&cal, "2000-02-22 14:00", "2000-02-22 16:06", 2.1);
    expect_working_hours(&cal, "2000-02-22 14:00", "2000-02-22 14:54", 0.9);
}

#[test]
fn working_hours_different_days() {
    let cal = fixture_six_day_cal(vec![]);
    expect_working_hours(&cal, "2009-08-20 14:00", "2009-08-21 14:00", 16.0);
    expect_working_hours(&cal, "2009-08-20 14:06", "2009-08-21 14:00", 15.9);
}

#[test]
fn working_hours_outside_working_hours() {
    let cal = fixture_six_day_cal(vec![]);
    expect_working_hours(&cal, "2000-02-22 04:00", "2000-02-22 06:00", 1.0);
    expect_working_hours(&cal, "2017-12-18 20:30", "2017-12-18 21:30", 0.5);
    expect_working_hours(&cal, "2017-12-18 21:30", "2017-12-18 21:30", 0.0);
    expect_working_hours(&cal, "2017-12-18 21:30", "2017-12-18 22:00", 0.0);
    expect_working_hours(&cal, "2017-12-18 22:30", "2017-12-18 21:30", 0.0);
}

#[test]
fn working_hours_reversed_range_is_negated() {
    let cal = fixture_six_day_cal(vec![]);
    expect_working_hours(&cal, "2000-02-22 16:00", "2000-02-22 14:00", -2.0);
    expect_working_hours(&cal, "2009-08-21 14:00", "2009-08-20 14:00", -16.0);
    expect_working_hours(&cal, "2017-12-16 17:00", "2017-12-15 16:00", -13.0);
}

#[test]
fn working_hours_with_dates() {
    let cal = fixture_six_day_cal(vec![]);
    expect_working_hours(&cal, "2019-08-09", "2019-08-09", 16.0);
    expect_working_hours(&cal, "2019-08-10", "2019-08-10", 8.0);
    expect_working_hours(&cal, "2019-08-11", "2019-08-11", 0.0);
}

#[test]
fn add_working_hours_same_day() {
    let cal = fixture_six_day_cal(vec![nd(2000, 1, 1)]);
    expect_add_working_hours(&cal, "2000-02-22 06:05", 0.0, "2000-02-22 06:05");
    expect_add_working_hours(&cal, "2000-02-22 06:05", 5.0, "2000-02-22 11:05");
    expect_add_working_hours(&cal, "2000-02-22 06:05", 0.5, "2000-02-22 06:35");
}

#[test]
fn add_working_hours_next_day() {
    let cal = fixture_six_day_cal(vec![nd(2000, 1, 1)]);
    expect_add_working_hours(&cal, "2000-02-22 20:30", 1.0, "2000-02-23 05:30");
    expect_add_working_hours(&cal, "2000-02-22 12:00", 15.0, "2000-02-23 11:00");
}

#[test]
fn add_working_hours_outside_business_day() {
    let cal = fixture_six_day_cal(vec![nd(2000, 1, 1)]);
    expect_add_working_hours(&cal, "2000-02-22 04:00", 1.0, "2000-02-22 06:00");
    expect_add_working_hours(&cal, "2000-02-22 04:00", 6.0, "2000-02-22 11:00");
    expect_add_working_hours(&cal, "2000-02-22 23:00", 6.0, "2000-02-23 11:00");
}

#[test]
fn add_working_hours_multiple_days() {
    let cal = fixture_six_day_cal(vec![nd(2000, 1, 1)]);
    expect_add_working_hours(&cal, "2000-02-18 20:00", 10.0, "2000-02-21 06:00");
    expect_add_working_hours(&cal, "2000-02-18 20:00", 20.0, "2000-02-21 16:00");
    expect_add_working_hours(&cal, "2008-02-20 12:00", 55.0, "2008-02-25 11:00");
}

#[test]
fn add_working_hours_over_holidays() {
    let cal = fixture_six_day_cal(vec![nd(2000, 1, 1)]);
    expect_add_working_hours(&cal, "1999-12-31 20:00", 7.0, "2000-01-03 11:00");
    expect_add_working_hours(&cal, "2000-01-01 12:00", 6.0, "2000-01-03 11:00");
}

#[test]
fn add_working_hours_sparse_calendars() {
    let cal = calendar(
        &[
            (Weekday::Mon, 8.0, 18.0),
            (Weekday::Wed, 7.0, 17.0),
            (Weekday::Fri, 9.0, 19.0),
        ],
        vec![],
    );
    expect_add_working_hours(&cal, "2019-08-01 00:00", 160.0, "2019-09-09 08:00");
    expect_add_working_hours(&cal, "2019-08-01 00:00", 300.0, "2019-10-11 09:00");

    let all_day = WorkingHours::try_new(0.0, 24.0).unwrap();
    let cal = BusinessCalendar::try_new(WeeklySchedule::uniform(all_day), vec![]).unwrap();
    expect_add_working_hours(&cal, "2000-02-22 00:00", 23.5, "2000-02-22 23:30");
}

#[test]
fn add_working_hours_long_holiday_run() {
    // two weeks of holidays defer the result past every weekday of the run
    let holidays = (10..24).map(|d| nd(2019, 6, d)).collect();
    let cal = fixture_six_day_cal(holidays);
    expect_add_working_hours(&cal, "2019-06-08 12:00", 2.0, "2019-06-24 06:00");
}

#[test]
fn add_working_hours_with_date() {
    let cal = fixture_six_day_cal(vec![nd(2000, 1, 1)]);
    expect_add_working_hours(&cal, "2000-02-22", 1.0, "2000-02-22 06:00");
}

#[test]
fn add_working_hours_fractional_schedule() {
    let cal = calendar(&[(Weekday::Mon, 8.5, 17.25), (Weekday::Tue, 8.5, 17.25)], vec![]);
    expect_add_working_hours(&cal, "2019-08-05 00:00", 8.75, "2019-08-06 08:30");
    expect_add_working_hours(&cal, "2019-08-05 17:00", 0.5, "2019-08-06 08:45");
    assert_eq!(
        cal.roll_backward(&dt("2019-08-06 08:00")).unwrap(),
        dt("2019-08-05 17:14:59")
    );
}

#[test]
fn working_days_fractional() {
    let cal = fixture_six_day_cal(vec![nd(2019, 5, 7)]);
    expect_working_days(&cal, "2014-12-01", "2014-12-01", 1.0);
    expect_working_days(&cal, "2014-12-01", "2014-12-03", 3.0);
    expect_working_days(&cal, "2014-12-01", "2014-12-07", 5.5);
    expect_working_days(&cal, "2014-12-01", "2014-12-08", 6.5);
    expect_working_days(&cal, "2014-12-01", "2014-12-09", 7.5);
    expect_working_days(&cal, "2014-12-01", "2014-12-13", 11.0);
    expect_working_days(&cal, "2019-08-01", "2019-09-01", 24.5);
    expect_working_days(&cal, "2019-08-01", "2020-08-01", 288.5);
}

#[test]
fn working_days_with_holidays() {
    let cal = fixture_six_day_cal(vec![nd(2019, 5, 7)]);
    expect_working_days(&cal, "2019-05-07", "2019-05-07", 0.0);
    expect_working_days(&cal, "2019-05-06", "2019-05-07", 1.0);
    expect_working_days(&cal, "2019-05-06", "2019-05-08", 2.0);
}

#[test]
fn add_working_days_with_dates() {
    let cal = fixture_six_day_cal(vec![]);
    expect_add_working_days(&cal, "2019-08-05", 0.0, "2019-08-05");
    expect_add_working_days(&cal, "2019-08-05", 1.0, "2019-08-06");
    expect_add_working_days(&cal, "2019-08-05", 0.5, "2019-08-05");
    expect_add_working_days(&cal, "2019-08-05", 6.0, "2019-08-12");
    expect_add_working_days(&cal, "2019-08-10", 1.0, "2019-08-12");
    expect_add_working_days(&cal, "2019-08-01", 30.0, "2019-09-09");
    expect_add_working_days(&cal, "2019-08-01", 300.0, "2020-08-17");
}

#[test]
fn add_working_days_with_timestamps() {
    let cal = fixture_six_day_cal(vec![]);
    expect_add_working_days(&cal, "2019-08-05 00:00", 0.0, "2019-08-05 05:00");
    expect_add_working_days(&cal, "2019-08-05 00:00", 1.0, "2019-08-06 05:00");
    expect_add_working_days(&cal, "2019-08-05 00:00", 0.5, "2019-08-05 13:00");
    expect_add_working_days(&cal, "2019-08-05 00:00", 6.0, "2019-08-12 13:00");
    expect_add_working_days(&cal, "2019-08-10 00:00", 1.0, "2019-08-12 13:00");
    expect_add_working_days(&cal, "2019-08-01 00:00", 30.0, "2019-09-09 05:00");
    expect_add_working_days(&cal, "2019-08-01 00:00", 300.0, "2020-08-17 13:00");
}

#[test]
fn working_hours_percentage_uses_longest_day() {
    let cal = fixture_six_day_cal(vec![nd(2019, 8, 7)]);
    assert_eq!(cal.working_hours_percentage(&nd(2019, 8, 5)), 1.0);
    assert_eq!(cal.working_hours_percentage(&nd(2019, 8, 7)), 0.0);
    assert_eq!(cal.working_hours_percentage(&nd(2019, 8, 10)), 0.5);
    assert_eq!(cal.working_hours_percentage(&nd(2019, 8, 11)), 0.0);
}
