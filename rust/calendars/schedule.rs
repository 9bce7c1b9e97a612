use chrono::Weekday;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendars::{CalendarError, WorkingHours};

/// The days of the week, in the order used for labels and iteration.
pub const DAYS_OF_THE_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A recurring weekly work schedule, mapping every weekday to its [`WorkingHours`].
///
/// Weekdays without an explicit entry do not work.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [WorkingHours; 7],
}

impl WeeklySchedule {
    /// Create a schedule from weekday entries. Repeated weekdays keep the last entry.
    pub fn new(entries: impl IntoIterator<Item = (Weekday, WorkingHours)>) -> Self {
        let mut days = [WorkingHours::Empty; 7];
        for (weekday, hours) in entries {
            days[weekday.num_days_from_monday() as usize] = hours;
        }
        Self { days }
    }

    /// Create a schedule applying the same working hours to all seven days.
    pub fn uniform(hours: WorkingHours) -> Self {
        Self { days: [hours; 7] }
    }

    /// Create a schedule from weekday labels, e.g. `"Mon"`, and configuration values.
    ///
    /// `default` applies to every weekday that has no labelled entry.
    pub fn try_from_labels(
        working_hours: &IndexMap<String, Value>,
        default: Option<&Value>,
    ) -> Result<Self, CalendarError> {
        let fallback = WorkingHours::parse(default)?;
        let mut schedule = Self::uniform(fallback);
        for (label, spec) in working_hours {
            let weekday = label
                .parse::<Weekday>()
                .map_err(|_| CalendarError::invalid_spec(format!("unknown weekday {label:?}")))?;
            schedule.days[weekday.num_days_from_monday() as usize] =
                WorkingHours::parse(Some(spec))?;
        }
        Ok(schedule)
    }

    /// The working hours on a weekday.
    pub fn get(&self, weekday: &Weekday) -> WorkingHours {
        self.days[weekday.num_days_from_monday() as usize]
    }

    /// Iterate over the weekdays in order with their working hours.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, WorkingHours)> + '_ {
        DAYS_OF_THE_WEEK.iter().map(|d| (*d, self.get(d)))
    }

    /// The number of weekdays with a positive working quantity.
    pub fn working_days(&self) -> usize {
        self.days.iter().filter(|d| !d.is_empty()).count()
    }

    /// The largest working quantity of any weekday.
    pub fn max_quantity(&self) -> f64 {
        self.days
            .iter()
            .map(|d| d.quantity(None, None))
            .fold(0.0, f64::max)
    }

    /// Render the schedule as weekday labels mapped to `[start, end]` or `null`.
    pub fn to_labels(&self) -> IndexMap<String, Value> {
        self.iter()
            .map(|(d, wh)| {
                let v = if wh.is_empty() {
                    Value::Null
                } else {
                    serde_json::json!([wh.begins_at(), wh.ends_at()])
                };
                (d.to_string(), v)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wh(b: f64, e: f64) -> WorkingHours {
        WorkingHours::try_new(b, e).unwrap()
    }

    #[test]
    fn test_missing_days_are_empty() {
        let s = WeeklySchedule::new([(Weekday::Mon, wh(5.0, 21.0)), (Weekday::Sat, wh(5.0, 13.0))]);
        assert_eq!(s.get(&Weekday::Mon).begins_at(), 5.0);
        assert_eq!(s.get(&Weekday::Mon).ends_at(), 21.0);
        assert_eq!(s.get(&Weekday::Sat).ends_at(), 13.0);
        assert_eq!(s.get(&Weekday::Thu).begins_at(), 0.0);
        assert_eq!(s.get(&Weekday::Thu).ends_at(), 0.0);
        assert_eq!(s.working_days(), 2);
        assert_eq!(s.max_quantity(), 16.0);
    }

    #[test]
    fn test_from_labels_with_default() {
        let mut labels = IndexMap::new();
        labels.insert("Sun".to_string(), Value::Null);
        labels.insert("Sat".to_string(), json!("5..13"));
        let s = WeeklySchedule::try_from_labels(&labels, Some(&json!([5, 21]))).unwrap();
        assert_eq!(s.get(&Weekday::Wed), wh(5.0, 21.0));
        assert_eq!(s.get(&Weekday::Sat), wh(5.0, 13.0));
        assert!(s.get(&Weekday::Sun).is_empty());
        assert_eq!(s.working_days(), 6);
    }

    #[test]
    fn test_from_labels_unknown_weekday() {
        let mut labels = IndexMap::new();
        labels.insert("Funday".to_string(), json!([9, 17]));
        assert!(WeeklySchedule::try_from_labels(&labels, None).is_err());
    }

    #[test]
    fn test_to_labels() {
        let s = WeeklySchedule::new([(Weekday::Tue, wh(9.0, 17.5))]);
        let labels = s.to_labels();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels["Tue"], json!([9.0, 17.5]));
        assert_eq!(labels["Mon"], Value::Null);
        let s2 = WeeklySchedule::try_from_labels(&labels, None).unwrap();
        assert_eq!(s, s2);
    }
}
