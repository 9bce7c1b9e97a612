use chrono::NaiveDate;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};

/// Calendar days excluded from work entirely, regardless of their weekday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidaySet {
    pub(crate) holidays: IndexSet<NaiveDate>,
}

impl HolidaySet {
    /// Create a holiday set. Duplicate dates are ignored.
    pub fn new(holidays: Vec<NaiveDate>) -> Self {
        HolidaySet {
            holidays: IndexSet::from_iter(holidays),
        }
    }

    /// Returns whether the date is a holiday.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// The holidays in ascending date order.
    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut v: Vec<NaiveDate> = self.holidays.iter().cloned().collect();
        v.sort();
        v
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        HolidaySet {
            holidays: IndexSet::from_iter(iter),
        }
    }
}
