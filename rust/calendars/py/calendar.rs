//! Wrapper module to export to Python using pyo3 bindings.

use crate::calendars::{
    BusinessCalendar, CalendarError, DateOrTime, WeeklySchedule, WorkRoll,
    WorkingHours,
};
use crate::json::JSON;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use indexmap::IndexMap;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<CalendarError> for PyErr {
    fn from(err: CalendarError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

#[pymethods]
impl BusinessCalendar {
    /// Create a new *BusinessCalendar* object.
    ///
    /// Parameters
    /// ----------
    /// working_hours: dict[str, tuple[float, float] | None], optional
    ///     Weekday labels, e.g. "Mon", mapped to the start and end hour of work.
    /// holidays: list[date], optional
    ///     Specific dates without any working hours.
    /// default_hours: tuple[float, float], optional
    ///     Working hours applied to every weekday not given in ``working_hours``.
    #[new]
    #[pyo3(signature = (working_hours=None, holidays=None, default_hours=None))]
    fn new_py(
        working_hours: Option<IndexMap<String, Option<(f64, f64)>>>,
        holidays: Option<Vec<NaiveDate>>,
        default_hours: Option<(f64, f64)>,
    ) -> PyResult<Self> {
        let base = match default_hours {
            Some((b, e)) => WeeklySchedule::uniform(WorkingHours::try_new(b, e)?),
            None => WeeklySchedule::default(),
        };
        let mut entries: Vec<(Weekday, WorkingHours)> = Vec::new();
        for (label, hours) in working_hours.unwrap_or_default() {
            let weekday: Weekday = label.parse().map_err(|_| {
                PyValueError::new_err(format!("'{}' is not a day of the week.", label))
            })?;
            let hours = match hours {
                Some((b, e)) => WorkingHours::try_new(b, e)?,
                None => WorkingHours::Empty,
            };
            entries.push((weekday, hours));
        }
        let schedule = WeeklySchedule::new(base.iter().chain(entries));
        Ok(BusinessCalendar::try_new(schedule, holidays.unwrap_or_default())?)
    }

    /// Create a new *BusinessCalendar* object from a JSON configuration.
    ///
    /// Parameters
    /// ----------
    /// json: str
    ///     The serialized calendar, with keys *working_hours*, *default_hours* and *holidays*.
    ///
    /// Returns
    /// -------
    /// BusinessCalendar
    #[classmethod]
    #[pyo3(name = "from_json")]
    fn from_json_py(_cls: &Bound<'_, PyType>, json: &str) -> PyResult<Self> {
        match BusinessCalendar::from_json(json) {
            Ok(v) => Ok(v),
            Err(e) => Err(PyValueError::new_err(format!(
                "Could not create BusinessCalendar from given JSON.\n{}",
                e
            ))),
        }
    }

    /// The working hours of each weekday, *None* for days without work.
    #[getter(working_hours)]
    fn working_hours_py(&self) -> PyResult<IndexMap<String, Option<(f64, f64)>>> {
        Ok(self
            .working_hours
            .iter()
            .map(|(d, wh)| {
                let v = (!wh.is_empty()).then(|| (wh.begins_at(), wh.ends_at()));
                (d.to_string(), v)
            })
            .collect())
    }

    /// A list of specifically provided non-working days.
    #[getter(holidays)]
    fn holidays_py(&self) -> PyResult<Vec<NaiveDate>> {
        Ok(self.holidays.sorted())
    }

    /// Return the number of working hours between two dates or datetimes.
    ///
    /// Parameters
    /// ----------
    /// start: date or datetime
    ///     A date counts from the beginning of the day.
    /// end: date or datetime
    ///     A date counts to the end of the day.
    ///
    /// Returns
    /// -------
    /// float
    #[pyo3(name = "working_hours_between")]
    fn working_hours_between_py(&self, start: DateOrTime, end: DateOrTime) -> f64 {
        self.working_hours_between(&start, &end)
    }

    /// Return the number of working days between two dates or datetimes.
    ///
    /// Parameters
    /// ----------
    /// start: date or datetime
    ///     A date counts from the beginning of the day.
    /// end: date or datetime
    ///     A date counts to the end of the day.
    ///
    /// Returns
    /// -------
    /// float
    #[pyo3(name = "working_days_between")]
    fn working_days_between_py(&self, start: DateOrTime, end: DateOrTime) -> f64 {
        self.working_days_between(&start, &end)
    }

    /// Add working hours to a date or datetime.
    ///
    /// Parameters
    /// ----------
    /// date: date or datetime
    ///     The starting point. A date starts at the beginning of the day.
    /// hours: float
    ///     The number of working hours to add. *Raises* if negative.
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "add_working_hours")]
    fn add_working_hours_py(&self, date: DateOrTime, hours: f64) -> PyResult<NaiveDateTime> {
        Ok(self.add_working_hours(&date, hours)?)
    }

    /// Add working days to a date or datetime.
    ///
    /// Parameters
    /// ----------
    /// date: date or datetime
    ///     The starting point.
    /// days: float
    ///     The number of working days to add, each the length of the longest working day.
    ///     *Raises* if negative.
    ///
    /// Returns
    /// -------
    /// date or datetime, matching the type of ``date``.
    #[pyo3(name = "add_working_days")]
    fn add_working_days_py(&self, date: DateOrTime, days: f64) -> PyResult<DateOrTime> {
        Ok(self.add_working_days(&date, days)?)
    }

    /// Snap to the beginning of the next working period unless already within working hours.
    #[pyo3(name = "roll_forward")]
    fn roll_forward_py(&self, date: DateOrTime) -> PyResult<DateOrTime> {
        Ok(self.roll_forward(&date)?)
    }

    /// Snap to the end of the previous working period unless already within working hours.
    #[pyo3(name = "roll_backward")]
    fn roll_backward_py(&self, date: DateOrTime) -> PyResult<DateOrTime> {
        Ok(self.roll_backward(&date)?)
    }

    /// Return the next working day, or the beginning of the next working period for a datetime.
    #[pyo3(name = "next_working_day")]
    fn next_working_day_py(&self, date: DateOrTime) -> PyResult<DateOrTime> {
        Ok(self.next_working_day(&date)?)
    }

    /// Return the previous working day, or the end of the previous working period for a datetime.
    #[pyo3(name = "prev_working_day")]
    fn prev_working_day_py(&self, date: DateOrTime) -> PyResult<DateOrTime> {
        Ok(self.prev_working_day(&date)?)
    }

    /// Return the working hours of a date as a fraction of the longest working day.
    #[pyo3(name = "working_hours_percentage")]
    fn working_hours_percentage_py(&self, date: DateOrTime) -> f64 {
        self.working_hours_percentage(&date.date())
    }

    /// Return whether the date is a holiday.
    #[pyo3(name = "is_holiday")]
    fn is_holiday_py(&self, date: DateOrTime) -> bool {
        self.holiday(&date)
    }

    /// Return a list of working dates in a range.
    ///
    /// Parameters
    /// ----------
    /// start: date
    ///     The start date of the range, inclusive.
    /// end: date
    ///     The end date of the range, inclusive.
    ///
    /// Returns
    /// -------
    /// list[date]
    #[pyo3(name = "working_date_range")]
    fn working_date_range_py(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        self.working_date_range(&start, &end)
    }

    // JSON
    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match self.to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `BusinessCalendar` to JSON.",
            )),
        }
    }

    // Equality
    fn __eq__(&self, other: BusinessCalendar) -> bool {
        *self == other
    }

    fn __repr__(&self) -> String {
        format!("<workhours.BusinessCalendar at {:p}>", self)
    }
}
