//! This is the documentation for workhours-rs
//!
//! Business-hours-aware date and time arithmetic: the working time between two points in time,
//! and the point reached after adding working time, under a weekly schedule of working hours and
//! a set of holidays. See [`calendars`].

#[cfg(test)]
mod tests;

pub mod json;

pub mod calendars;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Calendars
    m.add_class::<calendars::BusinessCalendar>()?;

    Ok(())
}
