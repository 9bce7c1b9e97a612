//! Error types for business calendar construction and arithmetic.

/// Error type for all fallible operations on a business calendar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a per-weekday working hours entry has an unsupported shape or range.
    #[error("working hours spec not supported: {spec}")]
    InvalidScheduleSpec {
        /// A rendering of the rejected entry.
        spec: String,
    },

    /// Returned when every weekday of the schedule is empty or zero-length.
    #[error("you must specify at least one working day in `working_hours`")]
    NoWorkingDayConfigured,

    /// Returned when a quantity passed to an add operation is negative or not a number.
    #[error("`{name}` must not be negative, got {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when traversal steps past the first or last representable date.
    #[error("date arithmetic out of range stepping from {date}")]
    DateOutOfRange {
        /// The last date reached.
        date: chrono::NaiveDate,
    },

    /// Returned when an input is neither a date nor a timestamp.
    #[error("type not supported, expected a date or a timestamp: {input:?}")]
    UnsupportedInstantType {
        /// The rejected input.
        input: String,
    },
}

impl CalendarError {
    pub(crate) fn invalid_spec(spec: impl std::fmt::Display) -> Self {
        CalendarError::InvalidScheduleSpec {
            spec: spec.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_schedule_spec() {
        let e = CalendarError::invalid_spec("\"weekends\"");
        assert_eq!(
            e.to_string(),
            "working hours spec not supported: \"weekends\""
        );
    }

    #[test]
    fn error_no_working_day() {
        let e = CalendarError::NoWorkingDayConfigured;
        assert!(e
            .to_string()
            .contains("must specify at least one working day"));
    }

    #[test]
    fn error_invalid_argument() {
        let e = CalendarError::InvalidArgument {
            name: "number_of_hours",
            value: -10.0,
        };
        assert_eq!(e.to_string(), "`number_of_hours` must not be negative, got -10");
    }

    #[test]
    fn error_unsupported_instant_type() {
        let e = CalendarError::UnsupportedInstantType {
            input: "tomorrow".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "type not supported, expected a date or a timestamp: \"tomorrow\""
        );
    }

    #[test]
    fn error_date_out_of_range() {
        let e = CalendarError::DateOutOfRange {
            date: chrono::NaiveDate::MAX,
        };
        assert!(e.to_string().starts_with("date arithmetic out of range stepping from"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
