use crate::calendars::{BusinessCalendar, CalendarConfig, WeeklySchedule, WorkingHours};
use crate::json::JSON;

impl JSON for BusinessCalendar {}
impl JSON for CalendarConfig {}
impl JSON for WeeklySchedule {}
impl JSON for WorkingHours {}
