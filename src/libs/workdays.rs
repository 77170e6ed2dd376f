//! Working-day calendar and the fixed daily entry window.
//!
//! A working day is any date from Monday to Friday. Each working day gets
//! one entry window, from the workday start to the workday end on that same
//! calendar day, expressed in local time and sent to the API in UTC.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use clockfill::libs::workdays::{working_days, WorkHours};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let days = working_days(start, end); // [2024-03-01, 2024-03-04]
//!
//! let window = WorkHours::default().window(days[0])?;
//! println!("{} - {}", window.start_rfc3339(), window.end_rfc3339());
//! ```

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};

/// Workday start used when no configuration overrides it.
pub const DEFAULT_START: &str = "09:00";

/// Workday end used when no configuration overrides it.
pub const DEFAULT_END: &str = "16:30";

const TIME_FORMAT: &str = "%H:%M";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Daily start and end time of a standard workday.
///
/// `start` is always strictly earlier than `end`; constructors reject
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One day's entry window, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WorkHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            msg_bail_anyhow!(Message::InvalidWorkHours(
                start.format(TIME_FORMAT).to_string(),
                end.format(TIME_FORMAT).to_string()
            ));
        }
        Ok(Self { start, end })
    }

    /// Builds work hours from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_time(start)?, parse_time(end)?)
    }

    /// Entry window for `date` in the local time zone.
    pub fn window(&self, date: NaiveDate) -> Result<WorkWindow> {
        self.window_in(&Local, date)
    }

    /// Entry window for `date` with wall-clock times interpreted in `tz`.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    /// A time skipped by a DST jump is an error.
    pub fn window_in<Tz: TimeZone>(&self, tz: &Tz, date: NaiveDate) -> Result<WorkWindow> {
        Ok(WorkWindow {
            start: to_utc(tz, date.and_time(self.start))?,
            end: to_utc(tz, date.and_time(self.end))?,
        })
    }
}

impl Default for WorkHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(16, 30, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl WorkWindow {
    pub fn start_rfc3339(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_rfc3339(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn to_utc<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| msg_error_anyhow!(Message::LocalTimeUnavailable(local.format("%Y-%m-%d %H:%M").to_string())))
}

/// Parses a `HH:MM` wall-clock time.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(value.to_string())))
}

pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the working days between `start` and `end`, both inclusive, in ascending order.
///
/// An `end` earlier than `start` yields an empty list.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).filter(|date| is_working_day(*date)).collect()
}

/// Date range from the first of the month up to today.
///
/// Today only counts once the workday has started: before `workday_start`
/// the range ends yesterday, and on the first of the month it is empty.
pub fn month_to_date(now: NaiveDateTime, workday_start: NaiveTime) -> (NaiveDate, NaiveDate) {
    let today = now.date();
    let first = today - Duration::days(today.day0() as i64);
    let end = if now.time() >= workday_start { today } else { today - Duration::days(1) };
    (first, end)
}
