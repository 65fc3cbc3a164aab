//! Clock and timestamp rendering
//!
//! Every record is stamped from a [`Clock`] owned by the logger. The same
//! instant drives both the rendered time of day and the daily rotation check,
//! so tests can move the calendar with a [`ManualClock`].

use chrono::{DateTime, Duration, Local, NaiveDate};
use parking_lot::Mutex;

/// `HH:MM:SS.micro` as printed on every line.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S%.6f";

/// Log file name pattern, zero padded: `DD-MM-YYYY.log`.
pub const LOG_FILE_FORMAT: &str = "%d-%m-%Y.log";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to.
///
/// # Examples
///
/// ```
/// use rust_dual_logger::core::timestamp::{Clock, ManualClock};
/// use chrono::{Duration, Local, TimeZone};
///
/// let start = Local.with_ymd_and_hms(2025, 1, 8, 23, 59, 0).unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance(Duration::minutes(2));
/// assert_eq!(clock.now().format("%d").to_string(), "09");
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }
}

#[must_use]
pub fn time_of_day(datetime: &DateTime<Local>) -> String {
    datetime.format(TIME_OF_DAY_FORMAT).to_string()
}

#[must_use]
pub fn log_file_name(date: NaiveDate) -> String {
    date.format(LOG_FILE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + Duration::microseconds(123456)
    }

    #[test]
    fn test_time_of_day_has_microseconds() {
        assert_eq!(time_of_day(&fixed_datetime()), "10:30:45.123456");
    }

    #[test]
    fn test_log_file_name_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 8).expect("valid date");
        assert_eq!(log_file_name(date), "08-01-2025.log");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        assert_eq!(log_file_name(date), "31-12-2024.log");
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(fixed_datetime());
        assert_eq!(clock.now(), fixed_datetime());

        clock.advance(Duration::days(1));
        assert_eq!(clock.now().date_naive(), NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());

        clock.set(fixed_datetime());
        assert_eq!(clock.now(), fixed_datetime());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
