//! Footer clock and project card date formats.

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};

/// How often the footer clock redraws.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// `HH:MM:SS`, 24 hour.
#[must_use]
pub fn clock_time<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%H:%M:%S").to_string()
}

/// The footer clock reading for the local time zone.
#[must_use]
pub fn local_clock() -> String {
    clock_time(&Local::now())
}

/// Project card date, e.g. `Jan 2024`.
#[must_use]
pub fn month_year(at: &DateTime<Utc>) -> String {
    at.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn clock_is_24_hour_and_zero_padded() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(clock_time(&at), "07:05:03");
        let evening = Utc.with_ymd_and_hms(2024, 3, 9, 21, 45, 0).unwrap();
        assert_eq!(clock_time(&evening), "21:45:00");
    }

    #[test]
    fn clock_uses_the_given_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = Utc
            .with_ymd_and_hms(2024, 3, 9, 23, 0, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(clock_time(&at), "01:00:00");
    }

    #[test]
    fn card_dates_are_short_month_and_year() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(month_year(&at), "Jan 2024");
    }
}
