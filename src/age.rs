//! age.rs
//!
//! Exact age decomposition in the form:
//!     "X years, Y months, Z days" plus the elapsed hours/minutes/seconds
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! manually.
//!
//! The calendar breakdown and the elapsed-time figures are computed
//! independently:
//!   • years/months/days come from the calendar fields of both dates
//!   • total_days and the sub-day remainder come from elapsed milliseconds
//!     between two instants, so a UTC offset change in between (DST) shows
//!     up in them but not in the calendar fields

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};

pub const MS_PER_SECOND: i64 = 1000;
pub const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
pub const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
pub const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

/// Calendar age plus the time elapsed since midnight of the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_days: i64,
}

/// Returns the calendar (years, months, days) between two dates
///
/// Only one month is borrowed, and its length is that of the month before
/// `today`. Right after a short February this leaves `days` negative
/// (Jan 31 → Mar 1 is `(0, 1, -2)`); callers rely on that exact rule.
pub fn calendar_diff(birthdate: NaiveDate, today: NaiveDate) -> (i32, i32, i32) {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `today`.
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        // Add days from the previous month (28–31 depending on month & leap year)
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months, days)
}

/// UTC instant of midnight on `birthdate` in the zone of `now`.
///
/// Ambiguous midnights take the earlier instant; a midnight skipped by a
/// DST jump falls back to the current offset.
pub fn birth_instant<Tz: TimeZone>(birthdate: NaiveDate, now: &DateTime<Tz>) -> NaiveDateTime {
    let midnight = birthdate.and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.naive_utc(),
        None => {
            let offset = now.offset().fix().local_minus_utc();
            midnight - TimeDelta::seconds(i64::from(offset))
        }
    }
}

/// Decomposes the time between local midnight of `birthdate` and `now`.
pub fn exact_age<Tz: TimeZone>(birthdate: NaiveDate, now: &DateTime<Tz>) -> ExactAge {
    let (years, months, days) = calendar_diff(birthdate, now.date_naive());

    let diff_ms = (now.naive_utc() - birth_instant(birthdate, now)).num_milliseconds();
    let total_days = diff_ms.div_euclid(MS_PER_DAY);
    let remaining_ms = diff_ms.rem_euclid(MS_PER_DAY);

    ExactAge {
        years,
        months,
        days,
        hours: remaining_ms / MS_PER_HOUR,
        minutes: (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        total_days,
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        date(y, m, d).and_hms_opt(h, min, s).unwrap().and_utc()
    }

    /// UTC+1 in winter, UTC+2 from April through September.
    #[derive(Debug, Clone, Copy)]
    struct SummerTime;

    impl SummerTime {
        fn offset_for(month: u32) -> FixedOffset {
            let hours = if (4..=9).contains(&month) { 2 } else { 1 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl TimeZone for SummerTime {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            SummerTime
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_for(local.month()))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_for(local.month()))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_for(utc.month())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_for(utc.month())
        }
    }

    #[test]
    fn no_borrow_needed() {
        assert_eq!(calendar_diff(date(1992, 6, 14), date(2026, 10, 19)), (34, 4, 5));
    }

    #[test]
    fn borrows_days_from_february_and_months_from_year() {
        assert_eq!(calendar_diff(date(1990, 8, 25), date(2026, 3, 10)), (35, 6, 13));
    }

    #[test]
    fn january_borrows_from_previous_december() {
        assert_eq!(calendar_diff(date(2000, 12, 20), date(2026, 1, 5)), (25, 0, 16));
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(calendar_diff(date(2020, 2, 29), date(2024, 3, 1)), (4, 0, 1));
    }

    #[test]
    fn short_february_leaves_negative_days() {
        assert_eq!(calendar_diff(date(2026, 1, 31), date(2026, 3, 1)), (0, 1, -2));
        assert_eq!(calendar_diff(date(2024, 1, 31), date(2024, 3, 1)), (0, 1, -1));
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(calendar_diff(date(2001, 5, 5), date(2001, 5, 5)), (0, 0, 0));
    }

    #[test]
    fn sub_day_remainder_comes_from_elapsed_time() {
        let age = exact_age(date(2026, 10, 18), &at(2026, 10, 19, 15, 30, 42));
        assert_eq!(age.years, 0);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 1);
        assert_eq!(age.total_days, 1);
        assert_eq!((age.hours, age.minutes, age.seconds), (15, 30, 42));
    }

    #[test]
    fn total_days_counts_every_elapsed_day() {
        let age = exact_age(date(2000, 1, 1), &at(2001, 1, 1, 0, 0, 0));
        // 2000 is a leap year
        assert_eq!(age.total_days, 366);
        assert_eq!((age.years, age.months, age.days), (1, 0, 0));
    }

    #[test]
    fn fixed_offset_matches_utc() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = zone
            .from_local_datetime(&date(2026, 10, 19).and_hms_opt(15, 30, 42).unwrap())
            .unwrap();
        let age = exact_age(date(2026, 10, 18), &now);
        assert_eq!(age.total_days, 1);
        assert_eq!((age.hours, age.minutes, age.seconds), (15, 30, 42));
    }

    #[test]
    fn offset_change_shows_in_elapsed_time_only() {
        let now = SummerTime
            .from_local_datetime(&date(2026, 7, 1).and_hms_opt(0, 30, 0).unwrap())
            .unwrap();
        let age = exact_age(date(2026, 1, 1), &now);

        assert_eq!((age.years, age.months, age.days), (0, 6, 0));
        assert_eq!(age.total_days, 180);
        assert_eq!((age.hours, age.minutes, age.seconds), (23, 30, 0));
    }

    #[test]
    fn birth_midnight_resolves_in_the_zone_of_now() {
        let now = SummerTime
            .from_local_datetime(&date(2026, 7, 1).and_hms_opt(0, 0, 0).unwrap())
            .unwrap();
        assert_eq!(
            birth_instant(date(2026, 1, 1), &now),
            date(2025, 12, 31).and_hms_opt(23, 0, 0).unwrap()
        );
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
