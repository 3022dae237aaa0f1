//! Julian date calculations.
//!
//! Converts proleptic Gregorian calendar dates to Julian Day numbers following
//! Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.

use crate::math::floor;
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Julian date of a calendar day, as a continuous day count.
///
/// Dates built with [`JulianDate::from_calendar`] refer to 0h UT of that day
/// and therefore end in `.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate(f64);

impl JulianDate {
    /// Wraps a raw Julian date.
    #[must_use]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Creates the Julian date for 0h UT on a Gregorian calendar date.
    ///
    /// No validation is performed: out-of-range days roll over arithmetically, so
    /// day 31 of a 30-day month yields the first of the following month.
    ///
    /// # Example
    /// ```
    /// # use prayer_times::time::JulianDate;
    /// let jd = JulianDate::from_calendar(2000, 1, 1);
    /// assert_eq!(jd.julian_date(), 2_451_544.5);
    /// ```
    #[must_use]
    pub fn from_calendar(year: i32, month: u32, day: u32) -> Self {
        Self(calculate_julian_date(year, month, day))
    }

    /// Creates the Julian date for 0h UT on a chrono calendar date.
    #[cfg(feature = "chrono")]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Self {
        Self::from_calendar(date.year(), date.month(), date.day())
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JDN
    }

    /// Shifts the date by a (fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

/// Calculates the Julian Date at 0h UT from Gregorian date components.
fn calculate_julian_date(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_specific_julian_dates() {
        // Unix epoch
        let unix_epoch = JulianDate::from_calendar(1970, 1, 1);
        assert!((unix_epoch.julian_date() - 2_440_587.5).abs() < EPSILON);

        // Y2K at 0h, half a day before J2000.0
        let y2k = JulianDate::from_calendar(2000, 1, 1);
        assert!((y2k.julian_date() - 2_451_544.5).abs() < EPSILON);
        assert!((y2k.days_since_j2000() + 0.5).abs() < EPSILON);

        // Meeus example 7.a
        let sputnik = JulianDate::from_calendar(1957, 10, 4);
        assert!((sputnik.julian_date() - 2_436_115.5).abs() < EPSILON);

        let date = JulianDate::from_calendar(2024, 3, 15);
        assert!((date.julian_date() - 2_460_384.5).abs() < EPSILON);
    }

    #[test]
    fn test_month_and_year_rollovers() {
        let pairs = [
            ((2024, 2, 28), (2024, 2, 29)),
            ((2024, 2, 29), (2024, 3, 1)),
            ((2023, 2, 28), (2023, 3, 1)),
            ((2023, 12, 31), (2024, 1, 1)),
            ((1900, 2, 28), (1900, 3, 1)),
            ((2000, 2, 29), (2000, 3, 1)),
        ];

        for ((y1, m1, d1), (y2, m2, d2)) in pairs {
            let first = JulianDate::from_calendar(y1, m1, d1);
            let next = JulianDate::from_calendar(y2, m2, d2);
            assert!(
                (next.julian_date() - first.julian_date() - 1.0).abs() < EPSILON,
                "{y1}-{m1}-{d1} -> {y2}-{m2}-{d2}"
            );
        }
    }

    #[test]
    fn test_invalid_day_rolls_over() {
        let april_31 = JulianDate::from_calendar(2024, 4, 31);
        let may_1 = JulianDate::from_calendar(2024, 5, 1);
        assert_eq!(april_31, may_1);
    }

    #[test]
    fn test_add_days() {
        let jd = JulianDate::from_calendar(2024, 6, 21).add_days(0.25);
        assert!((jd.julian_date() - 2_460_482.75).abs() < EPSILON);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_date_like() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            JulianDate::from_date_like(date),
            JulianDate::from_calendar(2024, 3, 15)
        );
    }

    proptest! {
        #[test]
        fn julian_date_advances_one_per_calendar_day(
            year in 1600_i32..2600,
            ordinal in 1_u32..=365,
        ) {
            let days = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
            let mut month = 1_u32;
            let mut day = ordinal;
            for len in days {
                if day <= len {
                    break;
                }
                day -= len;
                month += 1;
            }
            let (next_year, next_month, next_day) = if month == 12 && day == 31 {
                (year + 1, 1, 1)
            } else if day == days[(month - 1) as usize] {
                (year, month + 1, 1)
            } else {
                (year, month, day + 1)
            };

            let today = JulianDate::from_calendar(year, month, day);
            let tomorrow = JulianDate::from_calendar(next_year, next_month, next_day);
            let step = tomorrow.julian_date() - today.julian_date();
            // 1 day, or 2 when the skipped Feb 29 of a leap year lies in between
            prop_assert!(step == 1.0 || (step == 2.0 && month == 2 && day == 28));
        }
    }
}
