//! Rendering of fractional hours as clock text.

use crate::TimeFormat;
use crate::math::{floor, normalize_hours};
use core::fmt;

/// Text shown for a time that does not occur (or is otherwise unavailable).
pub const INVALID_TIME: &str = "----";

/// A time of day paired with the format it renders in.
///
/// Implements [`Display`](fmt::Display), so it works without an allocator; use
/// `to_string()` when a `String` is needed.
///
/// # Example
/// ```
/// # use prayer_times::{format::FormattedTime, TimeFormat};
/// assert_eq!(FormattedTime::new(5.5, TimeFormat::Time24).to_string(), "05:30");
/// assert_eq!(FormattedTime::new(5.5, TimeFormat::Time12).to_string(), "5:30 am");
/// assert_eq!(FormattedTime::new(5.5, TimeFormat::Time12NoSuffix).to_string(), "5:30");
/// assert_eq!(FormattedTime::new(5.5, TimeFormat::Floating).to_string(), "5.5");
/// assert_eq!(FormattedTime::new(f64::NAN, TimeFormat::Time24).to_string(), "----");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormattedTime {
    hours: f64,
    format: TimeFormat,
}

impl FormattedTime {
    /// Pairs raw fractional hours with a format.
    #[must_use]
    pub const fn new(hours: f64, format: TimeFormat) -> Self {
        Self { hours, format }
    }

    /// Gets the raw fractional hours.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    /// Gets the output format.
    #[must_use]
    pub const fn format(&self) -> TimeFormat {
        self.format
    }

    /// Whether this renders as [`INVALID_TIME`].
    ///
    /// Negative values, NaN (the sun never reaches the required angle) and
    /// infinities all count as unavailable.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !(self.hours.is_finite() && self.hours >= 0.0)
    }

    /// Clock hour (0-23) and minute, rounded to the nearest minute.
    ///
    /// `None` for invalid times.
    #[must_use]
    pub fn hour_minute(&self) -> Option<(u32, u32)> {
        if self.is_invalid() {
            return None;
        }
        // add half a minute so truncation rounds to nearest
        let time = normalize_hours(self.hours + 0.5 / 60.0);
        let hours = floor(time);
        let minutes = floor((time - hours) * 60.0);
        Some((hours as u32, minutes as u32))
    }
}

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((hours, minutes)) = self.hour_minute() else {
            return f.write_str(INVALID_TIME);
        };

        match self.format {
            TimeFormat::Floating => write!(f, "{}", self.hours),
            TimeFormat::Time24 => write!(f, "{hours:02}:{minutes:02}"),
            TimeFormat::Time12 | TimeFormat::Time12NoSuffix => {
                let suffix = if hours >= 12 { " pm" } else { " am" };
                let hours = (hours + 11) % 12 + 1;
                write!(f, "{hours}:{minutes:02}")?;
                if self.format == TimeFormat::Time12 {
                    f.write_str(suffix)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(hours: f64, format: TimeFormat) -> String {
        FormattedTime::new(hours, format).to_string()
    }

    #[test]
    fn test_24_hour() {
        assert_eq!(render(5.5, TimeFormat::Time24), "05:30");
        assert_eq!(render(0.0, TimeFormat::Time24), "00:00");
        assert_eq!(render(13.25, TimeFormat::Time24), "13:15");
        assert_eq!(render(24.5, TimeFormat::Time24), "00:30");
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        assert_eq!(render(12.0 + 29.4 / 60.0, TimeFormat::Time24), "12:29");
        assert_eq!(render(12.0 + 29.6 / 60.0, TimeFormat::Time24), "12:30");
        // rounding can carry over midnight
        assert_eq!(render(23.0 + 59.8 / 60.0, TimeFormat::Time24), "00:00");
    }

    #[test]
    fn test_12_hour() {
        assert_eq!(render(5.5, TimeFormat::Time12), "5:30 am");
        assert_eq!(render(0.25, TimeFormat::Time12), "12:15 am");
        assert_eq!(render(12.0, TimeFormat::Time12), "12:00 pm");
        assert_eq!(render(18.75, TimeFormat::Time12), "6:45 pm");
        assert_eq!(render(18.75, TimeFormat::Time12NoSuffix), "6:45");
        assert_eq!(render(5.5, TimeFormat::Time12NoSuffix), "5:30");
    }

    #[test]
    fn test_floating_is_unrounded() {
        assert_eq!(render(5.5, TimeFormat::Floating), "5.5");
        assert_eq!(render(12.125, TimeFormat::Floating), "12.125");
        assert_eq!(render(24.5, TimeFormat::Floating), "24.5");
    }

    #[test]
    fn test_invalid_times_use_sentinel_in_every_format() {
        for format in [
            TimeFormat::Time24,
            TimeFormat::Time12,
            TimeFormat::Time12NoSuffix,
            TimeFormat::Floating,
        ] {
            assert_eq!(render(-0.1, format), INVALID_TIME);
            assert_eq!(render(f64::NAN, format), INVALID_TIME);
            assert_eq!(render(f64::INFINITY, format), INVALID_TIME);
        }
    }

    #[test]
    fn test_hour_minute() {
        assert_eq!(FormattedTime::new(5.5, TimeFormat::Time24).hour_minute(), Some((5, 30)));
        assert_eq!(FormattedTime::new(-1.0, TimeFormat::Time24).hour_minute(), None);
    }
}
