//! Low-order solar ephemeris.
//!
//! Declination and equation of time from the U.S. Naval Observatory's
//! approximate solar coordinates, a handful of mean-element terms that stay
//! well inside a minute of time for civil purposes. No nutation, aberration
//! or ΔT corrections are applied.

#![allow(clippy::unreadable_literal)]

use crate::math::{asin_deg, atan2_deg, cos_deg, normalize_degrees, normalize_hours, sin_deg};
use crate::time::JulianDate;

/// Apparent solar coordinates needed for prayer time solving.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    /// Declination in degrees (positive north of the celestial equator)
    declination: f64,
    /// Equation of time in hours (apparent minus mean solar time)
    equation_of_time: f64,
}

impl SunPosition {
    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in hours.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Calculate the sun's declination and equation of time at a Julian date.
///
/// # Example
/// ```
/// use prayer_times::{sun, time::JulianDate};
///
/// let position = sun::sun_position(JulianDate::from_calendar(2024, 6, 21));
/// assert!((position.declination() - 23.44).abs() < 0.05);
/// ```
#[must_use]
pub fn sun_position(jd: JulianDate) -> SunPosition {
    let d = jd.days_since_j2000();

    let g = normalize_degrees(357.529 + 0.98560028 * d); // mean anomaly
    let q = normalize_degrees(280.459 + 0.98564736 * d); // mean longitude
    let l = normalize_degrees(q + 1.915 * sin_deg(g) + 0.020 * sin_deg(2.0 * g)); // ecliptic longitude

    let e = 23.439 - 0.00000036 * d; // obliquity of the ecliptic

    let declination = asin_deg(sin_deg(e) * sin_deg(l));
    let right_ascension = normalize_hours(atan2_deg(cos_deg(e) * sin_deg(l), cos_deg(l)) / 15.0);

    // q/15 and RA wrap independently at 24h around the March equinox
    let mut equation_of_time = q / 15.0 - right_ascension;
    if equation_of_time > 12.0 {
        equation_of_time -= 24.0;
    } else if equation_of_time < -12.0 {
        equation_of_time += 24.0;
    }

    SunPosition {
        declination,
        equation_of_time,
    }
}
