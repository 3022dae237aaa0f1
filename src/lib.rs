//! # Prayer Times
//!
//! Daily Islamic prayer times from a low-order solar ephemeris.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For a date, a location and a UTC offset the library computes nine times of day:
//! Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha and Midnight. Dhuhr is
//! solar noon; the other times are the moments the sun reaches the angle prescribed
//! by the selected calculation convention, or a fixed number of minutes after
//! another time.
//!
//! ## Features
//!
//! - The common calculation conventions (MWL, ISNA, Egypt, Makkah, Karachi, Tehran,
//!   Jafari, Morocco, Malaysia) plus fully custom parameters
//! - Shafii and Hanafi Asr
//! - Night-portion rules for higher latitudes
//! - Per-time tuning offsets and a Dhuhr delay
//! - 24-hour, 12-hour and fractional-hour output; times that do not occur render as `----`
//! - Thread-safe: [`Config`] and [`PrayerTimes`] are immutable `Copy` values
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable date and `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize and deserialize configuration and results
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! prayer-times = "0.1"
//!
//! # no_std with the numeric calendar API
//! prayer-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Calendar date
//! ```rust
//! use prayer_times::{prayer, CalculationMethod, Config, Location, Prayer, TimeFormat};
//!
//! let makkah = Location::new(21.4225, 39.8262, 0.0).unwrap();
//! let config = Config::new(CalculationMethod::Makkah);
//! let times = prayer::prayer_times(2024, 3, 15, &makkah, 3.0, &config).unwrap();
//!
//! for (prayer, _) in times.iter() {
//!     println!("{prayer:>8}: {}", times.format(prayer, TimeFormat::Time24));
//! }
//! assert_eq!(times.format(Prayer::Dhuhr, TimeFormat::Time24).to_string(), "12:29");
//! ```
//!
//! ### Timezone-aware (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use prayer_times::{prayer, AsrMethod, CalculationMethod, Config, Location, Prayer};
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2024-06-21T00:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let london = Location::new(51.5074, -0.1278, 11.0).unwrap();
//! let config = Config::new(CalculationMethod::Mwl).with_asr_method(AsrMethod::Hanafi);
//!
//! let times = prayer::prayer_times_for_datetime(&date, &london, &config).unwrap();
//! let asr = times.datetime(Prayer::Asr, date.date_naive(), *date.offset()).unwrap();
//! println!("Asr: {asr}");
//! # }
//! ```
//!
//! ## Conventions
//!
//! - Latitude is positive north, longitude positive east, elevation in meters
//! - Times are fractional hours of local civil time and may fall outside `[0, 24)`
//!   (Midnight after 00:00 reads e.g. `24.5`)
//! - A time the sun never reaches on that day is NaN; with the default
//!   [`HighLatitudeRule::MidNight`] the twilight times are always filled in

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of configured values in tests
)]

// Public API exports
pub use crate::config::{Config, Imsak};
pub use crate::error::{Error, Result};
pub use crate::format::FormattedTime;
pub use crate::method::{CalculationMethod, MethodParams, MidnightMode, Twilight};
#[cfg(feature = "chrono")]
pub use crate::prayer::{prayer_times_for_date, prayer_times_for_datetime};
pub use crate::prayer::{Observer, formatted_prayer_times, prayer_times};
pub use crate::types::{AsrMethod, HighLatitudeRule, Location, Prayer, PrayerTimes, TimeFormat};

// Calculation modules
pub mod high_latitude;
pub mod prayer;
pub mod sun;

// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod method;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_date_and_datetime_entry_points_agree() {
        let location = Location::new(40.7128, -74.006, 10.0).unwrap();
        let config = Config::new(CalculationMethod::Isna);

        let by_numbers = prayer_times(2024, 7, 4, &location, -4.0, &config).unwrap();
        let by_date = prayer_times_for_date(
            NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            &location,
            -4.0,
            &config,
        )
        .unwrap();
        let by_datetime = prayer_times_for_datetime(
            &"2024-07-04T09:30:00-04:00"
                .parse::<DateTime<FixedOffset>>()
                .unwrap(),
            &location,
            &config,
        )
        .unwrap();

        assert_eq!(by_numbers, by_date);
        assert_eq!(by_numbers, by_datetime);
    }

    #[test]
    fn test_utc_datetime_uses_zero_offset() {
        let location = Location::new(51.4769, 0.0, 0.0).unwrap();
        let config = Config::default();

        let utc = Utc.with_ymd_and_hms(2024, 12, 21, 12, 0, 0).unwrap();
        let times = prayer_times_for_datetime(&utc, &location, &config).unwrap();
        let expected = prayer_times(2024, 12, 21, &location, 0.0, &config).unwrap();
        assert_eq!(times, expected);

        // Greenwich noon in late December is a couple of minutes before 12:00
        assert!((times[Prayer::Dhuhr] - 12.0).abs() < 3.0 / 60.0);
    }
}
