//! Core data types for prayer time calculations.

use crate::error::{check_coordinates, check_elevation};
use crate::format::FormattedTime;
use crate::math::hour_difference;
use crate::{Error, Result};

/// Juristic convention for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsrMethod {
    /// Shafii, Maliki, Hanbali: shadow equals object length (plus noon shadow)
    #[default]
    Shafii,
    /// Hanafi: shadow equals twice the object length (plus noon shadow)
    Hanafi,
}

impl AsrMethod {
    /// Shadow length multiplier used in the Asr angle.
    #[must_use]
    pub const fn shadow_factor(self) -> f64 {
        match self {
            Self::Shafii => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

impl TryFrom<u8> for AsrMethod {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Shafii),
            1 => Ok(Self::Hanafi),
            _ => Err(Error::unknown_identifier("Asr method", value)),
        }
    }
}

/// Rule for repairing night times at higher latitudes.
///
/// Near and beyond the polar circles the twilight angles for Fajr and Isha can be
/// reached very late, very early, or not at all. Each rule caps how far those
/// times may lie from sunrise or sunset, as a portion of the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeRule {
    /// No adjustment
    None,
    /// Half of the night
    #[default]
    MidNight,
    /// One seventh of the night
    OneSeventh,
    /// Twilight angle / 60 of the night
    AngleBased,
}

impl TryFrom<u8> for HighLatitudeRule {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::MidNight),
            2 => Ok(Self::OneSeventh),
            3 => Ok(Self::AngleBased),
            _ => Err(Error::unknown_identifier("high latitude rule", value)),
        }
    }
}

/// Output representation of a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeFormat {
    /// `HH:MM`
    #[default]
    Time24,
    /// `h:MM am` / `h:MM pm`
    Time12,
    /// `h:MM`
    Time12NoSuffix,
    /// Fractional hours, unrounded
    Floating,
}

impl TryFrom<u8> for TimeFormat {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Time24),
            1 => Ok(Self::Time12),
            2 => Ok(Self::Time12NoSuffix),
            3 => Ok(Self::Floating),
            _ => Err(Error::unknown_identifier("time format", value)),
        }
    }
}

/// The nine times of a prayer day, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    /// Start of the pre-dawn fast
    Imsak,
    /// Dawn
    Fajr,
    /// Sunrise
    Sunrise,
    /// Solar noon
    Dhuhr,
    /// Afternoon
    Asr,
    /// Sunset
    Sunset,
    /// Evening
    Maghrib,
    /// Night
    Isha,
    /// Middle of the night
    Midnight,
}

impl Prayer {
    /// All slots in output order.
    pub const ALL: [Self; 9] = [
        Self::Imsak,
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
        Self::Midnight,
    ];

    /// Position of this slot in [`PrayerTimes`] and offset arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English name of the slot.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Midnight => "Midnight",
        }
    }
}

impl core::fmt::Display for Prayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Observer position on the Earth's surface.
///
/// # Example
/// ```
/// # use prayer_times::Location;
/// let makkah = Location::new(21.4225, 39.8262, 277.0).unwrap();
/// assert_eq!(makkah.latitude(), 21.4225);
/// assert!(Location::new(95.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LocationFields"))]
pub struct Location {
    /// Latitude in degrees, positive north
    latitude: f64,
    /// Longitude in degrees, positive east
    longitude: f64,
    /// Elevation above sea level in meters
    elevation: f64,
}

impl Location {
    /// Creates a location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation` for
    /// out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// Unchecked wire form of [`Location`]; deserialization goes through [`Location::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LocationFields {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LocationFields> for Location {
    type Error = Error;

    fn try_from(fields: LocationFields) -> Result<Self> {
        Self::new(fields.latitude, fields.longitude, fields.elevation)
    }
}

/// The nine computed times of one day, as fractional hours of local civil time.
///
/// Values are not reduced to a single day: a Midnight after 00:00 reads as e.g.
/// `24.5`, and a time that falls on the previous evening is negative. A time
/// that does not occur at the location (the sun never reaches the required
/// angle) is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerTimes([f64; 9]);

impl PrayerTimes {
    /// Wraps nine fractional-hour values in [`Prayer::ALL`] order.
    #[must_use]
    pub const fn from_hours(hours: [f64; 9]) -> Self {
        Self(hours)
    }

    /// Gets the raw hours of one slot.
    #[must_use]
    pub const fn get(&self, prayer: Prayer) -> f64 {
        self.0[prayer.index()]
    }

    /// Returns a copy with one slot replaced.
    #[must_use]
    pub const fn with(mut self, prayer: Prayer, hours: f64) -> Self {
        self.0[prayer.index()] = hours;
        self
    }

    /// Returns a copy with `f` applied to every slot.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Prayer, f64) -> f64) -> Self {
        let mut hours = self.0;
        for prayer in Prayer::ALL {
            hours[prayer.index()] = f(prayer, hours[prayer.index()]);
        }
        Self(hours)
    }

    /// All raw hours in [`Prayer::ALL`] order.
    #[must_use]
    pub const fn hours(&self) -> [f64; 9] {
        self.0
    }

    /// Iterates over `(slot, hours)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Formats one slot.
    #[must_use]
    pub const fn format(&self, prayer: Prayer, format: TimeFormat) -> FormattedTime {
        FormattedTime::new(self.get(prayer), format)
    }

    /// Formats all slots.
    #[must_use]
    pub fn format_all(&self, format: TimeFormat) -> [FormattedTime; 9] {
        self.0.map(|hours| FormattedTime::new(hours, format))
    }

    /// Total clock time from Imsak to Midnight, walking forward around the clock.
    ///
    /// NaN if any slot is NaN.
    #[must_use]
    pub fn span_hours(&self) -> f64 {
        self.0
            .windows(2)
            .map(|pair| hour_difference(pair[0], pair[1]))
            .sum()
    }

    /// Whether the nine times are in order with at most one pass through 00:00.
    ///
    /// Walking forward around the clock from Imsak to Midnight must cover less
    /// than a full day; an out-of-order slot forces the walk past a second
    /// midnight and is detected.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.span_hours() < 24.0
    }

    /// Resolves one slot to a calendar datetime.
    ///
    /// `date` is the day the times were computed for and `offset` the UTC offset
    /// they were computed in. Hours outside `[0, 24)` land on the previous or
    /// next day. Returns `None` for a time that does not occur.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn datetime(
        &self,
        prayer: Prayer,
        date: chrono::NaiveDate,
        offset: chrono::FixedOffset,
    ) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        use chrono::TimeZone;

        let hours = self.get(prayer);
        if !hours.is_finite() {
            return None;
        }
        let millis = crate::math::floor(hours * 3_600_000.0 + 0.5) as i64;
        let midnight = offset
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .single()?;
        midnight.checked_add_signed(chrono::Duration::milliseconds(millis))
    }
}

impl core::ops::Index<Prayer> for PrayerTimes {
    type Output = f64;

    fn index(&self, prayer: Prayer) -> &f64 {
        &self.0[prayer.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrayerTimes {
        PrayerTimes::from_hours([4.5, 4.67, 6.0, 12.2, 15.5, 18.4, 18.4, 19.9, 24.2])
    }

    #[test]
    fn test_enum_identifiers() {
        assert_eq!(AsrMethod::try_from(0), Ok(AsrMethod::Shafii));
        assert_eq!(AsrMethod::try_from(1), Ok(AsrMethod::Hanafi));
        assert!(AsrMethod::try_from(2).is_err());

        assert_eq!(HighLatitudeRule::try_from(0), Ok(HighLatitudeRule::None));
        assert_eq!(HighLatitudeRule::try_from(3), Ok(HighLatitudeRule::AngleBased));
        assert!(HighLatitudeRule::try_from(4).is_err());

        assert_eq!(TimeFormat::try_from(2), Ok(TimeFormat::Time12NoSuffix));
        assert!(TimeFormat::try_from(4).is_err());
    }

    #[test]
    fn test_shadow_factor() {
        assert_eq!(AsrMethod::Shafii.shadow_factor(), 1.0);
        assert_eq!(AsrMethod::Hanafi.shadow_factor(), 2.0);
    }

    #[test]
    fn test_prayer_index_matches_order() {
        for (i, prayer) in Prayer::ALL.into_iter().enumerate() {
            assert_eq!(prayer.index(), i);
        }
        assert_eq!(Prayer::Midnight.to_string(), "Midnight");
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new(21.4225, 39.8262, 0.0).is_ok());
        assert_eq!(
            Location::new(-91.0, 0.0, 0.0),
            Err(Error::invalid_latitude(-91.0))
        );
        assert_eq!(
            Location::new(0.0, 200.0, 0.0),
            Err(Error::invalid_longitude(200.0))
        );
        assert!(Location::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_location_is_validated() {
        use serde::Deserialize;
        use serde::de::value::{Error as ValueError, MapDeserializer};

        let fields = |latitude: f64| {
            MapDeserializer::<_, ValueError>::new(
                [("latitude", latitude), ("longitude", 39.8262), ("elevation", 277.0)].into_iter(),
            )
        };

        assert_eq!(
            Location::deserialize(fields(21.4225)).unwrap(),
            Location::new(21.4225, 39.8262, 277.0).unwrap()
        );
        let error = Location::deserialize(fields(95.0)).unwrap_err();
        assert_eq!(error.to_string(), Error::invalid_latitude(95.0).to_string());
    }

    #[test]
    fn test_with_and_map_do_not_alias() {
        let original = sample();
        let changed = original.with(Prayer::Dhuhr, 13.0);
        assert_eq!(original[Prayer::Dhuhr], 12.2);
        assert_eq!(changed[Prayer::Dhuhr], 13.0);

        let shifted = original.map(|_, h| h + 1.0);
        assert_eq!(shifted.get(Prayer::Imsak), 5.5);
        assert_eq!(original.get(Prayer::Imsak), 4.5);
    }

    #[test]
    fn test_chronological_with_midnight_wrap() {
        let times = sample();
        assert!(times.is_chronological());
        assert!((times.span_hours() - 19.7).abs() < 1e-9);

        // Isha after 00:00 is still a single wrap
        let late_isha = times.with(Prayer::Isha, 0.5).with(Prayer::Midnight, 1.2);
        assert!(late_isha.is_chronological());
    }

    #[test]
    fn test_out_of_order_is_detected() {
        let swapped = sample().with(Prayer::Sunrise, 4.0);
        assert!(!swapped.is_chronological());

        let missing = sample().with(Prayer::Isha, f64::NAN);
        assert!(!missing.is_chronological());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_datetime_resolution() {
        use chrono::{FixedOffset, NaiveDate, Timelike};

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let times = sample().with(Prayer::Imsak, -0.5);

        let dhuhr = times.datetime(Prayer::Dhuhr, date, offset).unwrap();
        assert_eq!(dhuhr.date_naive(), date);
        assert_eq!((dhuhr.hour(), dhuhr.minute()), (12, 12));

        let midnight = times.datetime(Prayer::Midnight, date, offset).unwrap();
        assert_eq!(midnight.date_naive(), date.succ_opt().unwrap());
        assert_eq!((midnight.hour(), midnight.minute()), (0, 12));

        let imsak = times.datetime(Prayer::Imsak, date, offset).unwrap();
        assert_eq!(imsak.date_naive(), date.pred_opt().unwrap());
        assert_eq!((imsak.hour(), imsak.minute()), (23, 30));

        let missing = times.with(Prayer::Isha, f64::NAN);
        assert!(missing.datetime(Prayer::Isha, date, offset).is_none());
    }
}
