//! Night-time corrections for higher latitudes.
//!
//! Far from the equator the sun may sink only a little below the horizon on
//! summer nights, so the Fajr and Isha angles are reached very close to
//! midnight or never. The adjustment caps the distance between each twilight
//! time and the sunrise/sunset it belongs to at a portion of the night.

use log::debug;

use crate::config::{Config, Imsak};
use crate::math::hour_difference;
use crate::{HighLatitudeRule, Prayer, PrayerTimes};

/// Isha angle assumed for the night portion when Isha is minutes-based.
const FALLBACK_ISHA_ANGLE: f64 = 18.0;

/// Maghrib angle assumed for the night portion when Maghrib is minutes-based.
const FALLBACK_MAGHRIB_ANGLE: f64 = 4.0;

/// Portion of the night a twilight time may lie away from sunrise or sunset.
///
/// # Example
/// ```
/// # use prayer_times::{high_latitude::night_portion, HighLatitudeRule};
/// assert_eq!(night_portion(HighLatitudeRule::MidNight, 18.0), 0.5);
/// assert_eq!(night_portion(HighLatitudeRule::AngleBased, 18.0), 0.3);
/// assert_eq!(night_portion(HighLatitudeRule::None, 18.0), 0.0);
/// ```
#[must_use]
pub fn night_portion(rule: HighLatitudeRule, angle: f64) -> f64 {
    match rule {
        HighLatitudeRule::None => 0.0,
        HighLatitudeRule::MidNight => 1.0 / 2.0,
        HighLatitudeRule::OneSeventh => 1.0 / 7.0,
        HighLatitudeRule::AngleBased => angle / 60.0,
    }
}

/// Which way a twilight time lies from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Before the anchor (dawn times, anchored at sunrise or Fajr)
    Before,
    /// After the anchor (dusk times, anchored at sunset)
    After,
}

/// Caps the gap between `time` and `anchor` at `portion` of the night.
///
/// A NaN time (the angle is never reached) always counts as exceeding the cap.
/// A time on the near side of its anchor has a negative gap and is kept.
fn clamp(time: f64, anchor: f64, portion: f64, night: f64, direction: Direction) -> f64 {
    let allowed = portion * night;
    let gap = match direction {
        Direction::Before => hour_difference(time, anchor),
        Direction::After => hour_difference(anchor, time),
    };
    let gap = if gap > 12.0 { gap - 24.0 } else { gap };

    if time.is_nan() || gap > allowed {
        match direction {
            Direction::Before => anchor - allowed,
            Direction::After => anchor + allowed,
        }
    } else {
        time
    }
}

/// Applies the configured high-latitude rule to civil-time prayer times.
///
/// Fajr is capped against sunrise, then Imsak against the adjusted Fajr (a
/// minutes-based Imsak is simply re-derived from it), Isha and Maghrib against
/// sunset. With [`HighLatitudeRule::None`], or on a polar day or night where
/// there is no night length to take a portion of, the times are returned
/// unchanged.
/// Midnight is not touched; it is derived afterwards.
#[must_use]
pub fn adjust(times: PrayerTimes, config: &Config) -> PrayerTimes {
    let rule = config.high_latitude_rule();
    if rule == HighLatitudeRule::None {
        return times;
    }

    let sunrise = times.get(Prayer::Sunrise);
    let sunset = times.get(Prayer::Sunset);
    let night = hour_difference(sunset, sunrise);
    if night.is_nan() {
        debug!("{rule:?} not applied: no sunrise or sunset");
        return times;
    }

    let params = config.params();

    let fajr = clamp(
        times.get(Prayer::Fajr),
        sunrise,
        night_portion(rule, params.fajr_angle),
        night,
        Direction::Before,
    );

    let imsak = match config.imsak() {
        Imsak::Minutes(minutes) => fajr - minutes / 60.0,
        Imsak::Angle(angle) => clamp(
            times.get(Prayer::Imsak),
            fajr,
            night_portion(rule, angle),
            night,
            Direction::Before,
        ),
    };

    let isha_angle = params.isha.angle().unwrap_or(FALLBACK_ISHA_ANGLE);
    let isha = clamp(
        times.get(Prayer::Isha),
        sunset,
        night_portion(rule, isha_angle),
        night,
        Direction::After,
    );

    let maghrib_angle = params.maghrib.angle().unwrap_or(FALLBACK_MAGHRIB_ANGLE);
    let maghrib = clamp(
        times.get(Prayer::Maghrib),
        sunset,
        night_portion(rule, maghrib_angle),
        night,
        Direction::After,
    );

    let adjusted = times
        .with(Prayer::Imsak, imsak)
        .with(Prayer::Fajr, fajr)
        .with(Prayer::Isha, isha)
        .with(Prayer::Maghrib, maghrib);

    for prayer in [Prayer::Imsak, Prayer::Fajr, Prayer::Maghrib, Prayer::Isha] {
        let (before, after) = (times.get(prayer), adjusted.get(prayer));
        if before.to_bits() != after.to_bits() {
            debug!("{rule:?} moved {prayer} from {before:.4} h to {after:.4} h");
        }
    }

    adjusted
}
