//! Prayer time calculation.
//!
//! Times are solved from the sun's declination and equation of time: Dhuhr is
//! solar noon, every twilight time is the moment the sun reaches a given angle
//! below (or, for Asr, above) the horizon. The day is computed as a chain of
//! pure stages, each taking and returning a [`PrayerTimes`] value:
//!
//! 1. solve the angle-based times in the observer's local solar frame,
//!    feeding each pass's results back as the times of day for the next;
//! 2. shift to civil time, apply the Dhuhr delay and the minutes-based
//!    Imsak, Maghrib and Isha;
//! 3. apply the high-latitude rule;
//! 4. derive Midnight;
//! 5. add the tuning offsets.

use log::{debug, trace};

use crate::config::{Config, Imsak};
use crate::error::{check_iterations, check_utc_offset};
use crate::format::FormattedTime;
use crate::high_latitude;
use crate::math::{acos_deg, acot_deg, cos_deg, hour_difference, normalize_hours, sin_deg, sqrt, tan_deg};
use crate::method::{MethodParams, MidnightMode, Twilight};
use crate::sun::{SunPosition, sun_position};
use crate::time::JulianDate;
use crate::{AsrMethod, Location, Prayer, PrayerTimes, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Offset, TimeZone};

/// Starting guesses in hours for the first solver pass.
const INITIAL_GUESS: [f64; 9] = [5.0, 5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0, 0.0];

/// Refraction plus solar semi-diameter at the horizon, in degrees.
const HORIZON_ANGLE: f64 = 0.833;

/// Horizon dip per square root meter of elevation, in degrees.
const DIP_PER_SQRT_METER: f64 = 0.0347;

/// An observer on a given day: the location, the civil UTC offset and the
/// Julian date of 0h local solar time.
///
/// This is the context every angle is solved in. Times passed to and returned
/// from its methods are hours of the observer's local solar day, before any
/// UTC offset is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    location: Location,
    utc_offset: f64,
    julian_date: JulianDate,
}

impl Observer {
    /// Creates the solving context for a calendar date.
    ///
    /// The calendar date is not validated; out-of-range days roll over.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` for a non-finite offset or one of 24 h or more.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        location: &Location,
        utc_offset: f64,
    ) -> Result<Self> {
        check_utc_offset(utc_offset)?;
        let julian_date = JulianDate::from_calendar(year, month, day)
            .add_days(-location.longitude() / (15.0 * 24.0));

        Ok(Self {
            location: *location,
            utc_offset,
            julian_date,
        })
    }

    /// Gets the observer's location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Gets the UTC offset in hours.
    #[must_use]
    pub const fn utc_offset(&self) -> f64 {
        self.utc_offset
    }

    /// Julian date of 0h local solar time.
    #[must_use]
    pub const fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    fn sun_at(&self, hours: f64) -> SunPosition {
        sun_position(self.julian_date.add_days(hours / 24.0))
    }

    /// Angle of the sun's upper limb below the horizon at sunrise and sunset.
    ///
    /// Standard refraction and semi-diameter plus the dip of the horizon seen
    /// from `elevation` meters up. Below sea level there is no dip.
    #[must_use]
    pub fn rise_set_angle(&self) -> f64 {
        HORIZON_ANGLE + DIP_PER_SQRT_METER * sqrt(self.location.elevation().max(0.0))
    }

    /// Solar noon, with `hours` the approximate time of day for the ephemeris.
    #[must_use]
    pub fn mid_day(&self, hours: f64) -> f64 {
        mid_day(&self.sun_at(hours))
    }

    /// Time at which the sun's depression reaches `angle`.
    ///
    /// Angles above 90° are measured from the opposite horizon and yield the
    /// morning time, so Fajr at 18° is `180 - 18`. Returns NaN when the sun
    /// never reaches the angle on this day.
    #[must_use]
    pub fn time_for_angle(&self, angle: f64, hours: f64) -> f64 {
        self.time_for_angle_at(angle, &self.sun_at(hours))
    }

    fn time_for_angle_at(&self, angle: f64, sun: &SunPosition) -> f64 {
        let latitude = self.location.latitude();
        let declination = sun.declination();

        let cos_hour_angle = (-sin_deg(angle) - sin_deg(declination) * sin_deg(latitude))
            / (cos_deg(declination) * cos_deg(latitude));
        let hour_angle = acos_deg(cos_hour_angle) / 15.0;

        let noon = mid_day(sun);
        if angle > 90.0 {
            noon - hour_angle
        } else {
            noon + hour_angle
        }
    }

    /// Time of Asr under the given juristic method.
    #[must_use]
    pub fn asr_time(&self, asr_method: AsrMethod, hours: f64) -> f64 {
        let sun = self.sun_at(hours);
        let zenith_at_noon = (self.location.latitude() - sun.declination()).abs();
        let angle = -acot_deg(asr_method.shadow_factor() + tan_deg(zenith_at_noon));
        self.time_for_angle_at(angle, &sun)
    }
}

fn mid_day(sun: &SunPosition) -> f64 {
    normalize_hours(12.0 - sun.equation_of_time())
}

/// Calculate prayer times for a calendar date.
///
/// Month and day are 1-based. The returned hours are local civil time for
/// `utc_offset`; see [`PrayerTimes`] for how missing and out-of-day times
/// are represented.
///
/// # Errors
/// Returns `InvalidUtcOffset` for an offset outside ±24 h and
/// `InvalidIterations` when the configuration asks for zero solver passes.
///
/// # Example
/// ```
/// use prayer_times::{prayer, CalculationMethod, Config, Location, Prayer};
///
/// let makkah = Location::new(21.4225, 39.8262, 0.0).unwrap();
/// let config = Config::new(CalculationMethod::Makkah);
/// let times = prayer::prayer_times(2024, 3, 15, &makkah, 3.0, &config).unwrap();
///
/// assert!(times.is_chronological());
/// assert_eq!(times.format(Prayer::Fajr, config.time_format()).to_string(), "05:13");
/// ```
pub fn prayer_times(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    utc_offset: f64,
    config: &Config,
) -> Result<PrayerTimes> {
    check_iterations(config.iterations())?;
    let observer = Observer::new(year, month, day, location, utc_offset)?;

    debug!(
        "computing {year:04}-{month:02}-{day:02} (JD {:.4}) at ({}, {}) UTC{utc_offset:+} with {}",
        observer.julian_date().julian_date(),
        location.latitude(),
        location.longitude(),
        config.method()
    );

    Ok(compute_day(&observer, config))
}

/// Calculate prayer times for a calendar date and render them in the
/// configured [`TimeFormat`](crate::TimeFormat).
///
/// # Errors
/// Same as [`prayer_times`].
///
/// # Example
/// ```
/// use prayer_times::{prayer, Config, Location, TimeFormat};
///
/// let london = Location::new(51.5074, -0.1278, 11.0).unwrap();
/// let config = Config::default().with_time_format(TimeFormat::Time12);
/// let times = prayer::formatted_prayer_times(2024, 6, 21, &london, 1.0, &config).unwrap();
///
/// for time in &times {
///     println!("{time}");
/// }
/// ```
pub fn formatted_prayer_times(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    utc_offset: f64,
    config: &Config,
) -> Result<[FormattedTime; 9]> {
    let times = prayer_times(year, month, day, location, utc_offset, config)?;
    Ok(times.format_all(config.time_format()))
}

/// Calculate prayer times for any chrono date-like value.
///
/// # Errors
/// Same as [`prayer_times`].
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn prayer_times_for_date<D: Datelike>(
    date: D,
    location: &Location,
    utc_offset: f64,
    config: &Config,
) -> Result<PrayerTimes> {
    prayer_times(
        date.year(),
        date.month(),
        date.day(),
        location,
        utc_offset,
        config,
    )
}

/// Calculate prayer times for the local calendar day of a timezone-aware datetime.
///
/// The UTC offset is taken from the datetime itself, so for zones with daylight
/// saving time pass a datetime on the day in question.
///
/// # Errors
/// Same as [`prayer_times`].
///
/// # Example
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use prayer_times::{prayer, Config, Location, Prayer};
///
/// let date = "2024-03-15T12:00:00+03:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let makkah = Location::new(21.4225, 39.8262, 0.0).unwrap();
/// let times = prayer::prayer_times_for_datetime(&date, &makkah, &Config::default()).unwrap();
///
/// let dhuhr = times.datetime(Prayer::Dhuhr, date.date_naive(), *date.offset()).unwrap();
/// assert_eq!(dhuhr.date_naive(), date.date_naive());
/// ```
#[cfg(feature = "chrono")]
pub fn prayer_times_for_datetime<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    location: &Location,
    config: &Config,
) -> Result<PrayerTimes> {
    let utc_offset = f64::from(datetime.offset().fix().local_minus_utc()) / 3600.0;
    prayer_times_for_date(datetime.date_naive(), location, utc_offset, config)
}

/// Runs the full pipeline for one observer-day.
fn compute_day(observer: &Observer, config: &Config) -> PrayerTimes {
    let params = config.params();

    let mut times = PrayerTimes::from_hours(INITIAL_GUESS);
    for pass in 0..config.iterations() {
        times = solve_pass(observer, config, &params, times);
        trace!("pass {pass}: {:?}", times.hours());
    }

    let civil = to_civil_time(observer, config, &params, times);
    trace!("civil: {:?}", civil.hours());

    let adjusted = high_latitude::adjust(civil, config);
    let with_midnight = derive_midnight(&params, adjusted);
    let tuned = tune(config.offsets(), with_midnight);

    for (prayer, hours) in tuned.iter() {
        if hours.is_nan() {
            debug!("{prayer} does not occur at latitude {}", observer.location().latitude());
        }
    }

    tuned
}

/// One solver pass. Each slot's previous value is the time of day at which the
/// sun's position is evaluated; minutes-based slots carry their value through.
fn solve_pass(
    observer: &Observer,
    config: &Config,
    params: &MethodParams,
    previous: PrayerTimes,
) -> PrayerTimes {
    let rise_set = observer.rise_set_angle();

    previous.map(|prayer, hours| match prayer {
        Prayer::Imsak => match config.imsak() {
            Imsak::Angle(angle) => observer.time_for_angle(180.0 - angle, hours),
            Imsak::Minutes(_) => hours,
        },
        Prayer::Fajr => observer.time_for_angle(180.0 - params.fajr_angle, hours),
        Prayer::Sunrise => observer.time_for_angle(180.0 - rise_set, hours),
        Prayer::Dhuhr => observer.mid_day(hours),
        Prayer::Asr => observer.asr_time(config.asr_method(), hours),
        Prayer::Sunset => observer.time_for_angle(rise_set, hours),
        Prayer::Maghrib => match params.maghrib {
            Twilight::Angle(angle) => observer.time_for_angle(angle, hours),
            Twilight::Minutes(_) => hours,
        },
        Prayer::Isha => match params.isha {
            Twilight::Angle(angle) => observer.time_for_angle(angle, hours),
            Twilight::Minutes(_) => hours,
        },
        Prayer::Midnight => hours,
    })
}

/// Moves solar-frame times to the civil UTC offset and applies the
/// minute-based rules.
fn to_civil_time(
    observer: &Observer,
    config: &Config,
    params: &MethodParams,
    times: PrayerTimes,
) -> PrayerTimes {
    let shift = observer.utc_offset() - observer.location().longitude() / 15.0;
    let shifted = times.map(|_, hours| hours + shift);

    let dhuhr = shifted[Prayer::Dhuhr] + f64::from(config.dhuhr_minutes()) / 60.0;
    let imsak = match config.imsak() {
        Imsak::Minutes(minutes) => shifted[Prayer::Fajr] - minutes / 60.0,
        Imsak::Angle(_) => shifted[Prayer::Imsak],
    };
    let sunset = shifted[Prayer::Sunset];
    let maghrib = match params.maghrib {
        Twilight::Minutes(minutes) => sunset + minutes / 60.0,
        // an angle shallower than the elevation-corrected horizon is reached before sunset
        Twilight::Angle(_) if shifted[Prayer::Maghrib] < sunset => sunset,
        Twilight::Angle(_) => shifted[Prayer::Maghrib],
    };
    let isha = match params.isha {
        Twilight::Minutes(minutes) => maghrib + minutes / 60.0,
        Twilight::Angle(_) => shifted[Prayer::Isha],
    };

    shifted
        .with(Prayer::Imsak, imsak)
        .with(Prayer::Dhuhr, dhuhr)
        .with(Prayer::Maghrib, maghrib)
        .with(Prayer::Isha, isha)
}

/// Midnight is halfway from sunset to sunrise, or to Fajr for the Shia methods.
fn derive_midnight(params: &MethodParams, times: PrayerTimes) -> PrayerTimes {
    let sunset = times[Prayer::Sunset];
    let morning = match params.midnight {
        MidnightMode::Standard => times[Prayer::Sunrise],
        MidnightMode::Jafari => times[Prayer::Fajr],
    };
    times.with(Prayer::Midnight, sunset + hour_difference(sunset, morning) / 2.0)
}

fn tune(offsets: [i32; 9], times: PrayerTimes) -> PrayerTimes {
    times.map(|prayer, hours| hours + f64::from(offsets[prayer.index()]) / 60.0)
}
