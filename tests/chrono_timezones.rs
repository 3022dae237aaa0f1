#![cfg(feature = "chrono")]

//! Timezone-aware entry points with real zone rules.

use chrono::{Datelike, NaiveDate, Offset, TimeZone, Timelike};
use chrono_tz::{Asia::Riyadh, Europe::London};
use prayer_times::{
    CalculationMethod, Config, HighLatitudeRule, Location, Prayer, PrayerTimes, TimeFormat,
    prayer_times_for_date, prayer_times_for_datetime,
};

fn london() -> Location {
    Location::new(51.5074, -0.1278, 11.0).unwrap()
}

fn london_config() -> Config {
    Config::new(CalculationMethod::Mwl).with_high_latitude_rule(HighLatitudeRule::AngleBased)
}

fn clocks(times: &PrayerTimes) -> Vec<String> {
    times
        .format_all(TimeFormat::Time24)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn riyadh_in_arabia_standard_time() {
    let riyadh = Location::new(24.7136, 46.6753, 612.0).unwrap();
    let datetime = Riyadh.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let times =
        prayer_times_for_datetime(&datetime, &riyadh, &Config::new(CalculationMethod::Makkah))
            .unwrap();

    assert_eq!(
        clocks(&times),
        ["03:22", "03:32", "05:00", "11:54", "15:15", "18:48", "18:48", "20:18", "23:54"]
    );
}

#[test]
fn london_follows_daylight_saving_time() {
    let winter = London.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let summer = London.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();

    let winter_times = prayer_times_for_datetime(&winter, &london(), &london_config()).unwrap();
    let summer_times = prayer_times_for_datetime(&summer, &london(), &london_config()).unwrap();

    assert_eq!(
        clocks(&winter_times),
        ["05:49", "05:59", "07:59", "12:10", "14:01", "16:21", "16:21", "18:14", "00:10"]
    );
    assert_eq!(
        clocks(&summer_times),
        ["02:30", "02:40", "05:01", "13:07", "17:25", "21:12", "21:12", "23:25", "01:06"]
    );
}

#[test]
fn offset_is_taken_from_the_given_instant() {
    // clocks go forward at 01:00 UTC on 2024-03-31
    let before = London.with_ymd_and_hms(2024, 3, 31, 0, 30, 0).unwrap();
    let after = London.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();

    let gmt = prayer_times_for_datetime(&before, &london(), &london_config()).unwrap();
    let bst = prayer_times_for_datetime(&after, &london(), &london_config()).unwrap();

    assert_eq!(clocks(&bst)[Prayer::Dhuhr.index()], "13:05");
    for prayer in Prayer::ALL {
        assert!((bst[prayer] - gmt[prayer] - 1.0).abs() < 1e-9, "{prayer}");
    }
}

#[test]
fn times_resolve_to_zoned_datetimes() {
    let noon = London.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
    let offset = noon.offset().fix();
    let date = noon.date_naive();
    let times = prayer_times_for_datetime(&noon, &london(), &london_config()).unwrap();

    let dhuhr = times.datetime(Prayer::Dhuhr, date, offset).unwrap();
    assert_eq!(dhuhr.date_naive(), date);
    // resolved to the millisecond, where the clock format rounds to the minute
    assert_eq!((dhuhr.hour(), dhuhr.minute()), (13, 6));
    assert_eq!(times.format(Prayer::Dhuhr, TimeFormat::Time24).to_string(), "13:07");
    let since_midnight = dhuhr.naive_local() - date.and_hms_opt(0, 0, 0).unwrap();
    assert!((since_midnight.num_milliseconds() as f64 / 3.6e6 - times[Prayer::Dhuhr]).abs() < 1e-6);

    // Midnight falls after 00:00 and belongs to the next calendar day
    let midnight = times.datetime(Prayer::Midnight, date, offset).unwrap();
    assert_eq!(midnight.day(), 16);
    assert_eq!(midnight.with_timezone(&London).hour(), 1);
}

#[test]
fn date_like_values_are_interchangeable() {
    let naive = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
    let zoned = London.with_ymd_and_hms(2024, 7, 15, 18, 0, 0).unwrap();

    let from_naive = prayer_times_for_date(naive, &london(), 1.0, &london_config()).unwrap();
    let from_zoned = prayer_times_for_date(zoned, &london(), 1.0, &london_config()).unwrap();
    assert_eq!(from_naive, from_zoned);
}
