//! Basic prayer time calculation example.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use prayer_times::{
    AsrMethod, CalculationMethod, Config, Location, Prayer, TimeFormat, prayer_times_for_datetime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Makkah, using a FixedOffset datetime for the day
    let datetime = "2024-03-15T12:00:00+03:00".parse::<DateTime<FixedOffset>>()?;
    let makkah = Location::new(21.4225, 39.8262, 277.0)?;
    let config = Config::new(CalculationMethod::Makkah);

    let times = prayer_times_for_datetime(&datetime, &makkah, &config)?;

    println!("Prayer times for Makkah on {}:", datetime.date_naive());
    for (prayer, _) in times.iter() {
        println!("  {prayer:>8}: {}", times.format(prayer, TimeFormat::Time24));
    }

    // Example 2: New York, Hanafi Asr, 12-hour clock
    let datetime = Utc.with_ymd_and_hms(2024, 7, 4, 16, 0, 0).unwrap();
    let offset = FixedOffset::west_opt(4 * 3600).unwrap();
    let local = datetime.with_timezone(&offset);
    let new_york = Location::new(40.7128, -74.0060, 10.0)?;
    let config = Config::new(CalculationMethod::Isna)
        .with_asr_method(AsrMethod::Hanafi)
        .with_time_format(TimeFormat::Time12);

    let times = prayer_times_for_datetime(&local, &new_york, &config)?;

    println!("\nPrayer times for New York on {} (Hanafi Asr):", local.date_naive());
    for time in times.format_all(config.time_format()) {
        print!("{time}  ");
    }
    println!();

    // Example 3: Resolve to calendar datetimes
    let isha = times.datetime(Prayer::Isha, local.date_naive(), local.offset().fix());
    let midnight = times.datetime(Prayer::Midnight, local.date_naive(), local.offset().fix());
    if let (Some(isha), Some(midnight)) = (isha, midnight) {
        println!("\nIsha:     {isha}");
        println!("Midnight: {midnight}");
        println!("Night prayer window: {} minutes", (midnight - isha).num_minutes());
    }

    Ok(())
}
