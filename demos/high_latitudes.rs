//! Compare the high-latitude rules for a short northern summer night.

use prayer_times::{
    CalculationMethod, Config, HighLatitudeRule, Location, Prayer, TimeFormat, prayer_times,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        ("Helsinki", 60.1699, 24.9384, 17.0, 3.0),
        ("Reykjavik", 64.1466, -21.9426, 30.0, 0.0),
        ("Tromso", 69.6492, 18.9553, 10.0, 2.0),
    ];
    let rules = [
        HighLatitudeRule::None,
        HighLatitudeRule::MidNight,
        HighLatitudeRule::OneSeventh,
        HighLatitudeRule::AngleBased,
    ];
    let shown = [Prayer::Fajr, Prayer::Sunrise, Prayer::Sunset, Prayer::Isha];

    for (name, latitude, longitude, elevation, utc_offset) in cities {
        let location = Location::new(latitude, longitude, elevation)?;
        println!("{name} ({latitude:.2}°N), 2024-06-21");
        println!("  {:<12} {:>8} {:>8} {:>8} {:>8}", "rule", "Fajr", "Sunrise", "Sunset", "Isha");

        for rule in rules {
            let config = Config::new(CalculationMethod::Mwl).with_high_latitude_rule(rule);
            let times = prayer_times(2024, 6, 21, &location, utc_offset, &config)?;

            print!("  {:<12}", format!("{rule:?}"));
            for prayer in shown {
                print!(" {:>8}", times.format(prayer, TimeFormat::Time24).to_string());
            }
            println!(
                "{}",
                if times.is_chronological() { "" } else { "  (incomplete)" }
            );
        }
        println!();
    }

    Ok(())
}
