//! Example using only the numeric API, as in no_std environments.
//!
//! Nothing here needs chrono or an allocator: dates are plain numbers and
//! results are fractional hours or `Display` values.

use prayer_times::{
    CalculationMethod, Config, Location, Observer, Prayer, TimeFormat, prayer_times, sun,
    time::JulianDate,
};

fn main() {
    // Example: Kuala Lumpur, 2024-01-15, UTC+8
    let location = Location::new(3.139, 101.6869, 56.0).expect("Valid coordinates");
    let config = Config::new(CalculationMethod::Malaysia).with_dhuhr_minutes(2);

    println!("Prayer times without std/chrono dependencies\n");

    let jd = JulianDate::from_calendar(2024, 1, 15);
    let position = sun::sun_position(jd);
    println!("Julian Date: {:.1}", jd.julian_date());
    println!("  Declination: {:.3}°", position.declination());
    println!("  Equation of time: {:.2} min\n", position.equation_of_time() * 60.0);

    let observer = Observer::new(2024, 1, 15, &location, 8.0).expect("Valid UTC offset");
    println!("Solar frame:");
    println!("  Rise/set angle: {:.3}°", observer.rise_set_angle());
    println!("  Solar noon: {:.4} h local mean time\n", observer.mid_day(12.0));

    let times = prayer_times(2024, 1, 15, &location, 8.0, &config).expect("Valid inputs");
    for prayer in Prayer::ALL {
        println!(
            "  {prayer:>8}: {} ({})",
            times.format(prayer, TimeFormat::Time24),
            times.format(prayer, TimeFormat::Floating)
        );
    }
}
