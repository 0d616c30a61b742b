use chrono::TimeZone;
use chrono_tz::Europe::Stockholm;

use sunriset::{
    day_report, ut_to_datetime, ut_to_hm, CalendarDate, CrossingResult, GeoCoordinate, Twilight,
};

fn describe(name: &str, result: CrossingResult, date: CalendarDate) {
    match result {
        CrossingResult::Crossing { rise, set } => {
            let (rh, rm) = ut_to_hm(rise);
            let (sh, sm) = ut_to_hm(set);
            println!("{name}: {rh:02}:{rm:02} - {sh:02}:{sm:02} UTC");
            if let (Ok(r), Ok(s)) = (ut_to_datetime(date, rise), ut_to_datetime(date, set)) {
                println!(
                    "    local: {} - {}",
                    Stockholm.from_utc_datetime(&r.naive_utc()).format("%H:%M %Z"),
                    Stockholm.from_utc_datetime(&s.naive_utc()).format("%H:%M %Z"),
                );
            }
        }
        CrossingResult::AlwaysAbove => println!("{name}: never darker"),
        CrossingResult::AlwaysBelow => println!("{name}: never as bright"),
    }
}

fn main() {
    let date = CalendarDate::new(2023, 6, 21);
    let coord = GeoCoordinate::new(59.33, 18.06);
    let report = day_report(date, coord);

    println!("=== Sun Rise/Set Example ===");
    println!(
        "Location: Stockholm ({:.2}°N, {:.2}°E)",
        coord.latitude, coord.longitude
    );
    println!("Date: {}-{:02}-{:02}", date.year, date.month, date.day);
    println!();
    println!("--- Lengths ---");
    println!("Day length:                 {:5.2} hours", report.day_length);
    println!("With civil twilight         {:5.2} hours", report.civil_length);
    println!("With nautical twilight      {:5.2} hours", report.nautical_length);
    println!("With astronomical twilight  {:5.2} hours", report.astronomical_length);
    for kind in [Twilight::Civil, Twilight::Nautical, Twilight::Astronomical] {
        println!("Twilight {:?}: {:5.2} hours", kind, report.twilight_duration(kind));
    }
    println!();
    let (nh, nm) = ut_to_hm(report.solar_noon);
    println!("Sun at south {nh:02}:{nm:02} UTC");
    for kind in Twilight::ALL {
        describe(&format!("{:?}", kind), report.crossing(kind), date);
    }
}
