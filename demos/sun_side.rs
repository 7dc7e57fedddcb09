use chrono::TimeZone;
use chrono_tz::Europe::Madrid;
use tracing_subscriber::EnvFilter;

use sun_side::{Coordinate, SegmentLighting, SunExposureAnalyzer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Madrid -> Zaragoza -> Barcelona, roughly along the A-2.
    let route = [
        Coordinate::new(40.4168, -3.7038),
        Coordinate::new(40.6331, -3.1610),
        Coordinate::new(41.0500, -2.4500),
        Coordinate::new(41.6488, -0.8891),
        Coordinate::new(41.6176, 0.6200),
        Coordinate::new(41.3874, 2.1686),
    ];

    let dt = Madrid.with_ymd_and_hms(2026, 7, 15, 9, 30, 0).unwrap();

    let report = SunExposureAnalyzer::new().report(&route, &dt).unwrap();
    let summary = &report.summary;

    println!("=== Sun Exposure Along Route ===");
    println!("Departure: {}", dt);
    println!();
    println!("--- Segments ---");
    for (i, seg) in report.segments.iter().enumerate() {
        let lighting = match seg.lighting {
            SegmentLighting::Stationary => "stationary".to_string(),
            SegmentLighting::Night { altitude_deg } => format!("night (sun {:.1}°)", altitude_deg),
            SegmentLighting::Sunlit {
                side,
                relative_angle_deg,
                sun,
            } => format!(
                "sun on {:?} (relative {:.1}°, azimuth {:.1}°, altitude {:.1}°)",
                side, relative_angle_deg, sun.azimuth_deg, sun.altitude_deg
            ),
        };
        let bearing = seg
            .bearing_deg
            .map(|b| format!("{:.1}°", b))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{} {:>7.2} km  bearing {:>6}  {}",
            i, seg.distance_km, bearing, lighting
        );
    }
    println!();
    println!("--- Summary ---");
    println!("Total distance: {:.2} km", summary.total_distance_km);
    println!("Sun on left: {:.2} km", summary.left_sun_distance_km);
    println!("Sun on right: {:.2} km", summary.right_sun_distance_km);
    println!("Night: {:.2} km", report.night_distance_km);
    println!("Best side to sit: {:?}", summary.best_side);
    println!("Exposure: {}%", summary.sun_exposure_percentage);
}
