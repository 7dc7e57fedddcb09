use std::convert::Infallible;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Utc};

use sun_side::{
    from_south_referenced, Coordinate, HourAngleEphemeris, MeanElementsEphemeris,
    SolarEphemeris, SunPosition,
};

fn at(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon)
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn mean(instant: DateTime<Utc>, c: Coordinate) -> SunPosition {
    match MeanElementsEphemeris.sun_position(&instant, c) {
        Ok(pos) => pos,
        Err(never) => match never {},
    }
}

fn hour_angle(instant: DateTime<Utc>, c: Coordinate) -> SunPosition {
    match HourAngleEphemeris.sun_position(&instant, c) {
        Ok(pos) => pos,
        Err(never) => match never {},
    }
}

// ── South-referenced adapter ──

#[test]
fn test_south_referenced_cardinals() {
    let cases: &[(f64, f64)] = &[
        (0.0, 180.0),
        (FRAC_PI_2, 270.0),
        (-FRAC_PI_2, 90.0),
        (FRAC_PI_4, 225.0),
        (-3.0 * FRAC_PI_4, 45.0),
    ];
    for &(south_rad, north_deg) in cases {
        let pos = from_south_referenced(south_rad, 0.0);
        assert_abs_diff_eq!(pos.azimuth_deg, north_deg, epsilon = 1e-9);
        assert!((0.0..360.0).contains(&pos.azimuth_deg));
    }
}

#[test]
fn test_south_referenced_altitude_in_degrees() {
    let pos = from_south_referenced(0.0, -PI / 6.0);
    assert_abs_diff_eq!(pos.altitude_deg, -30.0, epsilon = 1e-9);
}

// ── MeanElementsEphemeris ──

#[test]
fn test_days_since_j2000_epoch() {
    assert_abs_diff_eq!(
        MeanElementsEphemeris::days_since_j2000(&utc(2000, 1, 1, 12, 0)),
        0.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        MeanElementsEphemeris::days_since_j2000(&utc(2000, 1, 2, 0, 0)),
        0.5,
        epsilon = 1e-9
    );
}

#[test]
fn test_equator_equinox_noon_near_zenith() {
    let pos = mean(utc(2026, 3, 20, 12, 0), at(0.0, 0.0));
    assert!(pos.altitude_deg > 85.0, "altitude={}", pos.altitude_deg);
}

#[test]
fn test_equator_midnight_below_horizon() {
    let pos = mean(utc(2026, 3, 20, 0, 0), at(0.0, 0.0));
    assert!(pos.altitude_deg < -80.0, "altitude={}", pos.altitude_deg);
}

#[test]
fn test_midlatitude_summer_noon_due_south() {
    let pos = mean(utc(2026, 6, 21, 12, 0), at(40.0, 0.0));
    assert_abs_diff_eq!(pos.azimuth_deg, 180.0, epsilon = 3.0);
    assert_abs_diff_eq!(pos.altitude_deg, 73.4, epsilon = 1.0);
}

#[test]
fn test_morning_sun_in_east_afternoon_in_west() {
    let am = mean(utc(2026, 6, 21, 9, 0), at(40.0, 0.0));
    let pm = mean(utc(2026, 6, 21, 14, 0), at(40.0, 0.0));
    assert!(am.azimuth_deg > 60.0 && am.azimuth_deg < 150.0, "am={}", am.azimuth_deg);
    assert!(pm.azimuth_deg > 210.0 && pm.azimuth_deg < 300.0, "pm={}", pm.azimuth_deg);
}

#[test]
fn test_southern_hemisphere_night_at_utc_noon() {
    let pos = mean(utc(2026, 6, 21, 12, 0), at(-33.9, 151.2));
    assert!(pos.altitude_deg < 0.0);
}

#[test]
fn test_mean_elements_azimuth_normalized() {
    let instants = [
        utc(2026, 1, 15, 8, 0),
        utc(2026, 4, 1, 17, 45),
        utc(2026, 7, 15, 3, 10),
        utc(2026, 10, 30, 22, 0),
    ];
    let places = [at(39.8, -89.6), at(-45.0, 170.0), at(60.0, 10.0), at(0.0, 0.0)];
    for instant in instants {
        for place in places {
            let pos = mean(instant, place);
            assert!((0.0..360.0).contains(&pos.azimuth_deg), "{:?}", pos);
            assert!((-90.0..=90.0).contains(&pos.altitude_deg), "{:?}", pos);
        }
    }
}

#[test]
fn test_mean_elements_deterministic() {
    let instant = utc(2026, 8, 1, 10, 0);
    assert_eq!(mean(instant, at(48.2, 16.4)), mean(instant, at(48.2, 16.4)));
}

// ── HourAngleEphemeris ──

#[test]
fn test_declination_tracks_the_seasons() {
    assert_abs_diff_eq!(HourAngleEphemeris::declination_deg(172), 23.45, epsilon = 0.5);
    assert_abs_diff_eq!(HourAngleEphemeris::declination_deg(355), -23.45, epsilon = 0.5);
    assert_abs_diff_eq!(HourAngleEphemeris::declination_deg(80), 0.0, epsilon = 1.0);
}

#[test]
fn test_equation_of_time_stays_within_a_quarter_hour() {
    for ordinal in 1..=366 {
        let eot = HourAngleEphemeris::equation_of_time_min(ordinal);
        assert!((-15.0..=17.0).contains(&eot), "day {}: {}", ordinal, eot);
    }
}

#[test]
fn test_hour_angle_near_zero_at_local_noon() {
    // 18:00 UTC is a few minutes before solar noon at 89.6°W in March.
    let ha = HourAngleEphemeris::hour_angle_deg(&utc(2026, 3, 21, 18, 0), -89.6);
    assert_abs_diff_eq!(ha, 0.0, epsilon = 4.0);
    assert!(ha < 0.0);

    let greenwich = HourAngleEphemeris::hour_angle_deg(&utc(2026, 6, 21, 15, 0), 0.0);
    assert_abs_diff_eq!(greenwich, 45.0, epsilon = 1.0);
}

#[test]
fn test_hour_angle_model_midlatitude_noon() {
    let pos = hour_angle(utc(2026, 3, 21, 18, 0), at(39.8, -89.6));
    assert_abs_diff_eq!(pos.altitude_deg, 50.0, epsilon = 2.0);
    assert!((174.0..=185.0).contains(&pos.azimuth_deg), "azimuth={}", pos.azimuth_deg);
}

#[test]
fn test_hour_angle_model_leap_day_ordinal() {
    // 2024-03-01 is ordinal 61; 2026-03-02 is ordinal 61 too.
    let leap = hour_angle(utc(2024, 3, 1, 12, 0), at(45.0, 0.0));
    let common = hour_angle(utc(2026, 3, 2, 12, 0), at(45.0, 0.0));
    assert_eq!(leap, common);
}

// ── Models agree ──

#[test]
fn test_models_agree_within_a_degree_or_two() {
    let cases = [
        (utc(2026, 6, 21, 12, 0), at(40.0, 0.0)),
        (utc(2026, 6, 21, 9, 0), at(40.0, 0.0)),
        (utc(2026, 12, 21, 12, 0), at(40.0, 0.0)),
        (utc(2026, 3, 21, 18, 0), at(39.8, -89.6)),
        (utc(2026, 7, 15, 7, 30), at(40.4168, -3.7038)),
    ];
    for (instant, place) in cases {
        let a = mean(instant, place);
        let b = hour_angle(instant, place);
        assert_abs_diff_eq!(a.altitude_deg, b.altitude_deg, epsilon = 1.5);
        assert_abs_diff_eq!(a.azimuth_deg, b.azimuth_deg, epsilon = 1.5);
    }
}

// ── Borrowed ephemeris ──

fn lookup<E: SolarEphemeris<Error = Infallible>>(eph: E, instant: DateTime<Utc>) -> SunPosition {
    match eph.sun_position(&instant, at(40.0, 0.0)) {
        Ok(pos) => pos,
        Err(never) => match never {},
    }
}

#[test]
fn test_reference_forwards_to_inner_ephemeris() {
    let instant = utc(2026, 6, 21, 12, 0);
    let eph = MeanElementsEphemeris;
    assert_eq!(lookup(&eph, instant), mean(instant, at(40.0, 0.0)));
}
