use std::convert::Infallible;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::types::{Coordinate, SunPosition};

pub trait SolarEphemeris {
    type Error;

    fn sun_position(&self, instant: &DateTime<Utc>, at: Coordinate)
        -> Result<SunPosition, Self::Error>;
}

impl<E: SolarEphemeris + ?Sized> SolarEphemeris for &E {
    type Error = E::Error;

    fn sun_position(
        &self,
        instant: &DateTime<Utc>,
        at: Coordinate,
    ) -> Result<SunPosition, Self::Error> {
        (**self).sun_position(instant, at)
    }
}

/// Azimuth in radians from South towards West, altitude in radians.
pub fn from_south_referenced(azimuth_rad: f64, altitude_rad: f64) -> SunPosition {
    SunPosition {
        azimuth_deg: normalize_angle(rad_to_deg(azimuth_rad) + 180.0),
        altitude_deg: rad_to_deg(altitude_rad),
    }
}

const MS_PER_DAY: f64 = 86_400_000.0;
const JULIAN_UNIX_EPOCH: f64 = 2_440_588.0;
const JULIAN_J2000: f64 = 2_451_545.0;
const OBLIQUITY_DEG: f64 = 23.4397;
const PERIHELION_DEG: f64 = 102.9372;

/// Mean orbital elements; roughly 1° accurate near J2000.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanElementsEphemeris;

impl MeanElementsEphemeris {
    pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
        instant.timestamp_millis() as f64 / MS_PER_DAY - 0.5 + JULIAN_UNIX_EPOCH - JULIAN_J2000
    }

    pub fn south_referenced(instant: &DateTime<Utc>, at: Coordinate) -> (f64, f64) {
        let d = Self::days_since_j2000(instant);
        let phi = deg_to_rad(at.latitude);
        let west = deg_to_rad(-at.longitude);
        let eps = deg_to_rad(OBLIQUITY_DEG);

        let mean_anomaly = deg_to_rad(357.5291 + 0.985_600_28 * d);
        let centre = deg_to_rad(
            1.9148 * mean_anomaly.sin()
                + 0.02 * (2.0 * mean_anomaly).sin()
                + 0.0003 * (3.0 * mean_anomaly).sin(),
        );
        let ecliptic_lon =
            mean_anomaly + centre + deg_to_rad(PERIHELION_DEG) + std::f64::consts::PI;

        let declination = (ecliptic_lon.sin() * eps.sin()).asin();
        let right_ascension = (ecliptic_lon.sin() * eps.cos()).atan2(ecliptic_lon.cos());
        let sidereal = deg_to_rad(280.16 + 360.985_623_5 * d) - west;
        let h = sidereal - right_ascension;

        let azimuth = h.sin().atan2(h.cos() * phi.sin() - declination.tan() * phi.cos());
        let altitude = (phi.sin() * declination.sin()
            + phi.cos() * declination.cos() * h.cos())
        .clamp(-1.0, 1.0)
        .asin();
        (azimuth, altitude)
    }
}

impl SolarEphemeris for MeanElementsEphemeris {
    type Error = Infallible;

    fn sun_position(
        &self,
        instant: &DateTime<Utc>,
        at: Coordinate,
    ) -> Result<SunPosition, Self::Error> {
        let (azimuth, altitude) = Self::south_referenced(instant, at);
        Ok(from_south_referenced(azimuth, altitude))
    }
}

/// Day-of-year model with a fixed 23.45° axial tilt. The year only matters
/// through leap days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourAngleEphemeris;

impl HourAngleEphemeris {
    pub fn declination_deg(ordinal: u32) -> f64 {
        23.45 * deg_to_rad(360.0 * (284 + ordinal) as f64 / 365.0).sin()
    }

    // Minutes the sundial runs ahead of mean time.
    pub fn equation_of_time_min(ordinal: u32) -> f64 {
        let b = deg_to_rad((ordinal - 1) as f64 * 360.0 / 365.0);
        229.18
            * (0.000075 + 0.001868 * b.cos() - 0.032077 * b.sin()
                - 0.014615 * (2.0 * b).cos()
                - 0.040849 * (2.0 * b).sin())
    }

    pub fn hour_angle_deg(instant: &DateTime<Utc>, longitude: f64) -> f64 {
        let utc_hours = instant.num_seconds_from_midnight() as f64 / 3600.0;
        let offset_hours = (4.0 * longitude + Self::equation_of_time_min(instant.ordinal())) / 60.0;
        let solar_time = (utc_hours + offset_hours).rem_euclid(24.0);
        15.0 * (solar_time - 12.0)
    }
}

impl SolarEphemeris for HourAngleEphemeris {
    type Error = Infallible;

    fn sun_position(
        &self,
        instant: &DateTime<Utc>,
        at: Coordinate,
    ) -> Result<SunPosition, Self::Error> {
        let lat = deg_to_rad(at.latitude);
        let dec = deg_to_rad(Self::declination_deg(instant.ordinal()));
        let ha = deg_to_rad(Self::hour_angle_deg(instant, at.longitude));

        let sin_alt = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).clamp(-1.0, 1.0);
        let east = -dec.cos() * ha.sin();
        let north = dec.sin() * lat.cos() - dec.cos() * lat.sin() * ha.cos();

        Ok(SunPosition {
            azimuth_deg: normalize_angle(rad_to_deg(east.atan2(north))),
            altitude_deg: rad_to_deg(sin_alt.asin()),
        })
    }
}
