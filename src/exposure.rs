use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, trace};

use crate::angles::normalize_signed_angle;
use crate::ephemeris::{MeanElementsEphemeris, SolarEphemeris};
use crate::error::ExposureError;
use crate::geodesy::{great_circle_distance_with_radius, initial_bearing_deg};
use crate::types::{
    Coordinate, ExposureReport, SeatSide, SegmentExposure, SegmentLighting, Side,
    SunAnalysisResult, SunExposureConfig, SunPosition,
};

#[derive(Debug, Clone, Default)]
pub struct SunExposureAnalyzer<E = MeanElementsEphemeris> {
    ephemeris: E,
    config: SunExposureConfig,
}

impl SunExposureAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: SolarEphemeris> SunExposureAnalyzer<E> {
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self {
            ephemeris,
            config: SunExposureConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SunExposureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SunExposureConfig {
        &self.config
    }

    pub fn analyze<Tz: TimeZone>(
        &self,
        route: &[Coordinate],
        instant: &DateTime<Tz>,
    ) -> Result<SunAnalysisResult, E::Error> {
        self.report(route, instant).map(|report| report.summary)
    }

    // One instant for the whole route, sun taken at each segment's start.
    pub fn report<Tz: TimeZone>(
        &self,
        route: &[Coordinate],
        instant: &DateTime<Tz>,
    ) -> Result<ExposureReport, E::Error> {
        if route.len() < 2 {
            debug!(points = route.len(), "route has no segments");
            return Ok(ExposureReport {
                summary: SunAnalysisResult::EMPTY,
                segments: Vec::new(),
                night_distance_km: 0.0,
            });
        }

        let instant = instant.with_timezone(&Utc);
        let mut totals = Totals::default();
        let mut segments = Vec::with_capacity(route.len() - 1);

        for (index, pair) in route.windows(2).enumerate() {
            let segment = self.classify_segment(pair[0], pair[1], &instant)?;
            trace!(
                index,
                distance_km = segment.distance_km,
                bearing_deg = ?segment.bearing_deg,
                lighting = ?segment.lighting,
                "classified segment"
            );
            totals.add(&segment);
            segments.push(segment);
        }

        let summary = totals.summarize();
        debug!(
            segments = segments.len(),
            total_km = summary.total_distance_km,
            left_km = summary.left_sun_distance_km,
            right_km = summary.right_sun_distance_km,
            best_side = ?summary.best_side,
            "sun exposure analysed"
        );

        Ok(ExposureReport {
            summary,
            segments,
            night_distance_km: round_2(totals.night),
        })
    }

    fn classify_segment(
        &self,
        start: Coordinate,
        end: Coordinate,
        instant: &DateTime<Utc>,
    ) -> Result<SegmentExposure, E::Error> {
        let distance_km =
            great_circle_distance_with_radius(start, end, self.config.earth_radius_km);
        let sun = self.ephemeris.sun_position(instant, start)?;
        if distance_km == 0.0 {
            return Ok(SegmentExposure {
                start,
                end,
                distance_km,
                bearing_deg: None,
                lighting: SegmentLighting::Stationary,
            });
        }

        let bearing = initial_bearing_deg(start, end);
        let lighting = if sun.altitude_deg < self.config.horizon_altitude_deg {
            SegmentLighting::Night {
                altitude_deg: sun.altitude_deg,
            }
        } else {
            let relative_angle_deg = normalize_signed_angle(sun.azimuth_deg - bearing);
            SegmentLighting::Sunlit {
                side: sun_side(relative_angle_deg),
                relative_angle_deg,
                sun,
            }
        };

        Ok(SegmentExposure {
            start,
            end,
            distance_km,
            bearing_deg: Some(bearing),
            lighting,
        })
    }
}

// Dead ahead and dead behind both count as left.
pub fn sun_side(relative_angle_deg: f64) -> Side {
    if relative_angle_deg > 0.0 {
        Side::Right
    } else {
        Side::Left
    }
}

pub fn sun_side_for(bearing_deg: f64, sun: SunPosition) -> Side {
    sun_side(normalize_signed_angle(sun.azimuth_deg - bearing_deg))
}

pub fn recommend_seat(left_sun_km: f64, right_sun_km: f64) -> SeatSide {
    if left_sun_km > right_sun_km {
        Side::Left.opposite().into()
    } else if right_sun_km > left_sun_km {
        Side::Right.opposite().into()
    } else {
        SeatSide::Any
    }
}

pub fn exposure_percentage(left_sun_km: f64, right_sun_km: f64, total_km: f64) -> u8 {
    if total_km > 0.0 {
        (100.0 * left_sun_km.max(right_sun_km) / total_km)
            .round()
            .clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// Accumulated in route order at full precision.
#[derive(Debug, Default)]
struct Totals {
    total: f64,
    left: f64,
    right: f64,
    night: f64,
}

impl Totals {
    fn add(&mut self, segment: &SegmentExposure) {
        self.total += segment.distance_km;
        match segment.lighting {
            SegmentLighting::Stationary => {}
            SegmentLighting::Night { .. } => self.night += segment.distance_km,
            SegmentLighting::Sunlit { side: Side::Left, .. } => self.left += segment.distance_km,
            SegmentLighting::Sunlit { side: Side::Right, .. } => {
                self.right += segment.distance_km
            }
        }
    }

    fn summarize(&self) -> SunAnalysisResult {
        SunAnalysisResult {
            total_distance_km: round_2(self.total),
            left_sun_distance_km: round_2(self.left),
            right_sun_distance_km: round_2(self.right),
            best_side: recommend_seat(self.left, self.right),
            sun_exposure_percentage: exposure_percentage(self.left, self.right, self.total),
        }
    }
}

pub fn analyze_sun_exposure<Tz: TimeZone>(
    route: &[Coordinate],
    instant: &DateTime<Tz>,
) -> SunAnalysisResult {
    match SunExposureAnalyzer::new().analyze(route, instant) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

pub fn analyze_sun_exposure_now(route: &[Coordinate]) -> SunAnalysisResult {
    analyze_sun_exposure(route, &Utc::now())
}

/// Parses an RFC 3339 timestamp such as `2026-06-21T12:00:00+02:00`.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, ExposureError> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ExposureError::InvalidInstant {
            input: input.to_string(),
            source,
        })
}

