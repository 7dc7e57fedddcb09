use serde::{Deserialize, Serialize};

use crate::error::ExposureError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, ExposureError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self::new(latitude, longitude))
        } else {
            Err(ExposureError::CoordinateOutOfRange {
                latitude,
                longitude,
            })
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

// Azimuth is a compass bearing in [0, 360); altitude is negative at night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    pub azimuth_deg: f64,
    pub altitude_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatSide {
    Left,
    Right,
    Any,
}

impl From<Side> for SeatSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => SeatSide::Left,
            Side::Right => SeatSide::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentLighting {
    // Zero-length segment, bearing is meaningless.
    Stationary,
    Night {
        altitude_deg: f64,
    },
    Sunlit {
        side: Side,
        relative_angle_deg: f64,
        sun: SunPosition,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentExposure {
    pub start: Coordinate,
    pub end: Coordinate,
    pub distance_km: f64,
    pub bearing_deg: Option<f64>,
    pub lighting: SegmentLighting,
}

impl SegmentExposure {
    pub fn sun_side(&self) -> Option<Side> {
        match self.lighting {
            SegmentLighting::Sunlit { side, .. } => Some(side),
            _ => None,
        }
    }
}

/// Distances are rounded to two decimals. `best_side` and the percentage are
/// computed from the unrounded sums, so near-ties can show equal rounded
/// distances with a `Left` or `Right` recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunAnalysisResult {
    #[serde(rename = "totalDistance")]
    pub total_distance_km: f64,
    #[serde(rename = "leftSunDistance")]
    pub left_sun_distance_km: f64,
    #[serde(rename = "rightSunDistance")]
    pub right_sun_distance_km: f64,
    #[serde(rename = "bestSide")]
    pub best_side: SeatSide,
    #[serde(rename = "sunExposurePercentage")]
    pub sun_exposure_percentage: u8,
}

impl SunAnalysisResult {
    pub const EMPTY: Self = Self {
        total_distance_km: 0.0,
        left_sun_distance_km: 0.0,
        right_sun_distance_km: 0.0,
        best_side: SeatSide::Any,
        sun_exposure_percentage: 0,
    };
}

impl Default for SunAnalysisResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExposureReport {
    pub summary: SunAnalysisResult,
    pub segments: Vec<SegmentExposure>,
    pub night_distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunExposureConfig {
    pub earth_radius_km: f64,
    // strictly below counts as night
    pub horizon_altitude_deg: f64,
}

impl Default for SunExposureConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: crate::geodesy::EARTH_RADIUS_KM,
            horizon_altitude_deg: 0.0,
        }
    }
}
