pub mod angles;
pub mod ephemeris;
pub mod error;
pub mod exposure;
pub mod geodesy;
pub mod types;

pub use angles::{deg_to_rad, normalize_angle, normalize_signed_angle, rad_to_deg};

pub use ephemeris::{
    from_south_referenced, HourAngleEphemeris, MeanElementsEphemeris, SolarEphemeris,
};

pub use error::ExposureError;

pub use exposure::{
    analyze_sun_exposure, analyze_sun_exposure_now, exposure_percentage, parse_instant,
    recommend_seat, sun_side, sun_side_for, SunExposureAnalyzer,
};

pub use geodesy::{
    great_circle_distance_km, great_circle_distance_with_radius, initial_bearing_deg,
    EARTH_RADIUS_KM,
};

pub use types::{
    Coordinate, ExposureReport, SeatSide, SegmentExposure, SegmentLighting, Side,
    SunAnalysisResult, SunExposureConfig, SunPosition,
};
