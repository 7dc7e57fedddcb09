use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExposureError {
    #[error("invalid reference instant {input:?}: {source}")]
    InvalidInstant {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("coordinate ({latitude}, {longitude}) is outside the valid latitude/longitude range")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}
