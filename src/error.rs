use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("coordinate out of range: lat={latitude}, lon={longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid telemetry: {0}")]
    InvalidTelemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
