use crate::config::ConfigError;
use crate::sources::FetchError;
use crate::telemetry::TelemetryError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("http client error: {0}")]
    Client(#[source] reqwest::Error),
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}
