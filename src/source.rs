//! Forecast payload loading
//!
//! The payload is whatever the forecast API returned, saved to disk.

use std::path::Path;

use crate::forecast::ForecastData;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid forecast JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and decode a forecast payload file
pub async fn load_forecast(path: impl AsRef<Path>) -> Result<ForecastData, LoadError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
    parse_forecast(&json)
}

pub fn parse_forecast(json: &str) -> Result<ForecastData, LoadError> {
    Ok(serde_json::from_str(json)?)
}
