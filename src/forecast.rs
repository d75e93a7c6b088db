//! Forecast payload - 5 day / 3 hour samples as saved from the forecast API
//!
//! Decoding is lenient on purpose: numeric fields that are missing, `null` or
//! not numbers become `NaN` and flow through to the card as `NaN°`.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// The full payload. Only `list` is read; other top-level fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastData {
    #[serde(default)]
    pub list: Vec<ForecastSample>,
}

/// One 3-hour reading
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastSample {
    /// Epoch seconds
    pub dt: i64,
    #[serde(default)]
    pub main: MainBlock,
    #[serde(default)]
    pub wind: WindBlock,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

impl ForecastSample {
    /// The condition shown for this sample: the first descriptor, if any.
    pub fn condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MainBlock {
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub temp_min: f64,
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub temp_max: f64,
    /// Percent
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub humidity: f64,
}

impl Default for MainBlock {
    fn default() -> Self {
        Self {
            temp_min: f64::NAN,
            temp_max: f64::NAN,
            humidity: f64::NAN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WindBlock {
    /// m/s
    #[serde(default = "nan", deserialize_with = "lenient_number")]
    pub speed: f64,
}

impl Default for WindBlock {
    fn default() -> Self {
        Self { speed: f64::NAN }
    }
}

/// Weather condition descriptor (id, category, description, icon code)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeatherCondition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

fn nan() -> f64 {
    f64::NAN
}

// serde_json writes non-finite floats as `null`, so this also reads back
// whatever the debug session saved.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(f64::NAN))
}
