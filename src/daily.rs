//! Day grouping - 3-hour samples reduced to one summary per calendar day

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::forecast::{ForecastSample, WeatherCondition};

/// How many days the card shows
pub const FORECAST_DAYS: usize = 6;

/// Which calendar a sample's timestamp is bucketed by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum DayBoundary {
    /// The viewer's local time zone
    #[default]
    Local,
    Utc,
}

impl DayBoundary {
    pub fn toggle(&self) -> Self {
        match self {
            DayBoundary::Local => DayBoundary::Utc,
            DayBoundary::Utc => DayBoundary::Local,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayBoundary::Local => "local",
            DayBoundary::Utc => "UTC",
        }
    }

    /// Calendar date of an epoch timestamp, `None` when chrono can't represent it.
    pub fn day_key(&self, dt: i64) -> Option<NaiveDate> {
        let utc = DateTime::from_timestamp(dt, 0)?;
        Some(match self {
            DayBoundary::Local => utc.with_timezone(&chrono::Local).date_naive(),
            DayBoundary::Utc => utc.date_naive(),
        })
    }

    /// Format an epoch timestamp with a strftime pattern in this calendar.
    pub fn format(&self, dt: i64, pattern: &str) -> Option<String> {
        let utc = DateTime::from_timestamp(dt, 0)?;
        Some(match self {
            DayBoundary::Local => utc.with_timezone(&chrono::Local).format(pattern).to_string(),
            DayBoundary::Utc => utc.format(pattern).to_string(),
        })
    }
}

/// Summary of every sample that fell on one calendar day.
///
/// Only the temperatures are aggregated. `date` and `weather` come from the
/// day's first sample, `humidity` and `wind` from its last one.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyAggregate {
    pub day: NaiveDate,
    /// Epoch seconds of the first sample of the day
    pub date: i64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub wind: f64,
    pub weather: Option<WeatherCondition>,
}

impl DailyAggregate {
    fn seed(day: NaiveDate, sample: &ForecastSample) -> Self {
        Self {
            day,
            date: sample.dt,
            temp_min: sample.main.temp_min,
            temp_max: sample.main.temp_max,
            humidity: sample.main.humidity,
            wind: sample.wind.speed,
            weather: sample.condition().cloned(),
        }
    }

    fn absorb(&mut self, sample: &ForecastSample) {
        self.temp_min = js_min(self.temp_min, sample.main.temp_min);
        self.temp_max = js_max(self.temp_max, sample.main.temp_max);
        self.humidity = sample.main.humidity;
        self.wind = sample.wind.speed;
    }

    /// Condition description, empty when the day's first sample had none.
    pub fn description(&self) -> &str {
        self.weather
            .as_ref()
            .map(|w| w.description.as_str())
            .unwrap_or_default()
    }
}

/// Day-keyed aggregates in order of first appearance.
#[derive(Clone, Debug, Default)]
pub struct DailyForecasts {
    days: Vec<DailyAggregate>,
    index: HashMap<NaiveDate, usize>,
}

impl DailyForecasts {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, day: NaiveDate) -> Option<&DailyAggregate> {
        self.index.get(&day).map(|&i| &self.days[i])
    }

    pub fn keys(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.day)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyAggregate> {
        self.days.iter()
    }

    /// The first `n` days in insertion order. Never re-sorted by date.
    pub fn next_days(&self, n: usize) -> &[DailyAggregate] {
        &self.days[..n.min(self.days.len())]
    }

    fn push(&mut self, day: NaiveDate, sample: &ForecastSample) {
        match self.index.get(&day) {
            Some(&i) => self.days[i].absorb(sample),
            None => {
                self.index.insert(day, self.days.len());
                self.days.push(DailyAggregate::seed(day, sample));
            }
        }
    }
}

/// Group samples by calendar day in a single left-to-right pass.
///
/// Samples with an unrepresentable timestamp have no day and are skipped.
pub fn aggregate(samples: &[ForecastSample], boundary: DayBoundary) -> DailyForecasts {
    let mut daily = DailyForecasts::default();
    for sample in samples {
        if let Some(day) = boundary.day_key(sample.dt) {
            daily.push(day, sample);
        }
    }
    daily
}

/// Aggregate and keep the days the card shows.
pub fn forecast_days(samples: &[ForecastSample], boundary: DayBoundary) -> Vec<DailyAggregate> {
    aggregate(samples, boundary)
        .next_days(FORECAST_DAYS)
        .to_vec()
}

// `f64::min` drops NaN; a NaN reading must stay visible instead.
fn js_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn js_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
