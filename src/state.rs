//! Application state - single source of truth

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::daily::{self, DailyAggregate, DayBoundary};
use crate::forecast::ForecastData;

/// Application state - everything the UI needs to render
///
/// Only the raw payload is stored; day aggregates are rebuilt on every render.
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Path of the forecast payload file
    #[debug(section = "Source", label = "File", debug_fmt)]
    pub source: String,

    /// Payload lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Forecast", label = "Data", debug_fmt)]
    pub forecast: DataResource<ForecastData>,

    /// Whether a reload is in progress (keeps showing current data)
    #[debug(section = "Forecast", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Calendar used to group samples into days
    #[debug(section = "Forecast", label = "Day boundary", debug_fmt)]
    pub day_boundary: DayBoundary,

    // --- Compact layout (accordion) ---
    /// Day under the cursor
    #[debug(section = "Accordion", label = "Cursor", debug_fmt)]
    pub cursor: usize,

    /// Indices of expanded days; several can be open at once
    #[debug(section = "Accordion", label = "Open", debug_fmt)]
    pub open_days: BTreeSet<usize>,
}

impl AppState {
    pub fn new(source: impl Into<String>, day_boundary: DayBoundary) -> Self {
        Self {
            source: source.into(),
            forecast: DataResource::Empty,
            is_refreshing: false,
            day_boundary,
            cursor: 0,
            open_days: BTreeSet::new(),
        }
    }

    /// The days the card shows, in input order
    pub fn visible_days(&self) -> Vec<DailyAggregate> {
        self.forecast
            .data()
            .map(|data| daily::forecast_days(&data.list, self.day_boundary))
            .unwrap_or_default()
    }

    pub fn visible_day_count(&self) -> usize {
        self.visible_days().len()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_days.contains(&index)
    }

    /// Keep the cursor and open sections inside the visible day range.
    pub fn clamp_to_days(&mut self) {
        let count = self.visible_day_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));
        self.open_days.retain(|&i| i < count);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("forecast.json", DayBoundary::default())
    }
}
