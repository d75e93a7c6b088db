//! Actions - categories are inferred from the variant prefix

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastData;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Forecast category =====
    /// Intent: (re)load the payload file (triggers async task)
    ForecastLoad,

    /// Result: payload decoded
    ForecastDidLoad(ForecastData),

    /// Result: payload could not be read or decoded
    ForecastDidError(String),

    // ===== UI category =====
    /// Move the accordion cursor down
    UiCursorNext,

    /// Move the accordion cursor up
    UiCursorPrev,

    /// Expand or collapse the day under the cursor
    UiToggleDay,

    UiCollapseAll,

    /// Switch day grouping between local time and UTC
    UiToggleDayBoundary,

    /// Force a re-render
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
