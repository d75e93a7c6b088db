//! Render tests using RenderHarness
//!
//! The same state is drawn at a narrow and a wide size; only the width picks
//! the accordion or the grid.

use forecast_card::{
    components::{Component, ForecastCard, ForecastCardProps},
    daily::DayBoundary,
    forecast::{ForecastData, ForecastSample, MainBlock, WindBlock},
    state::AppState,
};
use tui_dispatch::{DataResource, testing::*};

fn fixture() -> ForecastData {
    serde_json::from_str(include_str!("fixtures/two_days.json")).unwrap()
}

fn loaded_state() -> AppState {
    AppState {
        forecast: DataResource::Loaded(fixture()),
        day_boundary: DayBoundary::Utc,
        ..Default::default()
    }
}

/// One noon sample per day from 2025-01-06, `days` days long
fn week_state(days: i64) -> AppState {
    let list = (0..days)
        .map(|i| ForecastSample {
            dt: 1_736_164_800 + i * 86_400,
            main: MainBlock {
                temp_min: 1.0,
                temp_max: 8.0,
                humidity: 60.0 + i as f64,
            },
            wind: WindBlock { speed: 2.5 },
            weather: Vec::new(),
        })
        .collect();
    AppState {
        forecast: DataResource::Loaded(ForecastData { list }),
        day_boundary: DayBoundary::Utc,
        ..Default::default()
    }
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = ForecastCard;
    render.render_to_string_plain(|frame| {
        let props = ForecastCardProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_compact_collapsed() {
    let output = render(&loaded_state(), 40, 24);

    assert!(output.contains("5-Days Forecast"));
    assert!(output.contains("Mon, Jan 6"));
    assert!(output.contains("Tue, Jan 7"));
    assert!(output.contains("Clear Sky"));
    assert!(output.contains("↓0°"));
    assert!(output.contains("↑17°"));
    assert!(output.contains("↓8°"));
    assert!(output.contains("↑21°"));
    assert!(!output.contains("Humidity"), "Sections start collapsed:\n{output}");
}

#[test]
fn test_render_compact_open_section() {
    let mut state = loaded_state();
    state.open_days.insert(0);

    let output = render(&state, 40, 24);

    assert!(output.contains("47% Humidity"));
    assert!(output.contains("5 m/s Wind"));
    assert!(!output.contains("51% Humidity"));
}

#[test]
fn test_render_expanded_shows_everything() {
    let output = render(&loaded_state(), 80, 24);

    assert!(output.contains("Mon, Jan 6"));
    assert!(output.contains("Tue, Jan 7"));
    assert!(output.contains("47%"));
    assert!(output.contains("5 m/s"));
    assert!(output.contains("51%"));
    assert!(output.contains("7 m/s"));
    assert!(!output.contains("Humidity"), "Grid has no labels:\n{output}");
}

#[test]
fn test_expanded_ignores_open_sections() {
    let mut state = loaded_state();
    let closed = render(&state, 80, 24);
    state.open_days.insert(1);
    let opened = render(&state, 80, 24);

    assert_eq!(closed, opened);
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        forecast: DataResource::Failed("invalid forecast JSON".into()),
        ..Default::default()
    };

    let output = render(&state, 50, 20);

    assert!(output.contains("Error"), "Should show error label");
    assert!(output.contains("invalid forecast JSON"));
    assert!(output.contains("retry"), "Should show retry hint");
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default(), 50, 20);
    assert!(output.contains("to load forecast"));
}

#[test]
fn test_render_help_bar() {
    let compact = render(&loaded_state(), 60, 24);
    assert!(compact.contains("expand"));
    assert!(compact.contains("reload"));
    assert!(compact.contains("quit"));

    let expanded = render(&loaded_state(), 100, 24);
    assert!(!expanded.contains("expand"));
    assert!(expanded.contains("reload"));
}

#[test]
fn test_render_nan_temperature() {
    let data: ForecastData = serde_json::from_str(
        r#"{ "list": [{ "dt": 1736154000, "main": { "temp_max": 4 }, "weather": [] }] }"#,
    )
    .unwrap();
    let state = AppState {
        forecast: DataResource::Loaded(data),
        day_boundary: DayBoundary::Utc,
        ..Default::default()
    };

    let output = render(&state, 80, 12);

    assert!(output.contains("↓NaN°"));
    assert!(output.contains("↑4°"));
    assert!(output.contains("NaN m/s"));
}

#[test]
fn test_expanded_shows_all_six_days_on_standard_terminal() {
    let output = render(&week_state(8), 80, 24);

    for date in [
        "Mon, Jan 6",
        "Tue, Jan 7",
        "Wed, Jan 8",
        "Thu, Jan 9",
        "Fri, Jan 10",
        "Sat, Jan 11",
    ] {
        assert!(output.contains(date), "{date} missing:\n{output}");
    }
    assert!(output.contains("65%"), "Sixth day's humidity:\n{output}");
    assert!(!output.contains("Sun, Jan 12"), "Only six days are shown");
}

#[test]
fn test_short_wide_terminal_falls_back_to_accordion() {
    let state = week_state(6);

    let output = render(&state, 80, 14);

    // Accordion: collapsed sections, no grid humidity column
    assert!(output.contains("expand"), "Compact help bar expected:\n{output}");
    assert!(!output.contains("60%"));
}
