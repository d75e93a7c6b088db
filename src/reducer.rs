//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Forecast actions =====
        Action::ForecastLoad => {
            if state.forecast.is_loaded() {
                state.is_refreshing = true;
            } else {
                state.forecast = DataResource::Loading;
            }
            DispatchResult::changed_with(Effect::LoadForecast {
                path: state.source.clone(),
            })
        }

        Action::ForecastDidLoad(data) => {
            state.forecast = DataResource::Loaded(data);
            state.is_refreshing = false;
            state.clamp_to_days();
            DispatchResult::changed()
        }

        Action::ForecastDidError(msg) => {
            state.forecast = DataResource::Failed(msg);
            state.is_refreshing = false;
            state.cursor = 0;
            state.open_days.clear();
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiCursorNext => {
            if state.cursor + 1 < state.visible_day_count() {
                state.cursor += 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiCursorPrev => {
            if state.cursor > 0 {
                state.cursor -= 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiToggleDay => {
            if state.cursor >= state.visible_day_count() {
                return DispatchResult::unchanged();
            }
            if !state.open_days.remove(&state.cursor) {
                state.open_days.insert(state.cursor);
            }
            DispatchResult::changed()
        }

        Action::UiCollapseAll => {
            if state.open_days.is_empty() {
                DispatchResult::unchanged()
            } else {
                state.open_days.clear();
                DispatchResult::changed()
            }
        }

        Action::UiToggleDayBoundary => {
            state.day_boundary = state.day_boundary.toggle();
            // Indices may now point at different days
            state.open_days.clear();
            state.clamp_to_days();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::DayBoundary;
    use crate::forecast::{ForecastData, ForecastSample, MainBlock, WindBlock};

    const JAN_6: i64 = 1_736_121_600;
    const DAY: i64 = 24 * 3600;

    fn forecast(days: i64) -> ForecastData {
        ForecastData {
            list: (0..days)
                .map(|i| ForecastSample {
                    dt: JAN_6 + i * DAY + 12 * 3600,
                    main: MainBlock {
                        temp_min: 1.0,
                        temp_max: 9.0,
                        humidity: 60.0,
                    },
                    wind: WindBlock { speed: 2.0 },
                    weather: Vec::new(),
                })
                .collect(),
        }
    }

    fn loaded(days: i64) -> AppState {
        AppState {
            forecast: DataResource::Loaded(forecast(days)),
            day_boundary: DayBoundary::Utc,
            ..Default::default()
        }
    }

    #[test]
    fn test_forecast_load_sets_loading() {
        let mut state = AppState::new("data/kyiv.json", DayBoundary::Utc);
        assert!(state.forecast.is_empty());

        let result = reducer(&mut state, Action::ForecastLoad);

        assert!(result.changed);
        assert!(state.forecast.is_loading());
        assert_eq!(result.effects.len(), 1);
        assert!(
            matches!(&result.effects[0], Effect::LoadForecast { path } if path == "data/kyiv.json")
        );
    }

    #[test]
    fn test_reload_keeps_current_data() {
        let mut state = loaded(3);

        reducer(&mut state, Action::ForecastLoad);

        assert!(state.forecast.is_loaded());
        assert!(state.is_refreshing);
    }

    #[test]
    fn test_did_load_clamps_cursor_and_open_days() {
        let mut state = loaded(6);
        state.cursor = 5;
        state.open_days.extend([1, 4, 5]);

        reducer(&mut state, Action::ForecastDidLoad(forecast(3)));

        assert_eq!(state.cursor, 2);
        assert_eq!(state.open_days.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert!(!state.is_refreshing);
    }

    #[test]
    fn test_did_error_fails_resource() {
        let mut state = loaded(2);
        state.open_days.insert(0);

        reducer(&mut state, Action::ForecastDidError("bad json".into()));

        assert!(state.forecast.is_failed());
        assert!(state.open_days.is_empty());
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut state = loaded(2);

        assert!(!reducer(&mut state, Action::UiCursorPrev).changed);
        assert!(reducer(&mut state, Action::UiCursorNext).changed);
        assert_eq!(state.cursor, 1);
        assert!(!reducer(&mut state, Action::UiCursorNext).changed);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_cursor_is_capped_at_six_days() {
        let mut state = loaded(9);
        for _ in 0..10 {
            reducer(&mut state, Action::UiCursorNext);
        }
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_toggle_day_allows_multiple_open() {
        let mut state = loaded(3);

        reducer(&mut state, Action::UiToggleDay);
        reducer(&mut state, Action::UiCursorNext);
        reducer(&mut state, Action::UiToggleDay);
        assert!(state.is_open(0));
        assert!(state.is_open(1));

        reducer(&mut state, Action::UiToggleDay);
        assert!(!state.is_open(1));

        assert!(reducer(&mut state, Action::UiCollapseAll).changed);
        assert!(state.open_days.is_empty());
        assert!(!reducer(&mut state, Action::UiCollapseAll).changed);
    }

    #[test]
    fn test_toggle_day_without_data_is_noop() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::UiToggleDay);
        assert!(!result.changed);
        assert!(state.open_days.is_empty());
    }

    #[test]
    fn test_toggle_day_boundary_resets_accordion() {
        let mut state = loaded(3);
        state.open_days.insert(2);

        reducer(&mut state, Action::UiToggleDayBoundary);

        assert_eq!(state.day_boundary, DayBoundary::Local);
        assert!(state.open_days.is_empty());
    }
}
