//! Forecast card - groups 3-hour forecast samples by day and renders them
//! as a compact accordion or an expanded grid, depending on terminal width.

pub mod action;
pub mod components;
pub mod daily;
pub mod effect;
pub mod forecast;
pub mod format;
pub mod reducer;
pub mod source;
pub mod state;
