//! Spans shared by both layouts, so the two forms never drift apart.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::daily::{DailyAggregate, DayBoundary};
use crate::format;

pub const MIN_COLOR: Color = Color::Blue;
pub const MAX_COLOR: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

pub fn date(day: &DailyAggregate, boundary: DayBoundary) -> Span<'static> {
    Span::styled(
        format::day_date(day.date, boundary),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

pub fn description(day: &DailyAggregate) -> Span<'static> {
    Span::styled(
        format::capitalize_words(day.description()),
        Style::default().fg(MUTED),
    )
}

/// `↓3° ↑9°`
pub fn temperatures(day: &DailyAggregate) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("↓{}", format::temperature(day.temp_min)),
            Style::default().fg(MIN_COLOR),
        ),
        Span::raw("  "),
        Span::styled(
            format!("↑{}", format::temperature(day.temp_max)),
            Style::default().fg(MAX_COLOR),
        ),
    ]
}

/// Humidity and wind. `labelled` adds the words the compact body shows.
pub fn conditions(day: &DailyAggregate, labelled: bool) -> (Span<'static>, Span<'static>) {
    let (humidity, wind) = (format::humidity(day.humidity), format::wind(day.wind));
    let (humidity, wind) = if labelled {
        (format!("{humidity} Humidity"), format!("{wind} Wind"))
    } else {
        (humidity, wind)
    };
    (
        Span::styled(humidity, Style::default().fg(Color::Cyan)),
        Span::styled(wind, Style::default().fg(Color::Cyan)),
    )
}

/// Left spans flush left, right spans flush right, within `width` columns.
pub fn spread(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    let gap = (width as usize).saturating_sub(used).max(1);
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}
