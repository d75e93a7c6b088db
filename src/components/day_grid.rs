use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use super::day_cells;
use crate::action::Action;
use crate::daily::{DailyAggregate, DayBoundary};

/// Expanded form: every day visible as a 3-column row.
pub struct DayGrid;

pub struct DayGridProps<'a> {
    pub days: &'a [DailyAggregate],
    pub boundary: DayBoundary,
}

/// Two text rows + bottom rule
pub const ROW_HEIGHT: u16 = 3;

/// Rows needed to show `days` days at once
pub fn grid_height(days: usize) -> u16 {
    u16::try_from(days).unwrap_or(u16::MAX).saturating_mul(ROW_HEIGHT)
}

fn render_row(frame: &mut Frame, area: Rect, day: &DailyAggregate, boundary: DayBoundary) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .spacing(1)
    .split(inner);

    // Date + description
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(day_cells::date(day, boundary)),
            Line::from(day_cells::description(day)),
        ]),
        columns[0],
    );

    // Min / max
    frame.render_widget(
        Paragraph::new(Line::from(day_cells::temperatures(day))).alignment(Alignment::Center),
        columns[1],
    );

    // Humidity + wind
    let (humidity, wind) = day_cells::conditions(day, false);
    frame.render_widget(
        Paragraph::new(Line::from(vec![humidity, Span::raw("  "), wind]))
            .alignment(Alignment::Right),
        columns[2],
    );
}

impl Component<Action> for DayGrid {
    type Props<'a> = DayGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut y = area.y;
        for day in props.days {
            // The card only picks the grid when every row fits
            if y + ROW_HEIGHT > area.bottom() {
                break;
            }
            render_row(frame, Rect::new(area.x, y, area.width, ROW_HEIGHT), day, props.boundary);
            y += ROW_HEIGHT;
        }
    }
}
