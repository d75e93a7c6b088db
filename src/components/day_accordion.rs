use std::collections::BTreeSet;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use super::day_cells;
use crate::action::Action;
use crate::daily::{DailyAggregate, DayBoundary};

/// Compact form: one collapsible section per day.
pub struct DayAccordion;

pub struct DayAccordionProps<'a> {
    pub days: &'a [DailyAggregate],
    pub boundary: DayBoundary,
    pub cursor: usize,
    pub open: &'a BTreeSet<usize>,
    pub is_focused: bool,
}

const CURSOR_BG: Color = Color::Rgb(45, 45, 60);

/// Header row + description row
const SECTION_HEADER: u16 = 2;

fn section_height(is_open: bool) -> u16 {
    // trailing spacer row
    SECTION_HEADER + u16::from(is_open) + 1
}

/// Smallest scroll that keeps the cursor's section on screen.
fn scroll_offset(props: &DayAccordionProps<'_>, height: u16) -> u16 {
    let start: u16 = (0..props.cursor)
        .map(|i| section_height(props.open.contains(&i)))
        .sum();
    let end = start + section_height(props.open.contains(&props.cursor));
    end.saturating_sub(height).min(start)
}

fn section_lines(
    index: usize,
    day: &DailyAggregate,
    props: &DayAccordionProps<'_>,
    width: u16,
) -> Vec<Line<'static>> {
    let is_open = props.open.contains(&index);
    let chevron = if is_open { "▾ " } else { "▸ " };

    let mut header = day_cells::spread(
        vec![
            Span::styled(chevron, Style::default().fg(day_cells::MUTED)),
            day_cells::date(day, props.boundary),
        ],
        day_cells::temperatures(day),
        width,
    );
    if props.is_focused && index == props.cursor {
        header = header.style(Style::default().bg(CURSOR_BG));
    }

    let mut lines = vec![
        header,
        Line::from(vec![Span::raw("  "), day_cells::description(day)]),
    ];

    if is_open {
        let (humidity, wind) = day_cells::conditions(day, true);
        lines.push(day_cells::spread(
            vec![Span::raw("  "), humidity],
            vec![wind],
            width,
        ));
    }

    lines.push(Line::default());
    lines
}

impl Component<Action> for DayAccordion {
    type Props<'a> = DayAccordionProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines: Vec<Line> = props
            .days
            .iter()
            .enumerate()
            .flat_map(|(i, day)| section_lines(i, day, &props, area.width))
            .collect();

        let offset = scroll_offset(&props, area.height);
        frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
    }
}
