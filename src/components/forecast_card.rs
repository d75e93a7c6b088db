use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::day_grid::grid_height;
use super::{Component, DayAccordion, DayAccordionProps, DayGrid, DayGridProps};
use crate::action::Action;
use crate::daily::DailyAggregate;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

pub const CARD_TITLE: &str = " 5-Days Forecast ";

/// Narrowest card that gets the expanded grid
pub const EXPANDED_MIN_WIDTH: u16 = 64;

/// Which of the two forms is drawn. Chosen from the card's size alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    /// Accordion, one collapsible section per day
    Compact,
    /// Grid, one 3-column row per day
    Expanded,
}

impl CardLayout {
    /// `card` includes the frame. The grid needs the width and room for
    /// every day; otherwise the accordion, which scrolls, is used.
    pub fn for_area(card: Rect, days: usize) -> Self {
        let rows = card.height.saturating_sub(2);
        if card.width >= EXPANDED_MIN_WIDTH && grid_height(days) <= rows {
            CardLayout::Expanded
        } else {
            CardLayout::Compact
        }
    }
}

/// Props for ForecastCard - read-only view of state
pub struct ForecastCardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The forecast card: frame, placeholder states, layout switch and help bar
#[derive(Default)]
pub struct ForecastCard;

impl Component<Action> for ForecastCard {
    type Props<'a> = ForecastCardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::ForecastLoad),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::UiCursorNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::UiCursorPrev),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::UiToggleDay),
                KeyCode::Char('c') => Some(Action::UiCollapseAll),
                KeyCode::Char('t') => Some(Action::UiToggleDayBoundary),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastCardProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let layout = CardLayout::for_area(chunks[0], props.state.visible_day_count());
        match &props.state.forecast {
            DataResource::Loaded(_) => {
                render_card(frame, chunks[0], props.state, layout, props.is_focused)
            }
            DataResource::Failed(error) => render_error(frame, chunks[0], error),
            DataResource::Loading => render_message(frame, chunks[0], "Loading..."),
            DataResource::Empty => render_hint(frame, chunks[0]),
        }

        let mut hints = Vec::new();
        if layout == CardLayout::Compact {
            hints.push(StatusBarHint::new("j/k", "move"));
            hints.push(StatusBarHint::new("enter", "expand"));
        }
        hints.push(StatusBarHint::new("t", props.state.day_boundary.toggle().label()));
        hints.push(StatusBarHint::new("r", "reload"));
        hints.push(StatusBarHint::new("q", "quit"));

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    layout: CardLayout,
    is_focused: bool,
) {
    let mut title = vec![Span::styled(CARD_TITLE, Style::default().bold())];
    if state.is_refreshing {
        title.push(Span::styled("reloading… ", Style::default().fg(Color::DarkGray)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let days: Vec<DailyAggregate> = state.visible_days();
    if days.is_empty() {
        render_message(frame, inner, "No forecast data");
        return;
    }

    match layout {
        CardLayout::Compact => {
            let mut accordion = DayAccordion;
            accordion.render(
                frame,
                inner,
                DayAccordionProps {
                    days: &days,
                    boundary: state.day_boundary,
                    cursor: state.cursor,
                    open: &state.open_days,
                    is_focused,
                },
            );
        }
        CardLayout::Expanded => {
            let mut grid = DayGrid;
            grid.render(
                frame,
                inner,
                DayGridProps {
                    days: &days,
                    boundary: state.day_boundary,
                },
            );
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let msg = Line::from(vec![Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[0]);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to load forecast", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[4],
    );
}
