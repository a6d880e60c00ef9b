use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_metric;
use crate::util::styles::{CURRENT_COLOR, HEADER_COLOR, MODEL_COLOR};
use stakeval_core::MetricField;

/// The Current-vs-Model table: nine labeled rows, two value columns.
///
/// Values come pre-rounded from the comparison table; both columns are built
/// from the same field order, so they can never drift out of alignment.
pub struct ComparisonPanel;

impl ComparisonPanel {
    pub fn new() -> Self {
        Self
    }

    fn title(state: &AppState) -> String {
        match state.baseline.as_of {
            Some(date) => format!(" CURRENT VS MODEL (as of {date}) "),
            None => " CURRENT VS MODEL ".to_string(),
        }
    }
}

impl Default for ComparisonPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ComparisonPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let table = &state.table;

        let mut items = vec![ListItem::new(Line::from(vec![
            Span::styled(
                format!("{:<22}", ""),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>10}", table.current().scenario),
                Style::default()
                    .fg(CURRENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>10}", table.model().scenario),
                Style::default()
                    .fg(MODEL_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))];

        for field in MetricField::ALL {
            let current = table.current().value_of(field);
            let model = table.model().value_of(field);

            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<22}", field.label()),
                    Style::default().fg(HEADER_COLOR),
                ),
                Span::raw(format!("{:>10}", format_metric(current))),
                Span::raw(format!("{:>10}", format_metric(model))),
            ])));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Self::title(state)),
        );

        frame.render_widget(list, area);
    }
}
