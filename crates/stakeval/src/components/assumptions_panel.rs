use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_input, slider_track};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, titled_block_with_help};
use stakeval_core::AssumptionField;

/// Width of the little slider track drawn next to each value
const TRACK_WIDTH: usize = 16;

/// The five adjustable inputs, one slider-style row per field.
///
/// Every adjustment goes through `AppState::adjust_selected`, which clamps
/// to the preset bounds and re-runs the pipeline before the next event.
pub struct AssumptionsPanel;

impl AssumptionsPanel {
    /// Five field rows plus the block borders
    pub const HEIGHT: u16 = AssumptionField::ALL.len() as u16 + 2;

    pub fn new() -> Self {
        Self
    }

    fn field_line(state: &AppState, field: AssumptionField, selected: bool) -> Line<'static> {
        let spec = state.config.inputs.spec(field);
        let value = state.assumptions.value_of(field);

        let marker = if selected { "▶ " } else { "  " };
        let row_style = if selected {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(format!("{marker}{:<20}", field.label()), row_style),
            Span::styled(format!("{:>7}  ", format_input(value)), row_style),
            Span::styled(
                slider_track(value, spec.min, spec.max, TRACK_WIDTH),
                if selected {
                    Style::default().fg(FOCUS_COLOR)
                } else {
                    Style::default().fg(HELP_COLOR)
                },
            ),
            Span::styled(
                format!("  [{}-{}]", format_input(spec.min), format_input(spec.max)),
                Style::default().fg(HELP_COLOR),
            ),
        ])
    }
}

impl Default for AssumptionsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AssumptionsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let big = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.select_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.select_prev();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.adjust_selected(if big { -10 } else { -1 });
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.adjust_selected(if big { 10 } else { 1 });
                EventResult::Handled
            }
            // Shifted letters arrive as uppercase chars
            KeyCode::Char('H') => {
                state.adjust_selected(-10);
                EventResult::Handled
            }
            KeyCode::Char('L') => {
                state.adjust_selected(10);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = AssumptionField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                ListItem::new(Self::field_line(state, *field, i == state.selected))
            })
            .collect();

        let block = titled_block_with_help(" ASSUMPTIONS ", "h/l adjust, Shift x10");
        let list = List::new(items).block(block);

        frame.render_widget(list, area);
    }
}
