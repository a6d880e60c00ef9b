use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR};

/// Top bar listing the built-in model presets; the active one is
/// highlighted along with its formula variant.
pub struct ModelBar;

impl ModelBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ModelBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ModelBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < state.presets.len() {
                    state.activate_preset(index);
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = state
            .presets
            .iter()
            .enumerate()
            .map(|(idx, preset)| {
                let content = format!("[{}] {}", idx + 1, preset.name);

                if Some(idx) == state.preset_index {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(FOCUS_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(HELP_COLOR)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(format!(
                        " stakeval: {} ({}) ",
                        state.config.name,
                        state.config.variant.label()
                    )),
            )
            .select(state.preset_index)
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
