use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR, NOTICE_COLOR};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> String {
        // Show the selected slider's tooltip next to the key hints
        let field = state.selected_field();
        let help = &state.config.inputs.spec(field).help;
        format!("j/k: field | h/l: adjust | m: model | r: reset | s: save | q: quit | {help}")
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.clone()),
            ])
        } else if let Some(notice) = &state.notice {
            Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(NOTICE_COLOR),
            ))
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakeval_core::ModelConfig;

    #[test]
    fn test_help_text_shows_selected_tooltip() {
        let mut state = AppState::new(ModelConfig::sky()).unwrap();
        state.select_next(); // supply staked

        let text = StatusBar::help_text(&state);
        assert!(text.contains("q: quit"));
        assert!(text.contains("staked"));
    }

    #[test]
    fn test_help_text_is_plain_ascii() {
        let state = AppState::new(ModelConfig::sky()).unwrap();
        assert!(StatusBar::help_text(&state).is_ascii());
    }
}
