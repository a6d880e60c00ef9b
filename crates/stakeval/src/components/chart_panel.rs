use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_metric;
use crate::util::styles::{CURRENT_COLOR, HELP_COLOR, MODEL_COLOR};

/// Fixed-point scale for bar heights: chart values are 2-decimal displays,
/// so hundredths map losslessly onto the widget's u64 values.
const BAR_SCALE: f64 = 100.0;

/// Grouped bar chart of the configured fields, Current vs Model side by
/// side, with the one-line upside summary underneath.
pub struct ChartPanel;

impl ChartPanel {
    pub fn new() -> Self {
        Self
    }

    fn bar(value: f64, color: ratatui::style::Color) -> Bar<'static> {
        Bar::default()
            .value((value.max(0.0) * BAR_SCALE).round() as u64)
            .text_value(format_metric(value))
            .style(Style::default().fg(color))
            .value_style(Style::default().fg(color).reversed())
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let data = &state.chart;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" VISUAL COMPARISON ")
            .title_bottom(
                Line::from(vec![
                    Span::styled(" ■ Current ", Style::default().fg(CURRENT_COLOR)),
                    Span::styled("■ Model ", Style::default().fg(MODEL_COLOR)),
                ]),
            );

        let mut chart = BarChart::default()
            .block(block)
            .bar_width(9)
            .bar_gap(1)
            .group_gap(3)
            .direction(Direction::Vertical);

        for i in 0..data.labels.len() {
            let group = BarGroup::default()
                .label(Line::from(data.labels[i].clone()).centered())
                .bars(&[
                    Self::bar(data.current[i], CURRENT_COLOR),
                    Self::bar(data.model[i], MODEL_COLOR),
                ]);
            chart = chart.data(group);
        }

        frame.render_widget(chart, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::raw(state.summary.clone()),
        ]))
        .style(Style::default().fg(HELP_COLOR));

        frame.render_widget(paragraph, area);
    }
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ChartPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.render_chart(frame, chunks[0], state);
        self.render_summary(frame, chunks[1], state);
    }
}
