use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, assumptions_panel::AssumptionsPanel, chart_panel::ChartPanel,
    comparison_panel::ComparisonPanel, model_bar::ModelBar, status_bar::StatusBar,
};
use crate::state::AppState;
use crate::storage::{DataConfig, ModelStore};
use stakeval_core::ModelConfig;

/// Rows needed by the comparison table: header + nine fields + borders
const TABLE_HEIGHT: u16 = 12;

pub struct App {
    state: AppState,
    store: ModelStore,
    model_bar: ModelBar,
    assumptions_panel: AssumptionsPanel,
    comparison_panel: ComparisonPanel,
    chart_panel: ChartPanel,
    status_bar: StatusBar,
}

impl App {
    /// Build the app for a model config; validation happens in `AppState`.
    pub fn new(config: ModelConfig, data_dir: PathBuf) -> color_eyre::Result<Self> {
        let state = AppState::new(config)?;

        Ok(Self {
            state,
            store: ModelStore::new(data_dir),
            model_bar: ModelBar::new(),
            assumptions_panel: AssumptionsPanel::new(),
            comparison_panel: ComparisonPanel::new(),
            chart_panel: ChartPanel::new(),
            status_bar: StatusBar::new(),
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: model bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Model bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.model_bar.render(frame, chunks[0], &self.state);
        self.render_content(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        // Left: inputs and table. Right: chart and summary.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(58), Constraint::Min(30)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(AssumptionsPanel::HEIGHT),
                Constraint::Length(TABLE_HEIGHT),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        self.assumptions_panel.render(frame, left[0], &self.state);
        self.comparison_panel.render(frame, left[1], &self.state);
        self.chart_panel.render(frame, columns[1], &self.state);
    }

    /// Block for the next input event and run the pipeline for it to
    /// completion before reading another. Keeps renders free of stale state
    /// without any diffing.
    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('m') if key_event.modifiers.is_empty() => {
                self.state.cycle_preset();
                return;
            }
            KeyCode::Char('r') if key_event.modifiers.is_empty() => {
                self.state.reset_to_defaults();
                return;
            }
            KeyCode::Char('s') if key_event.modifiers.is_empty() => {
                self.save_model();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_messages();
                return;
            }
            _ => {}
        }

        if self.model_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            return;
        }

        self.assumptions_panel.handle_key(key_event, &mut self.state);
    }

    /// Save the active model config to the data directory and remember it
    /// as the startup model.
    fn save_model(&mut self) {
        match self.store.save(&self.state.config) {
            Ok(path) => {
                tracing::info!("Saved model config to {}", path.display());
                self.state
                    .set_notice(format!("Saved model to {}", path.display()));
            }
            Err(e) => {
                self.state.set_error(format!("Failed to save model: {e}"));
                return;
            }
        }

        let prefs = DataConfig {
            active_model: Some(self.state.config.name.clone()),
        };
        if let Err(e) = self.store.save_config(&prefs) {
            tracing::warn!("Failed to update config.yaml: {e}");
        }
    }
}
