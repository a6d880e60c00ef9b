//! Application state and the synchronous recompute pipeline.
//!
//! Every input event flows through [`AppState::recompute`] before the next
//! event is read, so the table, chart and summary always reflect the current
//! assumption set. There is no partial update: each run replaces the derived
//! state in full.

use stakeval_core::compare::{ComparisonTable, potential_summary};
use stakeval_core::engine::compute;
use stakeval_core::{Assumptions, AssumptionField, Baseline, ChartData, ModelConfig, ValuationMetrics};

pub struct AppState {
    /// The active model preset: variant, bounds, baseline, chart fields
    pub config: ModelConfig,
    /// Fixed "Current" scenario, rebuilt only when the preset changes
    pub baseline: Baseline,
    /// The current assumption set; replaced wholesale on every adjustment
    pub assumptions: Assumptions,

    // Derived state, replaced in full by recompute()
    pub metrics: ValuationMetrics,
    pub table: ComparisonTable,
    pub chart: ChartData,
    pub summary: String,

    /// Index into [`AssumptionField::ALL`] of the selected input row
    pub selected: usize,
    /// Index of the active built-in preset, if the config is one
    pub preset_index: Option<usize>,
    pub presets: Vec<ModelConfig>,

    pub error_message: Option<String>,
    pub notice: Option<String>,
    pub exit: bool,
}

impl AppState {
    /// Build state for a validated-on-entry config, with every assumption at
    /// its preset default, and run the pipeline once.
    pub fn new(config: ModelConfig) -> color_eyre::Result<Self> {
        config.validate()?;

        let presets = ModelConfig::presets();
        let preset_index = presets.iter().position(|p| p.name == config.name);

        let baseline = config.baseline();
        let assumptions = config.inputs.defaults()?;
        let metrics = compute(&assumptions, config.variant, baseline.metrics.valuation);
        let table = ComparisonTable::build(&baseline.metrics, &metrics);
        let chart = table.chart_series(&config.chart_fields);
        let summary = potential_summary(&metrics);

        Ok(Self {
            config,
            baseline,
            assumptions,
            metrics,
            table,
            chart,
            summary,
            selected: 0,
            preset_index,
            presets,
            error_message: None,
            notice: None,
            exit: false,
        })
    }

    /// Re-run the whole pipeline from the current assumptions.
    ///
    /// One synchronous pass: engine, comparison table, chart series, summary
    /// sentence. Called after every assumption change.
    pub fn recompute(&mut self) {
        self.metrics = compute(
            &self.assumptions,
            self.config.variant,
            self.baseline.metrics.valuation,
        );
        self.table = ComparisonTable::build(&self.baseline.metrics, &self.metrics);
        self.chart = self.table.chart_series(&self.config.chart_fields);
        self.summary = potential_summary(&self.metrics);
    }

    /// The assumption field the cursor is on
    pub fn selected_field(&self) -> AssumptionField {
        AssumptionField::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % AssumptionField::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(AssumptionField::ALL.len() - 1);
    }

    /// Step the selected field by `steps` slider increments, clamped to the
    /// preset's bounds, and recompute.
    pub fn adjust_selected(&mut self, steps: i32) {
        let field = self.selected_field();
        let spec = self.config.inputs.spec(field);
        let value = spec.adjust(self.assumptions.value_of(field), steps);

        match self.assumptions.with_value(field, value) {
            Ok(next) => {
                self.assumptions = next;
                self.clear_messages();
                self.recompute();
            }
            // Bounds passed validate(), so this would be a config drift bug
            Err(e) => self.set_error(format!("Rejected input: {e}")),
        }
    }

    /// Reset every field to the active preset's defaults
    pub fn reset_to_defaults(&mut self) {
        match self.config.inputs.defaults() {
            Ok(defaults) => {
                self.assumptions = defaults;
                self.clear_messages();
                self.recompute();
            }
            Err(e) => self.set_error(format!("Invalid preset defaults: {e}")),
        }
    }

    /// Switch to the preset at `index`: new variant, bounds and baseline,
    /// assumptions reset to the new defaults.
    pub fn activate_preset(&mut self, index: usize) {
        if index >= self.presets.len() {
            return;
        }
        let config = self.presets[index].clone();
        tracing::info!("Switching to model preset '{}'", config.name);

        self.baseline = config.baseline();
        self.config = config;
        self.preset_index = Some(index);
        self.selected = 0;
        self.reset_to_defaults();
    }

    /// Cycle to the next built-in preset
    pub fn cycle_preset(&mut self) {
        let next = match self.preset_index {
            Some(i) => (i + 1) % self.presets.len(),
            None => 0,
        };
        self.activate_preset(next);
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.error_message = Some(message);
        self.notice = None;
    }

    pub fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.notice = None;
    }
}
