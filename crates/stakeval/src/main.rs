use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::eyre;

use stakeval::{App, ModelStore, init_logging};
use stakeval_core::ModelConfig;

#[derive(Parser, Debug)]
#[command(name = "stakeval")]
#[command(about = "A terminal what-if calculator for token-staking valuation models")]
struct Args {
    /// Path to the data directory (default: ~/.stakeval/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Model preset to start with, built-in or previously saved
    #[arg(short, long)]
    model: Option<String>,

    /// Load a model config YAML from an explicit path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Pick the starting model: explicit file, then named preset or saved
/// model, then the one remembered in config.yaml, then the default preset.
fn resolve_config(
    data_dir: &Path,
    model: Option<&str>,
    config_path: Option<&Path>,
) -> color_eyre::Result<ModelConfig> {
    if let Some(path) = config_path {
        return Ok(ModelStore::load_path(path)?);
    }

    let store = ModelStore::new(data_dir.to_path_buf());

    if let Some(name) = model {
        return resolve_named(&store, name)?.ok_or_else(|| eyre!("unknown model '{name}'"));
    }

    if let Some(name) = store.load_config()?.active_model
        && let Some(config) = resolve_named(&store, &name)?
    {
        return Ok(config);
    }

    Ok(ModelConfig::sky())
}

/// Look a model name up among the built-in presets, then the saved ones
fn resolve_named(store: &ModelStore, name: &str) -> color_eyre::Result<Option<ModelConfig>> {
    if let Some(preset) = ModelConfig::presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
    {
        return Ok(Some(preset));
    }

    if store.list()?.iter().any(|n| n == name) {
        return Ok(Some(store.load(name)?));
    }

    Ok(None)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(ModelStore::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let config = resolve_config(&data_dir, args.model.as_deref(), args.config.as_deref())?;
    tracing::info!("Starting with model '{}'", config.name);

    let mut app = App::new(config, data_dir)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
