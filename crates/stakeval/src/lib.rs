//! Terminal what-if calculator for token-staking valuation models
//!
//! The calculation core lives in `stakeval_core`; this crate owns the
//! ratatui event loop, the panels, model-config storage, and logging.

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod logging;
pub mod state;
pub mod storage;

// ============================================================================
// UI modules
// ============================================================================

pub mod components;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use logging::init_logging;
pub use storage::ModelStore;
