//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the focused/selected element
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Bar/series color for the Current scenario
pub const CURRENT_COLOR: Color = Color::Cyan;

/// Bar/series color for the Model scenario
pub const MODEL_COLOR: Color = Color::Yellow;

/// Standard color for error messages
pub const ERROR_COLOR: Color = Color::Red;

/// Standard color for notices
pub const NOTICE_COLOR: Color = Color::Green;

/// Create a block with title and bottom help text.
///
/// The help line is rendered in the bottom border in the standard help color.
pub fn titled_block_with_help(title: &str, help_text: &str) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());

    if !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}
