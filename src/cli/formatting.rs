//! Formatting utilities for terminal output.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats success messages with green styling
pub fn format_success(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats warnings with yellow styling
pub fn format_warning(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::YELLOW, text, Colors::RESET)
}
