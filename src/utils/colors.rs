//! Terminal colors and styling for CLI output.

use colored::Colorize;

/// Message type for different levels of output
#[derive(Debug, Clone, Copy)]
pub enum MessageType {
    Success,
    Warning,
    Info,
}

impl MessageType {
    /// Apply color to a message based on its type
    pub fn colorize(&self, message: &str) -> String {
        match self {
            MessageType::Success => message.green().to_string(),
            MessageType::Warning => message.yellow().to_string(),
            MessageType::Info => message.blue().to_string(),
        }
    }

    /// Get the prefix for this message type
    pub fn prefix(&self) -> &str {
        match self {
            MessageType::Success => "✓",
            MessageType::Warning => "⚠",
            MessageType::Info => "ℹ",
        }
    }

    /// Format a message with prefix and color
    pub fn format(&self, message: &str) -> String {
        format!("{} {}", self.prefix(), self.colorize(message))
    }
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{}", MessageType::Success.format(message));
}

/// Print an info message (blue)
pub fn info(message: &str) {
    println!("{}", MessageType::Info.format(message));
}

/// Print a warning message (yellow) to stderr
pub fn warning(message: &str) {
    eprintln!("{}", MessageType::Warning.format(message));
}
