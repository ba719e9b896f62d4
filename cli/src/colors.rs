use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn piece_name(&self, text: &str) -> ColoredString {
        text.yellow().bold()
    }

    /// Color for a heatmap cell given its raw distance value.
    pub fn distance(&self, text: &str, value: i32) -> ColoredString {
        match value {
            0 => text.black().on_green().bold(),
            1 => text.green(),
            2 => text.yellow(),
            3.. => text.red(),
            -2 => text.bright_black().bold(),
            _ => text.bright_black(),
        }
    }

    pub fn path(&self, text: &str) -> ColoredString {
        text.black().on_cyan().bold()
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn category(&self, text: &str) -> ColoredString {
        text.blue().bold()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
