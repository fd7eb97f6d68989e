//! ANSI color helpers for report output
//!
//! Colors are decided once per run. When disabled every helper returns the
//! text unchanged, so rendered reports stay byte-for-byte plain.

use std::io::IsTerminal;

/// ANSI color codes for CLI output
pub mod ansi {
    /// Green color (ANSI 32) - used for accent/headers
    pub const GREEN: &str = "\x1b[32m";
    /// Gray color (ANSI 37) - used for labels
    pub const GRAY: &str = "\x1b[37m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Output theme for the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}

impl Theme {
    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Theme that always emits escape codes.
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// Pick a theme for stdout.
    ///
    /// Colors are used only if the config allows them, `--no-color` was not
    /// given, `NO_COLOR` is unset and stdout is a terminal.
    pub fn detect(config_color: bool, no_color_flag: bool) -> Self {
        let enabled = config_color
            && !no_color_flag
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(ansi::GRAY, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(ansi::DARK_GRAY, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled && !text.is_empty() {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }
}
