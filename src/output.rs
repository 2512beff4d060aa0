//! # Output Configuration
//!
//! Decides whether user-facing messages use emoji and color, and provides the
//! status markers printed in front of each progress line.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Build from the `--color` flag value, consulting the environment for `auto`.
    ///
    /// Unknown values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Marker for a status line: emoji when color is on, bracketed text otherwise.
    pub fn marker(&self, status: Status) -> &'static str {
        if self.use_color {
            status.emoji()
        } else {
            status.plain()
        }
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Kinds of progress line the tool prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Welcome,
    Warning,
    Fetch,
    Create,
    Clone,
    Overwrite,
    Done,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Welcome => "🌉",
            Status::Warning => "⚠️",
            Status::Fetch => "🔍",
            Status::Create => "🏗️",
            Status::Clone => "📦",
            Status::Overwrite => "♻️",
            Status::Done => "✅",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Welcome => "[BRIDGE]",
            Status::Warning => "[WARN]",
            Status::Fetch => "[FETCH]",
            Status::Create => "[CREATE]",
            Status::Clone => "[CLONE]",
            Status::Overwrite => "[OVERWRITE]",
            Status::Done => "[DONE]",
        }
    }
}
