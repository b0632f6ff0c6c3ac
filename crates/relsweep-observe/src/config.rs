use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{format::LoggerFormat, level::LoggerLevel};

/// Logger configuration for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Level filter expression, e.g. `"info"` or `"relsweep_core=debug,info"`.
    pub level: LoggerLevel,
    /// Include the module path in each line.
    pub show_target: bool,
    /// Allow ANSI color (text format only).
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            show_target: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Color only when enabled and stderr is actually a terminal.
    ///
    /// Checked at initialization time, not at config-parse time, so the
    /// decision reflects the stream the process really ended up with.
    pub(crate) fn color_enabled(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_colored_info_text() {
        let config = LoggerConfig::default();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.show_target);
        assert!(config.use_color);
    }

    #[test]
    fn disabling_color_wins_over_terminal_detection() {
        let config = LoggerConfig {
            use_color: false,
            ..Default::default()
        };

        assert!(!config.color_enabled());
    }

    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config: LoggerConfig = serde_json::from_str(r#"{}"#).unwrap();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.level.as_str(), "info");
        assert!(config.show_target);
    }

    #[test]
    fn serde_parses_partial_documents() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "level": "debug"}"#).unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "debug");
        assert!(config.use_color);
    }
}
