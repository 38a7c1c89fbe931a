//! Demo configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vloop_widgets::LoopConfig;

/// Top-level demo configuration (vloop.toml)
///
/// Sizes are in terminal cells. A missing `[loop]` table gets
/// [`terminal_loop_config`]; fields missing inside a present `[loop]` table
/// fall back to the library defaults.
#[derive(Debug, Deserialize, Serialize)]
pub struct DemoFile {
    /// Timing and spacing of the looping view
    #[serde(default = "terminal_loop_config", rename = "loop")]
    pub looping: LoopConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// What to show and how fast to redraw
#[derive(Debug, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Number of generated comments
    #[serde(default = "default_count")]
    pub count: usize,
    /// Logical position to start at
    #[serde(default)]
    pub start: i64,
    /// Viewport width in columns
    #[serde(default = "default_width")]
    pub width: i32,
    /// Redraw rate while sliding
    #[serde(default = "default_fps")]
    pub fps: u32,
}

/// One row of spacing and fade around a one-row item
pub fn terminal_loop_config() -> LoopConfig {
    LoopConfig::default().spacing(1).fade_length(1)
}

fn default_count() -> usize {
    11
}

fn default_width() -> i32 {
    32
}

fn default_fps() -> u32 {
    30
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            start: 0,
            width: default_width(),
            fps: default_fps(),
        }
    }
}

impl DemoFile {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let file = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(file)
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let file: DemoFile = toml::from_str(content)?;
        file.looping
            .validate()
            .context("Invalid [loop] configuration")?;
        Ok(file)
    }
}

impl Default for DemoFile {
    fn default() -> Self {
        Self {
            looping: terminal_loop_config(),
            demo: DemoConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = DemoFile::parse("").unwrap();
        assert_eq!(file.looping, terminal_loop_config());
        assert_eq!(file.demo.count, 11);
        assert_eq!(file.demo.width, 32);
    }

    #[test]
    fn test_partial_tables() {
        let file = DemoFile::parse(
            r#"
            [loop]
            delay_ms = 2000
            spacing = 1

            [demo]
            count = 3
            start = 2
            "#,
        )
        .unwrap();

        assert_eq!(file.looping.delay_ms, 2000);
        assert_eq!(file.looping.spacing, 1);
        assert_eq!(file.looping.animation_duration_ms, 500);
        assert_eq!(file.demo.count, 3);
        assert_eq!(file.demo.start, 2);
        assert_eq!(file.demo.fps, 30);
    }

    #[test]
    fn test_invalid_loop_config_is_rejected() {
        let err = DemoFile::parse("[loop]\nanimation_duration_ms = 0").unwrap_err();
        assert!(format!("{err:#}").contains("Animation duration"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = DemoFile::load(Path::new("/nonexistent/vloop.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/vloop.toml"));
    }
}
