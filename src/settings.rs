use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "CHESSLINE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Distance in squares between opposite edges. Must be even.
    pub grid_size: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        BoardSettings { grid_size: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub axis_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings { axis_labels: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub render: RenderSettings,
    pub log: LogSettings,
}

/// Loads settings from `path` (optional) layered under `CHESSLINE__*`
/// environment variables. Missing keys fall back to the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
fn settings_from_toml(toml: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = settings_from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.board.grid_size, 20);
        assert!(settings.render.axis_labels);
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn test_partial_override() {
        let settings = settings_from_toml(
            r#"
            [board]
            grid_size = 8

            [log]
            filter = "chessline=debug"
            "#,
        )
        .unwrap();
        assert_eq!(settings.board.grid_size, 8);
        assert!(settings.render.axis_labels);
        assert_eq!(settings.log.filter, "chessline=debug");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = settings_from_toml(
            r#"
            [board]
            grid_size = "large"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let settings = load_settings(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(settings.render, RenderSettings::default());
    }

    #[test]
    fn test_shipped_default_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.board.grid_size, 20);
    }
}
