//! Console game configuration.
//!
//! Settings can come from a JSON file; command-line flags are applied on top
//! by the binary.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::protocol::display::Layout;

/// Errors while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board orientation.
    pub layout: Layout,
    /// Whether Player 2 is played by the robot.
    pub robot: bool,
    /// Optional KFEN starting position.
    pub position: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            layout: Layout::Horizontal,
            robot: true,
            position: None,
        }
    }
}

impl GameConfig {
    /// Parses a configuration from JSON text. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_play_against_robot_horizontally() {
        let config = GameConfig::default();
        assert_eq!(config.layout, Layout::Horizontal);
        assert!(config.robot);
        assert!(config.position.is_none());
    }

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config = GameConfig::from_json(
            r#"{"layout":"vertical","robot":false,"position":"b/4,4,4,4,4,4/0/4,4,4,4,4,4/0"}"#,
        )
        .unwrap();
        assert_eq!(config.layout, Layout::Vertical);
        assert!(!config.robot);
        assert_eq!(
            config.position.as_deref(),
            Some("b/4,4,4,4,4,4/0/4,4,4,4,4,4/0")
        );
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            GameConfig::from_json(r#"{"layout":"diagonal"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::load(Path::new("/nonexistent/kalah.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
