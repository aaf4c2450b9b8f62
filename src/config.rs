use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ConfigError, GameError};
use crate::game::{GameEngine, MAX_DIMENSION, MIN_DIMENSION};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, columns: 7 }
    }
}

/// Display names bound to each color for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: String,
    pub yellow: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: "Red".to_string(),
            yellow: "Yellow".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seeds first-player selection; unset means a fresh draw per game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = MIN_DIMENSION..=MAX_DIMENSION;
        if !valid.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if !valid.contains(&self.board.columns) {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if self.players.red.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.red must not be empty".into(),
            ));
        }
        if self.players.yellow.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.yellow must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Random source for first-player selection, seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build an engine for these dimensions and names.
    pub fn new_game(&self, rng: &mut StdRng) -> Result<GameEngine, GameError> {
        GameEngine::with_rng(
            self.board.rows,
            self.board.columns,
            self.players.red.as_str(),
            self.players.yellow.as_str(),
            rng,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
