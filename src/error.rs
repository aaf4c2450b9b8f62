use std::path::PathBuf;

/// Errors raised by engine construction and board queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board sides must be between 4 and 64 (requested {rows} rows x {columns} columns)")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("cell ({row}, {column}) is outside the board [1, {rows}] x [1, {columns}]")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Reasons a drop was not applied. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
