use std::path::PathBuf;

/// Errors returned when a drop cannot be applied to the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (expected 0..{})", crate::game::COLS)]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_display() {
        let err = MoveError::InvalidColumn { column: 9 };
        assert_eq!(err.to_string(), "column 9 is out of range (expected 0..7)");
    }

    #[test]
    fn test_column_full_display() {
        let err = MoveError::ColumnFull { column: 2 };
        assert_eq!(err.to_string(), "column 2 is full");
    }

    #[test]
    fn test_game_over_display() {
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.start_column must be < 7".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.start_column must be < 7"
        );
    }
}
