use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Character named '{0}' not found")]
    UnknownCharacter(String),

    #[error("{0} is already taken!")]
    DuplicateName(String),

    #[error("No characters have been added yet")]
    NoCharacters,

    #[error("Command aborted")]
    Aborted,

    #[error("End of input")]
    EndOfInput,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl TrackerError {
    /// Errors the prompt layer recovers from by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackerError::UnknownCharacter(_) | TrackerError::DuplicateName(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
