use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid tournament: {0}")]
    InvalidTournament(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config IO error at {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Parameter problems are fixed by the caller; IO and parse failures may be retried
    /// with a corrected file.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CoreError::InvalidTournament(_) => false,
            CoreError::InvalidConfig(_) => false,
            CoreError::ConfigIo { .. } => true,
            CoreError::Yaml(_) | CoreError::Json(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
