use std::path::PathBuf;

/// Configuration error variants shared by the gate and the settings model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more required variables are absent or empty, in declared order.
    #[error(
        "Missing required environment variables: {}. Please check your .env file configuration",
        .missing.join(", ")
    )]
    MissingRequiredConfiguration { missing: Vec<String> },
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("failed to load env file {}: {reason}", .path.display())]
    EnvFile { path: PathBuf, reason: String },
}

impl ConfigError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequiredConfiguration { .. } => "MISSING_REQUIRED_CONFIGURATION",
            Self::InvalidValue { .. } => "INVALID_VALUE",
            Self::EnvFile { .. } => "ENV_FILE",
        }
    }
}
