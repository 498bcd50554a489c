use thiserror::Error;

/// Main error type for the VHS parameter library
#[derive(Error, Debug)]
pub enum VhsError {
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when a parameter set violates its invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Invalid parameter value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid parameter range: {lower_key} ({lower}) must not exceed {upper_key} ({upper})")]
    InvalidRange {
        lower_key: String,
        lower: f32,
        upper_key: String,
        upper: f32,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} - {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Failed to serialize configuration: {reason}")]
    SerializeFailed { reason: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Malformed override '{entry}', expected key=value")]
    MalformedOverride { entry: String },
}

/// Convenience type alias for Results using VhsError
pub type Result<T> = std::result::Result<T, VhsError>;

impl VhsError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Config(ConfigError::UnknownKey { key }) => {
                format!(
                    "'{}' is not a VHS parameter. Run `vhs-params show` to list every key.",
                    key
                )
            }
            Self::Parameter(ParameterError::InvalidRange { lower_key, upper_key, .. }) => {
                format!("'{}' must be less than or equal to '{}'.", lower_key, upper_key)
            }
            _ => self.to_string(),
        }
    }
}
