use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Missing credentials: {field} is not set")]
    MissingCredentials { field: String },

    #[error("No project found for the current user")]
    NoProject,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Auth,
    Config,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CliError::HttpError(_) => ErrorCategory::Network,
            CliError::ApiError { .. } | CliError::NoProject => ErrorCategory::Api,
            CliError::Unauthorized { .. } | CliError::MissingCredentials { .. } => {
                ErrorCategory::Auth
            }
            CliError::ConfigError { .. }
            | CliError::InvalidConfigValueError { .. }
            | CliError::TomlError(_) => ErrorCategory::Config,
            CliError::IoError(_) => ErrorCategory::Io,
            CliError::SerializationError(_) => ErrorCategory::Serialization,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // transient, worth retrying
            CliError::HttpError(_) => ErrorSeverity::Medium,
            CliError::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            CliError::ApiError { .. }
            | CliError::NoProject
            | CliError::Unauthorized { .. }
            | CliError::MissingCredentials { .. }
            | CliError::ConfigError { .. }
            | CliError::InvalidConfigValueError { .. }
            | CliError::TomlError(_) => ErrorSeverity::High,
            CliError::IoError(_) | CliError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the HTTP layer should try the request again.
    pub fn is_retryable(&self) -> bool {
        match self {
            CliError::HttpError(e) => e.is_connect() || e.is_timeout(),
            CliError::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check your network connection and the API URL, then try again".to_string()
            }
            ErrorCategory::Api => match self {
                CliError::NoProject => {
                    "Create a project in the web UI or set LIGHTNING_CLOUD_PROJECT_ID".to_string()
                }
                _ => "The control plane rejected the request; retry later or check the filter values".to_string(),
            },
            ErrorCategory::Auth => {
                "Set LIGHTNING_USER_ID and LIGHTNING_API_KEY, or add them under [auth] in the config file"
                    .to_string()
            }
            ErrorCategory::Config => {
                "Fix the configuration file or the command-line overrides".to_string()
            }
            ErrorCategory::Io => "Check file permissions and available disk space".to_string(),
            ErrorCategory::Serialization => {
                "The control plane returned an unexpected payload; upgrade the CLI".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CliError::HttpError(_) => "Could not reach the Lightning AI control plane".to_string(),
            CliError::ApiError { status, message } => {
                format!("The control plane returned an error ({}): {}", status, message)
            }
            CliError::Unauthorized { .. } => "Your credentials were rejected".to_string(),
            CliError::MissingCredentials { field } => format!("{} is required to log in", field),
            CliError::NoProject => "You are not a member of any project".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
