#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CliError, Result};
use crate::utils::output::OutputFormat;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://lightning.ai";

pub const CLOUD_URL_ENV: &str = "LIGHTNING_CLOUD_URL";
pub const USER_ID_ENV: &str = "LIGHTNING_USER_ID";
pub const API_KEY_ENV: &str = "LIGHTNING_API_KEY";
pub const PROJECT_ID_ENV: &str = "LIGHTNING_CLOUD_PROJECT_ID";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub project: ProjectSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub url: String,
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
    pub page_limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 30,
            retry_attempts: 3,
            retry_delay_ms: 500,
            page_limit: 100,
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub user_id: Option<String>,
    pub api_key: Option<String>,
}

// keeps the key out of debug logs
impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("user_id", &self.user_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

impl Settings {
    /// `~/.lightning/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".lightning").join("config.toml"))
    }

    /// Loads the explicit file if given, otherwise the default file when it exists, then
    /// applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(default) => {
                    tracing::debug!("Loading configuration from {}", default.display());
                    Self::from_file(default)?
                }
                None => Self::default(),
            },
        };

        settings.apply_env_from(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CliError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| CliError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Applies `LIGHTNING_*` overrides. A variable exported with a blank value counts as unset.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_blank(CLOUD_URL_ENV) {
            self.api.url = url;
        }
        if let Some(user_id) = non_blank(USER_ID_ENV) {
            self.auth.user_id = Some(user_id);
        }
        if let Some(api_key) = non_blank(API_KEY_ENV) {
            self.auth.api_key = Some(api_key);
        }
        if let Some(project_id) = non_blank(PROJECT_ID_ENV) {
            self.project.id = Some(project_id);
        }
    }
}

impl ConfigProvider for Settings {
    fn project_id(&self) -> Option<&str> {
        self.project.id.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn page_limit(&self) -> u32 {
        self.api.page_limit
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.url", &self.api.url)?;
        validation::validate_positive_number("api.timeout_seconds", self.api.timeout_seconds, 1)?;
        validation::validate_range("api.retry_attempts", self.api.retry_attempts, 0, 10)?;
        validation::validate_range("api.page_limit", self.api.page_limit, 1, 1000)?;

        if let Some(project_id) = &self.project.id {
            validation::validate_non_empty_string("project.id", project_id)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
