use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use agentchat_llm_api::{BackendType, ClientOptions};

use crate::cli::Cli;

pub const DEFAULT_AGENT_NAME: &str = "Content Agent";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown backend '{0}' (expected gemini, openai or llama)")]
    UnknownBackend(String),

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("the {0} backend needs an API URL (--api-url or AGENTCHAT_API_URL)")]
    MissingApiUrl(BackendType),
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub name: Option<String>,
    pub backend: Option<String>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Settings and credentials read from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub name: Option<String>,
    pub backend: Option<String>,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl EnvConfig {
    /// Read `AGENTCHAT_*` settings plus the provider keys; empty values count as unset
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match non_empty_var("AGENTCHAT_TIMEOUT_SECS") {
            Some(value) => Some(value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "AGENTCHAT_TIMEOUT_SECS",
                value,
            })?),
            None => None,
        };

        Ok(Self {
            name: non_empty_var("AGENTCHAT_NAME"),
            backend: non_empty_var("AGENTCHAT_BACKEND"),
            model: non_empty_var("AGENTCHAT_MODEL"),
            api_url: non_empty_var("AGENTCHAT_API_URL"),
            timeout_secs,
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// `~/.agentchat/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(".agentchat").join("config.toml"))
}

/// Fully resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub name: String,
    pub backend: BackendType,
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub timeout: Option<Duration>,
    pub verbose: bool,
    pub log_conversation: bool,
    pub work_dir: PathBuf,
    /// Key for the selected backend; `None` means fallback mode unless the backend needs no key
    pub api_key: Option<String>,
    pub gemini_key_found: bool,
    pub openai_key_found: bool,
}

impl AppConfig {
    /// Load from the environment and config file, then apply CLI overrides
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let env_config = EnvConfig::from_env()?;
        let file_config = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            },
        };
        let current_dir = env::current_dir().map_err(ConfigError::CurrentDir)?;

        Self::resolve(cli, &env_config, &file_config, current_dir)
    }

    /// Precedence: CLI flags > AGENTCHAT_* env > config file > defaults
    pub fn resolve(
        cli: &Cli,
        env_config: &EnvConfig,
        file_config: &FileConfig,
        current_dir: PathBuf,
    ) -> Result<Self, ConfigError> {
        let name = cli
            .name
            .clone()
            .or_else(|| env_config.name.clone())
            .or_else(|| file_config.name.clone())
            .unwrap_or_else(|| DEFAULT_AGENT_NAME.to_string());

        let backend = match cli
            .backend
            .as_ref()
            .or(env_config.backend.as_ref())
            .or(file_config.backend.as_ref())
        {
            Some(name) => BackendType::from_name(name).ok_or_else(|| ConfigError::UnknownBackend(name.clone()))?,
            None => BackendType::Gemini,
        };

        let model = cli
            .model
            .clone()
            .or_else(|| env_config.model.clone())
            .or_else(|| file_config.model.clone());

        let api_url = cli
            .api_url
            .clone()
            .or_else(|| env_config.api_url.clone())
            .or_else(|| file_config.api_url.clone());

        if backend == BackendType::Llama && api_url.is_none() {
            return Err(ConfigError::MissingApiUrl(backend));
        }

        let timeout = match cli.timeout_secs.or(env_config.timeout_secs).or(file_config.timeout_secs) {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    name: "timeout_secs",
                    value: "0".to_string(),
                })
            }
            secs => secs.map(Duration::from_secs),
        };

        let work_dir = match &cli.work_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => current_dir.join(dir),
            None => current_dir,
        };

        let api_key = match backend {
            BackendType::Gemini => env_config.gemini_api_key.clone(),
            BackendType::OpenAI => env_config.openai_api_key.clone(),
            BackendType::Llama => None,
        };

        Ok(Self {
            name,
            backend,
            model,
            api_url,
            timeout,
            verbose: cli.verbose,
            log_conversation: cli.log_conversation,
            work_dir,
            api_key,
            gemini_key_found: env_config.gemini_api_key.is_some(),
            openai_key_found: env_config.openai_api_key.is_some(),
        })
    }

    /// Whether a model client can be built; otherwise the session runs in fallback mode
    pub fn is_live(&self) -> bool {
        self.api_key.is_some() || self.backend == BackendType::Llama
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
            verbose: self.verbose,
        }
    }
}
