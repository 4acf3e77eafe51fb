use crate::curation::ProfileStrategy;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/vibecurate.db?mode=rwc";
pub const DEFAULT_JAMENDO_BASE_URL: &str = "https://api.jamendo.com/v3.0";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JamendoConfig {
    pub client_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    /// Absent when `JAMENDO_CLIENT_ID` is unset; playlist generation then fails
    pub jamendo: Option<JamendoConfig>,
    pub gemini: Option<GeminiConfig>,
    pub profile_strategy: ProfileStrategy,
    /// Fixed RNG seed for reproducible playlists
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let jamendo = get("JAMENDO_CLIENT_ID").map(|client_id| JamendoConfig {
            client_id,
            base_url: get("JAMENDO_BASE_URL")
                .unwrap_or_else(|| DEFAULT_JAMENDO_BASE_URL.to_string()),
        });

        let gemini = get("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        });

        let profile_strategy = match get("PROFILE_STRATEGY") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PROFILE_STRATEGY",
                value,
            })?,
            None if gemini.is_some() => ProfileStrategy::Generative,
            None => ProfileStrategy::Heuristic,
        };

        let seed = match get("CURATOR_SEED") {
            Some(value) => Some(value.parse().map_err(|_| ConfigError::Invalid {
                name: "CURATOR_SEED",
                value,
            })?),
            None => None,
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jamendo,
            gemini,
            profile_strategy,
            seed,
        })
    }
}
