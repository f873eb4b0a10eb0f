//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.wordcard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The dictionary API key is normally supplied through `DICTIONARY_API_KEY`
//! (a `.env` file in the working directory works too).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WordcardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub flashcards: FlashcardConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub timer_duration_secs: Option<u64>,
    pub timer_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub dictionary: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlashcardConfig {
    pub url: Option<String>,
    pub deck_name: Option<String>,
    pub model_name: Option<String>,
    pub back_placeholder: Option<String>,
    pub tags: Option<Vec<String>>,
    pub allow_duplicate: Option<bool>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMER_DURATION_SECS: u64 = 60;
pub const DEFAULT_TIMER_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_DICTIONARY_BASE_URL: &str = "https://api.collinsdictionary.com";
pub const DEFAULT_DICTIONARY: &str = "english";
pub const DEFAULT_ANKI_CONNECT_URL: &str = "http://localhost:8765";
pub const DEFAULT_DECK_NAME: &str = "test1";
pub const DEFAULT_MODEL_NAME: &str = "Basic";
pub const DEFAULT_BACK_PLACEHOLDER: &str = "back";
pub const DEFAULT_FLASHCARD_TIMEOUT_SECS: u64 = 10;

pub const API_KEY_ENV: &str = "DICTIONARY_API_KEY";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub timer_duration: Duration,
    pub timer_interval: Duration,
    pub dictionary_api_key: Option<String>,
    pub dictionary_base_url: String,
    pub dictionary_name: String,
    /// `None` waits for the dictionary indefinitely.
    pub dictionary_timeout: Option<Duration>,
    pub anki_connect_url: String,
    pub deck_name: String,
    pub model_name: String,
    pub back_placeholder: String,
    pub tags: Vec<String>,
    pub allow_duplicate: bool,
    pub flashcard_timeout: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_key(&WordcardConfig::default(), None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.wordcard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wordcard").join("config.toml"))
}

/// Load config from `~/.wordcard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WordcardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WordcardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WordcardConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<WordcardConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WordcardConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WordcardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Avoid writing the API key to the log
    debug!(
        "Config: general={:?} flashcards={:?}",
        config.general, config.flashcards
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# wordcard configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# timer_duration_secs = 60
# timer_interval_ms = 1000

# [dictionary]
# api_key = "..."                     # Or set DICTIONARY_API_KEY env var
# base_url = "https://api.collinsdictionary.com"
# dictionary = "english"
# timeout_secs = 15                   # Unset = wait indefinitely

# [flashcards]
# url = "http://localhost:8765"       # AnkiConnect endpoint
# deck_name = "test1"
# model_name = "Basic"
# back_placeholder = "back"
# tags = ["wordcard"]
# allow_duplicate = false
# timeout_secs = 10
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &WordcardConfig) -> ResolvedConfig {
    resolve_with_key(config, std::env::var(API_KEY_ENV).ok())
}

/// Like `resolve`, with the env lookup already done. `env_key` wins over the file.
fn resolve_with_key(config: &WordcardConfig, env_key: Option<String>) -> ResolvedConfig {
    let dictionary_api_key = env_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| config.dictionary.api_key.clone());

    let flashcards = &config.flashcards;

    ResolvedConfig {
        timer_duration: Duration::from_secs(
            config
                .general
                .timer_duration_secs
                .unwrap_or(DEFAULT_TIMER_DURATION_SECS),
        ),
        timer_interval: Duration::from_millis(
            config
                .general
                .timer_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_TIMER_INTERVAL_MS),
        ),
        dictionary_api_key,
        dictionary_base_url: config
            .dictionary
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_DICTIONARY_BASE_URL.to_string()),
        dictionary_name: config
            .dictionary
            .dictionary
            .clone()
            .unwrap_or_else(|| DEFAULT_DICTIONARY.to_string()),
        dictionary_timeout: config.dictionary.timeout_secs.map(Duration::from_secs),
        anki_connect_url: flashcards
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_ANKI_CONNECT_URL.to_string()),
        deck_name: flashcards
            .deck_name
            .clone()
            .unwrap_or_else(|| DEFAULT_DECK_NAME.to_string()),
        model_name: flashcards
            .model_name
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
        back_placeholder: flashcards
            .back_placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_BACK_PLACEHOLDER.to_string()),
        tags: flashcards.tags.clone().unwrap_or_default(),
        allow_duplicate: flashcards.allow_duplicate.unwrap_or(false),
        flashcard_timeout: Duration::from_secs(
            flashcards
                .timeout_secs
                .unwrap_or(DEFAULT_FLASHCARD_TIMEOUT_SECS),
        ),
    }
}
