//! Configuration for Chirpy
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Words masked by the content filter unless overridden
pub const DEFAULT_BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Main configuration for a Chirpy instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the JSON document holding every chirp
    pub db_path: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Directory served under `/app/` (counted by the hit counter)
    pub app_dir: PathBuf,

    /// Directory served under `/assets/`
    pub assets_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Moderation Configuration
    // -------------------------------------------------------------------------
    /// Max chirp length in characters
    pub max_chirp_length: usize,

    /// Words replaced with `****` (matched case-insensitively)
    pub banned_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("database.json"),
            listen_addr: "127.0.0.1:8080".to_string(),
            app_dir: PathBuf::from("."),
            assets_dir: PathBuf::from("./assets"),
            max_chirp_length: 140,
            banned_words: DEFAULT_BANNED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the directory served under `/app/`
    pub fn app_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.app_dir = path.into();
        self
    }

    /// Set the directory served under `/assets/`
    pub fn assets_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.assets_dir = path.into();
        self
    }

    /// Set the maximum chirp length (in characters)
    pub fn max_chirp_length(mut self, max: usize) -> Self {
        self.config.max_chirp_length = max;
        self
    }

    /// Replace the banned word list
    pub fn banned_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.banned_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
