//! Moderation Module
//!
//! Length validation and profanity masking for chirp bodies.
//!
//! ## Rules
//! - Bodies longer than `max_length` characters are rejected
//! - Words matching the banned list (case-insensitive) become `****`
//! - Only whole whitespace-separated words match: `Sharbert!` is kept
//! - Cleaning collapses runs of whitespace into single spaces

use std::collections::HashSet;

use crate::config::Config;
use crate::error::{ChirpyError, Result};

/// Replacement for a banned word
pub const MASK: &str = "****";

/// Validates and cleans chirp bodies
#[derive(Debug, Clone)]
pub struct ContentFilter {
    /// Max body length in characters
    max_length: usize,

    /// Banned words, lowercased
    banned: HashSet<String>,
}

impl ContentFilter {
    pub fn new<I, S>(max_length: usize, banned_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            max_length,
            banned: banned_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Build a filter from the moderation section of the config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_chirp_length, &config.banned_words)
    }

    /// Reject bodies over the length limit
    pub fn validate(&self, body: &str) -> Result<()> {
        let length = body.chars().count();
        if length > self.max_length {
            return Err(ChirpyError::ChirpTooLong {
                length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Mask banned words
    pub fn clean(&self, body: &str) -> String {
        body.split_whitespace()
            .map(|word| {
                if self.banned.contains(&word.to_lowercase()) {
                    MASK
                } else {
                    word
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Validate, then clean
    pub fn moderate(&self, body: &str) -> Result<String> {
        self.validate(body)?;
        Ok(self.clean(body))
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
