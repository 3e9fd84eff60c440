//! # Configuration Module
//!
//! Runtime settings for the grocery list binary. Values come from the process
//! environment (optionally seeded from a `.env` file), with defaults for
//! everything.

use crate::localization::{detect_language, DEFAULT_LANGUAGE};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_STORAGE_KEY: &str = "grocery_list";

pub const ENV_DATA_DIR: &str = "GROCERY_DATA_DIR";
pub const ENV_STORAGE_KEY: &str = "GROCERY_STORAGE_KEY";
pub const ENV_RECIPES_FILE: &str = "GROCERY_RECIPES_FILE";
pub const ENV_LANGUAGE: &str = "GROCERY_LANG";
pub const ENV_LOG_FORMAT: &str = "GROCERY_LOG_FORMAT";

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Unrecognized values fall back to [`LogFormat::Pretty`]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Configuration for the grocery list binary
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryConfig {
    /// Directory holding the persisted list
    pub data_dir: PathBuf,
    /// Key the list is stored under
    pub storage_key: String,
    /// JSON recipe book to add recipes from
    pub recipes_file: Option<PathBuf>,
    /// Language for rendered output (e.g. "en", "fr")
    pub language: String,
    pub log_format: LogFormat,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            recipes_file: None,
            language: DEFAULT_LANGUAGE.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl GroceryConfig {
    /// Read configuration from the environment, loading `.env` first if present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_dir: get(ENV_DATA_DIR).map(PathBuf::from).unwrap_or(defaults.data_dir),
            storage_key: get(ENV_STORAGE_KEY).unwrap_or(defaults.storage_key),
            recipes_file: get(ENV_RECIPES_FILE).map(PathBuf::from),
            language: get(ENV_LANGUAGE)
                .map(|lang| detect_language(Some(&lang)).to_string())
                .unwrap_or(defaults.language),
            log_format: get(ENV_LOG_FORMAT)
                .map(|format| LogFormat::parse(&format))
                .unwrap_or_default(),
        }
    }
}
