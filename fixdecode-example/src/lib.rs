/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Common utilities shared across the FixDecode example programs.

use anyhow::Context;
use fixdecode::dictionary::Dictionary;
use std::env;
use std::fs;
use tracing::info;

/// Message decoded when `FIXDECODE_MESSAGE` is not set.
pub const DEFAULT_MESSAGE: &str = "8=FIX.4.4|9=74|35=2|49=CNX|34=8263336|\
    52=20180126-07:39:59.683|56=imdstream|16=0|7=12812|10=036|";

/// Visible delimiter used when `FIXDECODE_DELIMITER` is not set.
pub const DEFAULT_DELIMITER: &str = "|";

/// Example configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    /// Raw message, possibly using a visible delimiter.
    pub message: String,
    /// Path to a JSON dictionary; the embedded FIX 4.4 dictionary is used when absent.
    pub dictionary: Option<String>,
    /// Visible delimiter replaced with SOH before decoding.
    pub delimiter: String,
}

impl ExampleConfig {
    /// Loads the configuration from `FIXDECODE_MESSAGE`, `FIXDECODE_DICTIONARY`
    /// and `FIXDECODE_DELIMITER`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            message: env::var("FIXDECODE_MESSAGE").unwrap_or_else(|_| DEFAULT_MESSAGE.to_string()),
            dictionary: env::var("FIXDECODE_DICTIONARY").ok(),
            delimiter: env::var("FIXDECODE_DELIMITER")
                .unwrap_or_else(|_| DEFAULT_DELIMITER.to_string()),
        }
    }

    /// Loads the configured dictionary.
    pub fn load_dictionary(&self) -> anyhow::Result<Dictionary> {
        match &self.dictionary {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading dictionary {path}"))?;
                let dictionary = Dictionary::from_json(&json)
                    .with_context(|| format!("parsing dictionary {path}"))?;
                info!(path = %path, fields = dictionary.len(), "loaded dictionary");
                Ok(dictionary)
            }
            None => Ok(Dictionary::fix44()),
        }
    }
}

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
