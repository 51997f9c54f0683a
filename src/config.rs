use anyhow::{anyhow, Context, Result};
use std::env;

use crate::ocr::OcrConfig;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub static_dir: String,
    pub max_file_size_mb: u64,
    pub cors_allow_any: bool,

    // OCR Configuration
    pub ocr_enabled: bool,
    pub ocr_language: String,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, e.g. a map in tests
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        // SERVER_ADDRESS wins; otherwise host and port are combined.
        // PORT is what most hosting platforms inject, so it beats SERVER_PORT.
        let server_address = match get("SERVER_ADDRESS") {
            Some(address) => address,
            None => {
                let host = get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
                let port = match get("PORT").or_else(|| get("SERVER_PORT")) {
                    Some(raw) => raw
                        .parse::<u16>()
                        .with_context(|| format!("Invalid port '{}'", raw))?,
                    None => DEFAULT_PORT,
                };
                format!("{}:{}", host, port)
            }
        };

        let max_file_size_mb = match get("MAX_FILE_SIZE_MB") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid MAX_FILE_SIZE_MB '{}'", raw))?,
            None => 20,
        };
        if max_file_size_mb == 0 {
            return Err(anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        Ok(Config {
            server_address,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            max_file_size_mb,
            cors_allow_any: parse_bool(get("CORS_ALLOW_ANY"), "CORS_ALLOW_ANY", true)?,
            ocr_enabled: parse_bool(get("OCR_ENABLED"), "OCR_ENABLED", true)?,
            ocr_language: get("OCR_LANGUAGE").unwrap_or_else(|| "eng".to_string()),
        })
    }

    pub fn max_file_size_bytes(&self) -> usize {
        (self.max_file_size_mb as usize).saturating_mul(1024 * 1024)
    }

    pub fn ocr_config(&self) -> OcrConfig {
        OcrConfig {
            enabled: self.ocr_enabled,
            language: self.ocr_language.clone(),
        }
    }

    /// URL printed in the startup banner
    pub fn public_url(&self) -> String {
        let address = self
            .server_address
            .replacen("0.0.0.0", "localhost", 1);
        format!("http://{}", address)
    }
}

fn parse_bool(value: Option<String>, key: &str, default: bool) -> Result<bool> {
    match value {
        None => Ok(default),
        Some(raw) => match raw.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(anyhow!("Invalid boolean for {}: '{}'", key, raw)),
        },
    }
}
