use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default request timeout against the inference endpoint.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub common: core_config::Config,
    /// When true, reports are synthesized locally instead of calling the
    /// inference endpoint.
    pub demo_mode: bool,
    pub model: ModelSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    /// Model identifier reported in responses (e.g. TerraMind-1.0-large).
    pub name: String,
    /// Inference endpoint URL. Only meaningful when demo mode is off.
    pub endpoint: Option<String>,
    /// Timeout for inference calls in seconds.
    pub timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let demo_mode = get_env("TERRAMIND_DEMO_MODE", Some("true"), is_prod)?
            .eq_ignore_ascii_case("true");

        Ok(Settings {
            common,
            demo_mode,
            model: ModelSettings {
                name: get_env("TERRAMIND_MODEL", Some("TerraMind-1.0-large"), is_prod)?,
                endpoint: if demo_mode {
                    env::var("TERRAMIND_ENDPOINT").ok()
                } else {
                    Some(get_env("TERRAMIND_ENDPOINT", None, is_prod)?)
                },
                timeout_secs: get_env(
                    "TERRAMIND_TIMEOUT_SECS",
                    Some(&DEFAULT_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
