use serde::Deserialize;
use std::fs;
use thiserror::Error;

use crate::payment::GatewayCredentials;

/// Environment variables that override the credentials in the YAML file.
pub const KEY_ID_ENV: &str = "RAZORPAY_KEY_ID";
pub const KEY_SECRET_ENV: &str = "RAZORPAY_KEY_SECRET";

pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub payment_gateway: PaymentGatewayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayProvider {
    #[default]
    Razorpay,
    Mock,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentGatewayConfig {
    #[serde(default)]
    pub provider: GatewayProvider,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `key_id` / `key_secret`, usually left blank and supplied via env
    #[serde(flatten)]
    pub credentials: GatewayCredentials,
    /// Unset means the gateway call may take as long as the gateway does
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    /// Return gateway error text to the client verbatim
    #[serde(default = "default_true")]
    pub expose_gateway_errors: bool,
}

impl Default for PaymentGatewayConfig {
    fn default() -> Self {
        Self {
            provider: GatewayProvider::default(),
            base_url: default_base_url(),
            credentials: GatewayCredentials::default(),
            request_timeout_ms: None,
            expose_gateway_errors: true,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_GATEWAY_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load `config/{env}.yaml` and apply credential overrides from the environment.
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&content)?;
        config.apply_credential_overrides(
            std::env::var(KEY_ID_ENV).ok(),
            std::env::var(KEY_SECRET_ENV).ok(),
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn apply_credential_overrides(
        &mut self,
        key_id: Option<String>,
        key_secret: Option<String>,
    ) {
        let credentials = std::mem::take(&mut self.payment_gateway.credentials);
        self.payment_gateway.credentials = credentials.with_overrides(key_id, key_secret);
    }

    pub fn credentials(&self) -> GatewayCredentials {
        self.payment_gateway.credentials.clone()
    }
}
