use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_contact::Options;
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_submit_latency_ms")]
    pub submit_latency_ms: u64,
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
    #[serde(default = "default_banner_ttl_ms")]
    pub banner_ttl_ms: u64,
    #[serde(default = "default_busy_label")]
    pub busy_label: String,
    /// Show every validation message instead of only the first one
    #[serde(default)]
    pub show_all_errors: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: default_submit_latency_ms(),
            success_rate: default_success_rate(),
            banner_ttl_ms: default_banner_ttl_ms(),
            busy_label: default_busy_label(),
            show_all_errors: false,
        }
    }
}

impl ContactConfig {
    pub fn options(&self) -> Options {
        Options {
            busy_label: self.busy_label.to_owned(),
            banner_ttl: Duration::from_millis(self.banner_ttl_ms),
            show_all_errors: self.show_all_errors,
        }
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }
}

fn default_submit_latency_ms() -> u64 {
    2000
}

fn default_success_rate() -> f64 {
    0.9
}

fn default_banner_ttl_ms() -> u64 {
    5000
}

fn default_busy_label() -> String {
    folio_contact::DEFAULT_BUSY_LABEL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__CONTACT__SUCCESS_RATE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("contact.submit_latency_ms", default_submit_latency_ms())?
            .set_default("contact.success_rate", default_success_rate())?
            .set_default("contact.banner_ttl_ms", default_banner_ttl_ms())?
            .set_default("contact.busy_label", default_busy_label())?
            .set_default("contact.show_all_errors", false)?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults and env still apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.contact.success_rate) {
            return Err(format!(
                "contact.success_rate must be between 0 and 1, got {}",
                self.contact.success_rate
            ));
        }
        if self.contact.banner_ttl_ms == 0 {
            return Err("contact.banner_ttl_ms must be greater than 0".to_string());
        }
        if self.contact.busy_label.trim().is_empty() {
            return Err("contact.busy_label must not be empty".to_string());
        }

        Ok(())
    }
}
