use crate::adapters::outbound::{DEFAULT_BRASIL_API_URL, DEFAULT_VIA_CEP_URL};
use crate::application::{RacePolicy, RaceSettings};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CEP: &str = "01153000";
const DEFAULT_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Lookup settings
    pub cep: String,
    pub timeout_ms: u64,
    pub policy: String,
    pub debug: bool,

    // Upstream base URLs
    pub brasil_api_url: String,
    pub via_cep_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cep: DEFAULT_CEP.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            policy: RacePolicy::FirstSuccess.as_str().to_string(),
            debug: false,
            brasil_api_url: DEFAULT_BRASIL_API_URL.to_string(),
            via_cep_url: DEFAULT_VIA_CEP_URL.to_string(),
        }
    }
}

impl Config {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if RacePolicy::parse(&self.policy).is_none() {
            return Err(ConfigError::UnknownPolicy(self.policy.clone()));
        }
        if self.brasil_api_url.is_empty() {
            return Err(ConfigError::MissingUrl("CEP_RACE_BRASILAPI_URL"));
        }
        if self.via_cep_url.is_empty() {
            return Err(ConfigError::MissingUrl("CEP_RACE_VIACEP_URL"));
        }
        Ok(())
    }

    pub fn race_settings(&self) -> Result<RaceSettings, ConfigError> {
        self.validate()?;
        Ok(RaceSettings {
            timeout: Duration::from_millis(self.timeout_ms),
            policy: RacePolicy::parse(&self.policy)
                .ok_or_else(|| ConfigError::UnknownPolicy(self.policy.clone()))?,
        })
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("unknown race policy '{0}' (expected first-success or first-outcome)")]
    UnknownPolicy(String),
    #[error("{0} must not be empty")]
    MissingUrl(&'static str),
}

pub fn load_config() -> anyhow::Result<Config> {
    let cep = std::env::var("CEP_RACE_CEP").unwrap_or_else(|_| DEFAULT_CEP.to_string());

    let timeout_ms = std::env::var("CEP_RACE_TIMEOUT_MS")
        .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
        .parse()
        .unwrap_or(DEFAULT_TIMEOUT_MS);

    let policy = std::env::var("CEP_RACE_POLICY")
        .unwrap_or_else(|_| RacePolicy::FirstSuccess.as_str().to_string());

    let debug = std::env::var("DEBUG").is_ok();

    let brasil_api_url = std::env::var("CEP_RACE_BRASILAPI_URL")
        .unwrap_or_else(|_| DEFAULT_BRASIL_API_URL.to_string());

    let via_cep_url =
        std::env::var("CEP_RACE_VIACEP_URL").unwrap_or_else(|_| DEFAULT_VIA_CEP_URL.to_string());

    Ok(Config {
        cep,
        timeout_ms,
        policy,
        debug,
        brasil_api_url,
        via_cep_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.cep, "01153000");
        assert_eq!(cfg.timeout_ms, 1000);
        assert_eq!(cfg.policy, "first-success");
        assert_eq!(cfg.brasil_api_url, "https://brasilapi.com.br");
        assert_eq!(cfg.via_cep_url, "http://viacep.com.br");
        assert!(!cfg.debug);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_config_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("CEP_RACE_CEP");
        std::env::remove_var("CEP_RACE_TIMEOUT_MS");
        std::env::remove_var("CEP_RACE_POLICY");

        let cfg = load_config().unwrap();
        assert_eq!(cfg.cep, "01153000");
        assert_eq!(cfg.timeout_ms, 1000);
        assert_eq!(cfg.policy, "first-success");
    }

    #[test]
    fn test_load_config_with_custom_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("CEP_RACE_CEP", "20040020");
        std::env::set_var("CEP_RACE_TIMEOUT_MS", "2500");
        std::env::set_var("CEP_RACE_POLICY", "first-outcome");
        std::env::set_var("CEP_RACE_BRASILAPI_URL", "http://127.0.0.1:9001");
        std::env::set_var("CEP_RACE_VIACEP_URL", "http://127.0.0.1:9002");

        let cfg = load_config().unwrap();
        assert_eq!(cfg.cep, "20040020");
        assert_eq!(cfg.timeout_ms, 2500);
        assert_eq!(cfg.policy, "first-outcome");
        assert_eq!(cfg.brasil_api_url, "http://127.0.0.1:9001");
        assert_eq!(cfg.via_cep_url, "http://127.0.0.1:9002");

        std::env::remove_var("CEP_RACE_CEP");
        std::env::remove_var("CEP_RACE_TIMEOUT_MS");
        std::env::remove_var("CEP_RACE_POLICY");
        std::env::remove_var("CEP_RACE_BRASILAPI_URL");
        std::env::remove_var("CEP_RACE_VIACEP_URL");
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("CEP_RACE_TIMEOUT_MS", "one second");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.timeout_ms, 1000); // default
        std::env::remove_var("CEP_RACE_TIMEOUT_MS");
    }

    #[test]
    fn test_load_config_with_debug() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("DEBUG", "1");
        let cfg = load_config().unwrap();
        assert!(cfg.debug);
        std::env::remove_var("DEBUG");
    }

    #[test]
    fn test_validate_zero_timeout() {
        let cfg = Config {
            timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_validate_unknown_policy() {
        let cfg = Config {
            policy: "fastest".to_string(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::UnknownPolicy(p)) if p == "fastest"));
    }

    #[test]
    fn test_validate_empty_url() {
        let cfg = Config {
            via_cep_url: String::new(),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::MissingUrl("CEP_RACE_VIACEP_URL"))
        );
    }

    #[test]
    fn test_race_settings() {
        let cfg = Config {
            timeout_ms: 250,
            policy: "first-outcome".to_string(),
            ..Default::default()
        };
        let settings = cfg.race_settings().unwrap();
        assert_eq!(settings.timeout, Duration::from_millis(250));
        assert_eq!(settings.policy, RacePolicy::FirstOutcome);
    }
}
