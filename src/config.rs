use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Allowed CORS origins. Required unless cors_permissive is true.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Explicitly allow all origins (development only). Defaults to false.
    #[serde(default)]
    pub cors_permissive: bool,
    /// Address the server binds to (default: 0.0.0.0:3000)
    #[serde(default = "Config::default_bind_addr")]
    pub bind_addr: String,
    /// Simulated latency applied to timed dashboard operations
    #[serde(default)]
    pub timing: TimingConfig,
    /// Fixed seed for the synthetic-refresh RNG. Omit to seed from entropy;
    /// set for reproducible jitter output.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

/// Simulated latency for the operations that pretend to do work.
///
/// Each operation kind pauses for a fixed duration; these knobs exist so
/// the pauses can be shortened in development.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimingConfig {
    /// Pause before a login attempt resolves (default: 1500)
    #[serde(default = "TimingConfig::default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// Pause before a demo login resolves (default: 1200)
    #[serde(default = "TimingConfig::default_demo_login_delay_ms")]
    pub demo_login_delay_ms: u64,
    /// Pause before a simulation/festival mode switch lands (default: 1200)
    #[serde(default = "TimingConfig::default_mode_switch_delay_ms")]
    pub mode_switch_delay_ms: u64,
    /// Pause before a dashboard refresh lands (default: 1500)
    #[serde(default = "TimingConfig::default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: Self::default_login_delay_ms(),
            demo_login_delay_ms: Self::default_demo_login_delay_ms(),
            mode_switch_delay_ms: Self::default_mode_switch_delay_ms(),
            refresh_delay_ms: Self::default_refresh_delay_ms(),
        }
    }
}

impl TimingConfig {
    fn default_login_delay_ms() -> u64 {
        1500
    }
    fn default_demo_login_delay_ms() -> u64 {
        1200
    }
    fn default_mode_switch_delay_ms() -> u64 {
        1200
    }
    fn default_refresh_delay_ms() -> u64 {
        1500
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
    pub fn demo_login_delay(&self) -> Duration {
        Duration::from_millis(self.demo_login_delay_ms)
    }
    pub fn mode_switch_delay(&self) -> Duration {
        Duration::from_millis(self.mode_switch_delay_ms)
    }
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

impl Config {
    fn default_bind_addr() -> String {
        "0.0.0.0:3000".to_string()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.cors_origins.is_empty());
        assert!(!config.cors_permissive);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.timing.login_delay_ms, 1500);
        assert_eq!(config.timing.mode_switch_delay_ms, 1200);
        assert_eq!(config.timing.refresh_delay_ms, 1500);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn overrides_are_honored() {
        let yaml = "
cors_permissive: true
bind_addr: 127.0.0.1:8080
timing:
  refresh_delay_ms: 10
rng_seed: 42
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.cors_permissive);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.timing.refresh_delay_ms, 10);
        // Untouched timing fields keep their defaults
        assert_eq!(config.timing.login_delay_ms, 1500);
        assert_eq!(config.rng_seed, Some(42));
    }
}
