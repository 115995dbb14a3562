//! Runtime configuration, read from environment variables with development
//! defaults. `Config::from_env` validates numeric and URL values.

use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MENU_BASE_URL: &str = "MENU_BASE_URL";
pub const ENV_FETCH_DELAY_MS: &str = "FETCH_DELAY_MS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_FETCH_RETRIES: &str = "FETCH_RETRIES";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MENU_BASE_URL: &str = "https://umassdining.com";
const DEFAULT_FETCH_DELAY_MS: u64 = 1000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_FETCH_RETRIES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    menu_base_url: Url,
    fetch_delay: Duration,
    fetch_timeout: Duration,
    fetch_retries: u32,
}

impl Config {
    pub fn new(
        bind_addr: impl Into<String>,
        menu_base_url: Url,
        fetch_delay: Duration,
        fetch_timeout: Duration,
        fetch_retries: u32,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            menu_base_url,
            fetch_delay,
            fetch_timeout,
            fetch_retries,
        }
    }

    /// Load from environment variables, falling back to development defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let menu_base_url = match env::var(ENV_MENU_BASE_URL) {
            Ok(raw) => Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
                field: ENV_MENU_BASE_URL,
                reason: e.to_string(),
            })?,
            Err(_) => default_base_url(),
        };

        let fetch_delay =
            Duration::from_millis(read_u64(ENV_FETCH_DELAY_MS, DEFAULT_FETCH_DELAY_MS)?);
        let fetch_timeout =
            Duration::from_secs(read_u64(ENV_FETCH_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS)?);
        if fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: ENV_FETCH_TIMEOUT_SECS,
                reason: "must be greater than zero".to_string(),
            });
        }

        let fetch_retries = read_u64(ENV_FETCH_RETRIES, DEFAULT_FETCH_RETRIES.into())?;
        let fetch_retries = u32::try_from(fetch_retries).map_err(|e| ConfigError::InvalidValue {
            field: ENV_FETCH_RETRIES,
            reason: e.to_string(),
        })?;

        Ok(Self {
            bind_addr,
            menu_base_url,
            fetch_delay,
            fetch_timeout,
            fetch_retries,
        })
    }

    /// TCP bind address (host:port) for the HTTP API.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Site root that location menu paths are resolved against.
    pub fn menu_base_url(&self) -> &Url {
        &self.menu_base_url
    }
    /// Minimum spacing between two page fetches.
    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
    /// Extra attempts for a menu fetch that failed with a transient error.
    pub fn fetch_retries(&self) -> u32 {
        self.fetch_retries
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_BIND_ADDR,
            default_base_url(),
            Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            DEFAULT_FETCH_RETRIES,
        )
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_MENU_BASE_URL).expect("default base url is valid")
}

fn read_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                field: key,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_BIND_ADDR,
            ENV_MENU_BASE_URL,
            ENV_FETCH_DELAY_MS,
            ENV_FETCH_TIMEOUT_SECS,
            ENV_FETCH_RETRIES,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.menu_base_url().as_str(), "https://umassdining.com/");
        assert_eq!(cfg.fetch_delay(), Duration::from_secs(1));
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.fetch_retries(), 1);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_MENU_BASE_URL, "http://localhost:4000");
            env::set_var(ENV_FETCH_DELAY_MS, "0");
            env::set_var(ENV_FETCH_TIMEOUT_SECS, "30");
            env::set_var(ENV_FETCH_RETRIES, "3");
        }
        let cfg = Config::from_env().unwrap();
        clear_env();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.menu_base_url().as_str(), "http://localhost:4000/");
        assert_eq!(cfg.fetch_delay(), Duration::ZERO);
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.fetch_retries(), 3);
    }

    #[test]
    fn rejects_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_FETCH_DELAY_MS, "soon");
        }
        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(err.to_string().contains(ENV_FETCH_DELAY_MS));

        unsafe {
            env::set_var(ENV_MENU_BASE_URL, "not a url");
        }
        let err = Config::from_env().unwrap_err();
        clear_env();
        assert!(err.to_string().contains(ENV_MENU_BASE_URL));

        unsafe {
            env::set_var(ENV_FETCH_TIMEOUT_SECS, "0");
        }
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
