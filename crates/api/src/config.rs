//! Process configuration, read once from the environment at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use eventgate_dashboard::DashboardConfig;
use eventgate_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "EVENTGATE_BIND_ADDR";
pub const SCAN_DELAY_VAR: &str = "EVENTGATE_SCAN_DELAY_MS";
pub const LOG_FORMAT_VAR: &str = "EVENTGATE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub scan_delay: Duration,
    pub log_format: LogFormat,
    /// Values that were set but unusable; reported once logging is up.
    fallbacks: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            scan_delay: DashboardConfig::DEFAULT_SCAN_DELAY,
            log_format: LogFormat::default(),
            fallbacks: Vec::new(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys use defaults silently.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.trim().parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => config.fallbacks.push(format!(
                    "{BIND_ADDR_VAR}='{raw}' is not a socket address; using {DEFAULT_BIND_ADDR}"
                )),
            }
        }

        if let Some(raw) = lookup(SCAN_DELAY_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.scan_delay = Duration::from_millis(ms),
                Err(_) => config.fallbacks.push(format!(
                    "{SCAN_DELAY_VAR}='{raw}' is not a number of milliseconds; using {}",
                    DashboardConfig::DEFAULT_SCAN_DELAY.as_millis()
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => config.fallbacks.push(format!("{LOG_FORMAT_VAR}: {e}; using json")),
            }
        }

        config
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    pub fn dashboard(&self) -> DashboardConfig {
        DashboardConfig {
            scan_delay: self.scan_delay,
            ..DashboardConfig::default()
        }
    }
}
