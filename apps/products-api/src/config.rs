//! Configuration for Products API

use core_config::{app_info, env_parse_or_default, server::ServerConfig, AppInfo, FromEnv};
use std::time::Duration;

pub use core_config::Environment;

/// Seconds allowed for in-flight work once a shutdown signal arrives
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let shutdown_timeout = Duration::from_secs(env_parse_or_default(
            "SHUTDOWN_TIMEOUT_SECS",
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            shutdown_timeout,
        })
    }
}
